//! Blocking façade over `TodoClient` and an `HttpTransport`.

use crate::client::TodoClient;
use crate::error::TodoApiError;
use crate::http::{HttpTransport, UreqTransport};
use crate::types::Task;

/// Public endpoint of the upstream todo service.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Client for the `/todos` resource.
///
/// Every operation performs exactly one blocking request. The client holds
/// no mutable state, so a shared reference can be used from several threads
/// when the transport allows it.
#[derive(Debug, Clone)]
pub struct TodoApiClient<T = UreqTransport> {
    requests: TodoClient,
    transport: T,
}

impl Default for TodoApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl TodoApiClient {
    /// Creates a client that talks to `base_url` over the default transport.
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::new())
    }
}

impl<T: HttpTransport> TodoApiClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            requests: TodoClient::new(base_url),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        self.requests.base_url()
    }

    /// Fetches every task, in the order the server returns them.
    pub fn list_tasks(&self) -> Result<Vec<Task>, TodoApiError> {
        let response = self.transport.execute(self.requests.build_list_tasks())?;
        self.requests.parse_list_tasks(response)
    }

    /// Fetches a single task. A 404 yields `TodoApiError::ItemNotFound`.
    pub fn get_task(&self, id: &str) -> Result<Task, TodoApiError> {
        let response = self.transport.execute(self.requests.build_get_task(id)?)?;
        self.requests.parse_get_task(id, response)
    }

    /// Creates `task` and returns the server's copy of it.
    pub fn create_task(&self, task: &Task) -> Result<Task, TodoApiError> {
        let response = self.transport.execute(self.requests.build_create_task(task)?)?;
        self.requests.parse_create_task(response)
    }

    /// Replaces the task identified by `task.id`.
    pub fn update_task(&self, task: &Task) -> Result<Task, TodoApiError> {
        let response = self.transport.execute(self.requests.build_update_task(task)?)?;
        self.requests.parse_update_task(response)
    }

    pub fn delete_task(&self, id: &str) -> Result<(), TodoApiError> {
        let response = self.transport.execute(self.requests.build_delete_task(id)?)?;
        self.requests.parse_delete_task(response)
    }
}
