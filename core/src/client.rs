//! Stateless request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`, so the status classification can be
//! exercised without a server.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use crate::error::TodoApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Task;

const TODOS_PATH: &str = "/todos";

/// Bytes that cannot appear literally inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Builds `HttpRequest` values and parses `HttpResponse` values for the
/// `/todos` resource.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_tasks(&self) -> HttpRequest {
        self.request(HttpMethod::Get, self.collection_url(), None)
    }

    pub fn build_get_task(&self, id: &str) -> Result<HttpRequest, TodoApiError> {
        let url = self.item_url(id)?;
        Ok(self.request(HttpMethod::Get, url, None))
    }

    pub fn build_create_task(&self, task: &Task) -> Result<HttpRequest, TodoApiError> {
        let body = encode(task)?;
        Ok(self.request(HttpMethod::Post, self.collection_url(), Some(body)))
    }

    pub fn build_update_task(&self, task: &Task) -> Result<HttpRequest, TodoApiError> {
        let url = self.item_url(&task.id)?;
        let body = encode(task)?;
        Ok(self.request(HttpMethod::Put, url, Some(body)))
    }

    pub fn build_delete_task(&self, id: &str) -> Result<HttpRequest, TodoApiError> {
        let url = self.item_url(id)?;
        Ok(self.request(HttpMethod::Delete, url, None))
    }

    pub fn parse_list_tasks(&self, response: HttpResponse) -> Result<Vec<Task>, TodoApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    /// `id` is the one the request was built for; it is echoed in
    /// `ItemNotFound`.
    pub fn parse_get_task(&self, id: &str, response: HttpResponse) -> Result<Task, TodoApiError> {
        if response.status == 404 {
            warn!("task {} not found", id);
            return Err(TodoApiError::ItemNotFound { id: id.to_string() });
        }
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_create_task(&self, response: HttpResponse) -> Result<Task, TodoApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_update_task(&self, response: HttpResponse) -> Result<Task, TodoApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_delete_task(&self, response: HttpResponse) -> Result<(), TodoApiError> {
        check_status(&response)
    }

    fn collection_url(&self) -> String {
        format!("{}{TODOS_PATH}", self.base_url)
    }

    fn item_url(&self, id: &str) -> Result<String, TodoApiError> {
        if id.is_empty() {
            return Err(TodoApiError::InvalidInput("task id must not be empty".to_string()));
        }
        Ok(format!("{}{TODOS_PATH}/{}", self.base_url, encode_segment(id)))
    }

    fn request(&self, method: HttpMethod, url: String, body: Option<String>) -> HttpRequest {
        let mut headers = vec![("accept".to_string(), "application/json".to_string())];
        if body.is_some() {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }
        HttpRequest {
            method,
            url,
            headers,
            body,
        }
    }
}

/// Map the status code of a response to success or a `TodoApiError`.
///
/// Any 2xx is a success. 404 handling for single-item reads happens before
/// this is called.
fn check_status(response: &HttpResponse) -> Result<(), TodoApiError> {
    match response.status {
        200..=299 => Ok(()),
        500 => {
            error!("server returned 500: {}", truncate_body(&response.body));
            Err(TodoApiError::UnknownError { status: 500 })
        }
        status => {
            let body = truncate_body(&response.body);
            warn!("unexpected status {}: {}", status, body);
            Err(TodoApiError::Unexpected { status, body })
        }
    }
}

/// Percent-encode `id` so it always names exactly one segment under `/todos`.
fn encode_segment(id: &str) -> String {
    match id {
        "." => "%2E".to_string(),
        ".." => "%2E%2E".to_string(),
        _ => utf8_percent_encode(id, PATH_SEGMENT).to_string(),
    }
}

fn encode(task: &Task) -> Result<String, TodoApiError> {
    serde_json::to_string(task).map_err(|e| TodoApiError::InvalidInput(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, TodoApiError> {
    serde_json::from_str(body).map_err(|e| {
        error!("malformed response body: {} | body: {}", e, truncate_body(body));
        TodoApiError::NetworkError(format!("malformed response body: {e}"))
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 500;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...[truncated]", &body[..cut]),
        None => body.to_string(),
    }
}
