//! HTTP transport types and the blocking transport used by `TodoApiClient`.
//!
//! # Design
//! Requests and responses are plain owned data. `TodoClient` builds and
//! parses them without touching the network; an `HttpTransport` performs the
//! single round-trip in between. Non-2xx statuses come back as data so the
//! status classification stays in one place.

use std::fmt;

use tracing::{debug, error};
use ureq::typestate::WithBody;
use ureq::{Agent, Body, RequestBuilder};

use crate::error::TodoApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    /// Response headers with UTF-8 values, for callers driving `TodoClient`
    /// directly. Status classification ignores them.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Executes one HTTP round-trip.
///
/// Implementations must return every received response as `Ok`, whatever
/// its status, and reserve `Err` for failures that produced no response.
pub trait HttpTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TodoApiError>;
}

/// Blocking transport backed by a `ureq::Agent`.
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl HttpTransport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TodoApiError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;
        debug!(method = method.as_str(), %url, "sending request");

        let result = match method {
            HttpMethod::Get => with_headers(self.agent.get(&url), &headers).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(&url), &headers).call(),
            HttpMethod::Post => send(with_headers(self.agent.post(&url), &headers), body),
            HttpMethod::Put => send(with_headers(self.agent.put(&url), &headers), body),
        };

        let mut response = result.map_err(|e| {
            error!("{} {} failed: {}", method.as_str(), url, e);
            TodoApiError::NetworkError(e.to_string())
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string().map_err(|e| {
            error!("failed to read response body from {}: {}", url, e);
            TodoApiError::NetworkError(e.to_string())
        })?;
        debug!(status, "received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn send(
    builder: RequestBuilder<WithBody>,
    body: Option<String>,
) -> Result<ureq::http::Response<Body>, ureq::Error> {
    match body {
        Some(body) => builder.send(body.as_bytes()),
        None => builder.send_empty(),
    }
}
