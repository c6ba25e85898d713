//! Blocking client for a jsonplaceholder-style todo REST API.
//!
//! # Overview
//! `TodoApiClient` exposes list, get, create, update and delete over the
//! `/todos` resource. Each call performs one blocking HTTP request and maps
//! the outcome onto `TodoApiError`.
//!
//! # Design
//! - `TodoClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network, and owns the status
//!   classification.
//! - `HttpTransport` executes the round-trip; `UreqTransport` is the default.
//! - `TodoApiClient` glues the two together and holds no mutable state.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use api::{TodoApiClient, DEFAULT_BASE_URL};
pub use client::TodoClient;
pub use error::TodoApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, UreqTransport};
pub use types::Task;
