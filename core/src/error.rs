//! Error types for the todo API client.
//!
//! # Design
//! `ItemNotFound` is only produced by a read of a single item: callers
//! branch on it to tell "does not exist" apart from a server or transport
//! failure. A 404 from any other operation lands in `Unexpected` alongside
//! every other status that has no dedicated variant.

use thiserror::Error;

/// Every failure a `TodoApiClient` operation can report.
#[derive(Error, Debug)]
pub enum TodoApiError {
    /// The server returned 404 for a single-item read.
    #[error("task {id} not found")]
    ItemNotFound { id: String },

    /// The server returned 500.
    #[error("unknown server error (HTTP {status})")]
    UnknownError { status: u16 },

    /// The request never produced a usable response: connection refused,
    /// timeout, unreadable or undecodable body.
    #[error("network error: {0}")]
    NetworkError(String),

    /// Any other status the client does not expect.
    #[error("unexpected response (HTTP {status}): {body}")]
    Unexpected { status: u16, body: String },

    /// The request could not be built from the caller's input.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl TodoApiError {
    /// HTTP status behind the error, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ItemNotFound { .. } => Some(404),
            Self::UnknownError { status } | Self::Unexpected { status, .. } => Some(*status),
            Self::NetworkError(_) | Self::InvalidInput(_) => None,
        }
    }
}
