//! Error taxonomy for the remote collection store.
//!
//! Read failures (transport, non-2xx, missing record) and write failures are
//! kept distinct so callers can report them differently; nothing here is fatal
//! to the process.

use thiserror::Error;

/// Which mutation an [`ApiError::Write`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    Create,
    Update,
    Delete,
}

impl WriteOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteOp::Create => "create",
            WriteOp::Update => "update",
            WriteOp::Delete => "delete",
        }
    }
}

impl std::fmt::Display for WriteOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the remote collection store client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, reading the body).
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Read returned a non-success status other than 404.
    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    /// The requested record does not exist.
    #[error("no record found at {url}")]
    NotFound { url: String },

    /// A mutation returned a non-success status.
    #[error("{op} failed with status {status}")]
    Write { op: WriteOp, status: u16 },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// True for failures produced by create/update/delete.
    pub fn is_write(&self) -> bool {
        matches!(self, ApiError::Write { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// Short human-readable message for toasts and inline display.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network { .. } => "Network error".to_string(),
            ApiError::Status { status, .. } => format!("Request failed ({status})"),
            ApiError::NotFound { .. } => "Book not found".to_string(),
            ApiError::Write { op, .. } => format!("Failed to {op} book"),
            ApiError::Decode { .. } => "Unexpected response from store".to_string(),
        }
    }
}
