//! Error type for the item-catalog API client.
//!
//! # Design
//! The contract surfaces exactly one kind of failure — "request failed" —
//! so there are no per-status variants, no 404 special case. `Status` keeps
//! the raw code and body for diagnostics; the view layer flattens any
//! variant into a single transient notice for the user.

use std::fmt;

/// Errors returned by `CatalogClient` build and parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    Deserialize(String),

    /// The request payload could not be serialized to JSON.
    Serialize(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::Deserialize(msg) => write!(f, "deserialization failed: {msg}"),
            ApiError::Serialize(msg) => write!(f, "serialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
