//! Error types for the todo API client.
//!
//! # Design
//! The statuses the server uses for domain errors (404, 400, 409) get their
//! own variants. Anything else lands in `HttpError` with the raw status and
//! body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server rejected the payload (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A client-supplied id is already taken (409).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Any other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
