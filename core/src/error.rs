//! Error type returned by `TodoStore` operations.
//!
//! # Design
//! `NotFound` carries the entity name so the HTTP layer can report todos and
//! users with the same variant. Validation messages are user-facing and are
//! passed through to response bodies unchanged.

use thiserror::Error;
use uuid::Uuid;

pub const NAME_REQUIRED: &str = "Name must not be empty.";
pub const CREATED_COMPLETED: &str = "IsCompleted must be false when creating a Todo item.";
pub const STATUS_REQUIRED: &str = "A status payload is required.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record with this identifier exists.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },

    /// The payload violates a field constraint.
    #[error("{0}")]
    ValidationFailed(String),

    /// A client-supplied identifier is already taken.
    #[error("todo {0} already exists")]
    Conflict(Uuid),
}

impl StoreError {
    pub(crate) fn todo_not_found(id: Uuid) -> Self {
        StoreError::NotFound { entity: "todo", id }
    }

    pub(crate) fn user_not_found(id: Uuid) -> Self {
        StoreError::NotFound { entity: "user", id }
    }

    pub(crate) fn invalid(message: &str) -> Self {
        StoreError::ValidationFailed(message.to_string())
    }
}
