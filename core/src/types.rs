//! Domain records and request payloads for the todo service.
//!
//! # Design
//! The same types are used by the store, the HTTP layer and the client, so
//! the JSON shape (camelCase field names) is fixed here once. Payload types
//! are separate from `Todo` because the server owns `id` and the timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item held by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub name: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
}

impl Todo {
    pub fn status(&self) -> TodoStatus {
        TodoStatus::from(self.is_completed)
    }
}

/// The two states a todo can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoStatus {
    Completed,
    Active,
}

impl From<bool> for TodoStatus {
    fn from(is_completed: bool) -> Self {
        if is_completed {
            TodoStatus::Completed
        } else {
            TodoStatus::Active
        }
    }
}

/// Owner of todos. Users only enter the store through seeding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
}

/// Request payload for creating a todo.
///
/// `name` defaults to empty so a missing name is reported as a validation
/// failure by the store instead of a decode error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
}

impl NewTodo {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Full replacement of the mutable fields of a todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceTodo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_completed: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoStatusUpdate {
    pub is_completed: bool,
}

/// A todo joined with the full name of its owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoDetails {
    pub id: Uuid,
    pub name: String,
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_full_name: Option<String>,
}
