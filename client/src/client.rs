//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. Operations that answer `204 No Content`
//! share `parse_no_content`; every list of todos shares `parse_todo_list`.

use serde::{de::DeserializeOwned, Serialize};
use todo_core::{NewTodo, ReplaceTodo, Todo, TodoDetails, TodoStatusUpdate, User};
use uuid::Uuid;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Result of a successful create: the stored todo and the `Location` header.
#[derive(Debug, Clone)]
pub struct Created {
    pub todo: Todo,
    pub location: Option<String>,
}

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

    // --- build: todo reads ---

    pub fn build_list_todos(&self) -> HttpRequest {
        self.get("/todos")
    }

    pub fn build_list_completed(&self) -> HttpRequest {
        self.get("/todos/completed")
    }

    pub fn build_list_active(&self) -> HttpRequest {
        self.get("/todos/active")
    }

    pub fn build_get_todo(&self, id: Uuid) -> HttpRequest {
        self.get(&format!("/todos/{id}"))
    }

    pub fn build_todo_details(&self, id: Uuid) -> HttpRequest {
        self.get(&format!("/todos/{id}/details"))
    }

    // --- build: todo writes ---

    pub fn build_create_todo(&self, input: &NewTodo) -> Result<HttpRequest, ClientError> {
        self.with_json(HttpMethod::Post, "/todos", input)
    }

    pub fn build_replace_todo(&self, id: Uuid, input: &ReplaceTodo) -> Result<HttpRequest, ClientError> {
        self.with_json(HttpMethod::Put, &format!("/todos/{id}"), input)
    }

    pub fn build_update_status(
        &self,
        id: Uuid,
        input: &TodoStatusUpdate,
    ) -> Result<HttpRequest, ClientError> {
        self.with_json(HttpMethod::Patch, &format!("/todos/{id}/status"), input)
    }

    pub fn build_mark_completed(&self, id: Uuid) -> HttpRequest {
        self.bare(HttpMethod::Patch, &format!("/todos/{id}/complete"))
    }

    pub fn build_mark_active(&self, id: Uuid) -> HttpRequest {
        self.bare(HttpMethod::Patch, &format!("/todos/{id}/active"))
    }

    pub fn build_delete_todo(&self, id: Uuid) -> HttpRequest {
        self.bare(HttpMethod::Delete, &format!("/todos/{id}"))
    }

    // --- build: users ---

    pub fn build_list_users(&self) -> HttpRequest {
        self.get("/users")
    }

    pub fn build_get_user(&self, id: Uuid) -> HttpRequest {
        self.get(&format!("/users/{id}"))
    }

    pub fn build_user_todos(&self, id: Uuid) -> HttpRequest {
        self.get(&format!("/users/{id}/todos"))
    }

    // --- parse ---

    /// Parses the response of any request that returns a list of todos.
    pub fn parse_todo_list(&self, response: HttpResponse) -> Result<Vec<Todo>, ClientError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ClientError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_todo_details(&self, response: HttpResponse) -> Result<TodoDetails, ClientError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Created, ClientError> {
        check_status(&response, 201)?;
        Ok(Created {
            todo: decode(&response.body)?,
            location: response.header("location").map(str::to_string),
        })
    }

    /// Replace, status update, complete and active all answer 204.
    pub fn parse_no_content(&self, response: HttpResponse) -> Result<(), ClientError> {
        check_status(&response, 204)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<Todo, ClientError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<User>, ClientError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_get_user(&self, response: HttpResponse) -> Result<User, ClientError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    fn get(&self, path: &str) -> HttpRequest {
        self.bare(HttpMethod::Get, path)
    }

    fn bare(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        input: &T,
    ) -> Result<HttpRequest, ClientError> {
        let body = serde_json::to_string(input).map_err(|e| ClientError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ClientError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ClientError> {
    match response.status {
        status if status == expected => Ok(()),
        404 => Err(ClientError::NotFound),
        400 => Err(ClientError::BadRequest(error_message(&response.body))),
        409 => Err(ClientError::Conflict(error_message(&response.body))),
        status => Err(ClientError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

/// The `message` field of a JSON error body, or the raw body otherwise.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
