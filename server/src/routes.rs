//! Route table and handlers. Each handler performs exactly one store
//! operation and maps its result to a response.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use todo_core::{NewTodo, ReplaceTodo, Todo, TodoDetails, TodoStatusUpdate, User};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::AppError;
use crate::extract::{JsonBody, PathParam};
use crate::Db;

pub fn router() -> Router<Db> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/completed", get(list_completed))
        .route("/todos/active", get(list_active))
        .route(
            "/todos/{id}",
            get(get_todo).put(replace_todo).delete(delete_todo),
        )
        .route("/todos/{id}/details", get(todo_details))
        .route("/todos/{id}/status", patch(update_status))
        .route("/todos/{id}/complete", patch(mark_completed))
        .route("/todos/{id}/active", patch(mark_active))
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user))
        .route("/users/{id}/todos", get(user_todos))
}

// --- todo reads ---

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    debug!(count = store.len(), "listing todos");
    Json(store.list_all())
}

async fn list_completed(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await.list_completed();
    Json(todos)
}

async fn list_active(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await.list_active();
    Json(todos)
}

async fn get_todo(
    State(db): State<Db>,
    PathParam(id): PathParam<Uuid>,
) -> Result<Json<Todo>, AppError> {
    let todo = db.read().await.get(id)?.clone();
    Ok(Json(todo))
}

async fn todo_details(
    State(db): State<Db>,
    PathParam(id): PathParam<Uuid>,
) -> Result<Json<TodoDetails>, AppError> {
    let details = db.read().await.details(id)?;
    Ok(Json(details))
}

// --- todo writes ---

async fn create_todo(
    State(db): State<Db>,
    JsonBody(input): JsonBody<NewTodo>,
) -> Result<impl IntoResponse, AppError> {
    let todo = db.write().await.create(input)?;
    info!(id = %todo.id, name = %todo.name, "created todo");
    let location = format!("/todos/{}", todo.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(todo)))
}

async fn replace_todo(
    State(db): State<Db>,
    PathParam(id): PathParam<Uuid>,
    JsonBody(input): JsonBody<ReplaceTodo>,
) -> Result<StatusCode, AppError> {
    db.write().await.replace(id, input)?;
    info!(%id, "replaced todo");
    Ok(StatusCode::NO_CONTENT)
}

/// An empty or `null` body is a missing payload and is rejected by the
/// store; anything else must decode as a status update.
async fn update_status(
    State(db): State<Db>,
    PathParam(id): PathParam<Uuid>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let update = parse_status_body(&body)?;
    let todo = db.write().await.update_status(id, update)?;
    info!(%id, is_completed = todo.is_completed, "updated todo status");
    Ok(StatusCode::NO_CONTENT)
}

fn parse_status_body(body: &[u8]) -> Result<Option<TodoStatusUpdate>, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(e.to_string()))
}

async fn mark_completed(
    State(db): State<Db>,
    PathParam(id): PathParam<Uuid>,
) -> Result<StatusCode, AppError> {
    db.write().await.mark_completed(id)?;
    info!(%id, "marked todo completed");
    Ok(StatusCode::NO_CONTENT)
}

async fn mark_active(
    State(db): State<Db>,
    PathParam(id): PathParam<Uuid>,
) -> Result<StatusCode, AppError> {
    db.write().await.mark_active(id)?;
    info!(%id, "marked todo active");
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_todo(
    State(db): State<Db>,
    PathParam(id): PathParam<Uuid>,
) -> Result<Json<Todo>, AppError> {
    let todo = db.write().await.delete(id)?;
    info!(%id, "deleted todo");
    Ok(Json(todo))
}

// --- users ---

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    let users = db.read().await.list_users();
    Json(users)
}

async fn get_user(
    State(db): State<Db>,
    PathParam(id): PathParam<Uuid>,
) -> Result<Json<User>, AppError> {
    let user = db.read().await.get_user(id)?.clone();
    Ok(Json(user))
}

async fn user_todos(
    State(db): State<Db>,
    PathParam(id): PathParam<Uuid>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = db.read().await.todos_for_user(id)?;
    Ok(Json(todos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_status_body_is_missing_payload() {
        assert!(parse_status_body(b"").unwrap().is_none());
        assert!(parse_status_body(b"  \n").unwrap().is_none());
        assert!(parse_status_body(b"null").unwrap().is_none());
    }

    #[test]
    fn status_body_decodes_flag() {
        let update = parse_status_body(br#"{"isCompleted":true}"#).unwrap().unwrap();
        assert!(update.is_completed);
    }

    #[test]
    fn malformed_status_body_is_bad_request() {
        let err = parse_status_body(b"{not json").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        let err = parse_status_body(br#"{"done":true}"#).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
