//! HTTP handlers for the todo API.
//!
//! Ids are parsed by [`PathParam`], so a non-numeric id is a `400` before any
//! handler runs. Service errors map through `AppError`'s `From<ResourceError>`.

use crate::service::{TodoPatch, TodoService};
use axum::{extract::State, http::StatusCode, Json};
use resource_core::{Todo, TodoId};
use resource_web::{JsonBody, PathParam, WebResult};
use serde::{Deserialize, Serialize};

/// Request body for `POST /todos`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateTodoRequest {
    /// Title of the new todo. Blank titles are rejected.
    #[serde(default)]
    pub title: String,
}

/// Body returned by `DELETE /todos/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    /// Confirmation text.
    pub message: String,
}

/// Body returned by `GET /health/ready`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ReadinessResponse {
    /// `"ok"` or `"unavailable"`.
    pub status: &'static str,
    /// Whether the database answered.
    pub database: bool,
}

/// List all todos.
///
/// ```text
/// GET /todos
/// ```
///
/// # Errors
///
/// `500` if the database read fails.
pub async fn list_todos(State(service): State<TodoService>) -> WebResult<Json<Vec<Todo>>> {
    Ok(Json(service.list().await?))
}

/// Create a todo.
///
/// ```text
/// POST /todos
/// Content-Type: application/json
///
/// { "title": "Buy milk" }
/// ```
///
/// # Errors
///
/// `400` for a malformed body or blank title, `500` on database failure.
pub async fn create_todo(
    State(service): State<TodoService>,
    JsonBody(request): JsonBody<CreateTodoRequest>,
) -> WebResult<(StatusCode, Json<Todo>)> {
    let todo = service.create(request.title).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Fetch one todo.
///
/// # Errors
///
/// `400` for a bad id, `404` if absent.
pub async fn get_todo(
    State(service): State<TodoService>,
    PathParam(id): PathParam<i32>,
) -> WebResult<Json<Todo>> {
    Ok(Json(service.get(TodoId::new(id)).await?))
}

/// Partially update a todo.
///
/// ```text
/// PUT /todos/:id
/// Content-Type: application/json
///
/// { "completed": true }
/// ```
///
/// Fields left out keep their stored value.
///
/// # Errors
///
/// `400` for a bad id, malformed body or blank title; `404` if absent.
pub async fn update_todo(
    State(service): State<TodoService>,
    PathParam(id): PathParam<i32>,
    JsonBody(patch): JsonBody<TodoPatch>,
) -> WebResult<Json<Todo>> {
    Ok(Json(service.apply_patch(TodoId::new(id), patch).await?))
}

/// Delete a todo.
///
/// # Errors
///
/// `400` for a bad id, `404` if absent.
pub async fn delete_todo(
    State(service): State<TodoService>,
    PathParam(id): PathParam<i32>,
) -> WebResult<Json<MessageResponse>> {
    service.delete(TodoId::new(id)).await?;
    Ok(Json(MessageResponse {
        message: "todo deleted successfully".to_string(),
    }))
}

/// Flip a todo's completion flag.
///
/// ```text
/// POST /todos/:id/toggle
/// ```
///
/// # Errors
///
/// `400` for a bad id, `404` if absent.
pub async fn toggle_todo(
    State(service): State<TodoService>,
    PathParam(id): PathParam<i32>,
) -> WebResult<Json<Todo>> {
    Ok(Json(service.toggle(TodoId::new(id)).await?))
}

/// Readiness: the database answers a ping.
///
/// - 200 OK: `{"status":"ok","database":true}`
/// - 503 Service Unavailable: `{"status":"unavailable","database":false}`
pub async fn readiness(State(service): State<TodoService>) -> (StatusCode, Json<ReadinessResponse>) {
    match service.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadinessResponse {
                status: "ok",
                database: true,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse {
                    status: "unavailable",
                    database: false,
                }),
            )
        }
    }
}
