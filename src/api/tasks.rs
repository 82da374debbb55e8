//! Task CRUD handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::db::{Database, DbError, TaskRecord, TaskRepository};
use crate::model::{Task, TaskStatus};

// =============================================================================
// DTOs
// =============================================================================

/// Error payload shared by every handler.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Task not found: id '42'")]
    pub error: String,
}

#[derive(Serialize, ToSchema)]
pub struct TaskResponse {
    #[schema(example = 1717171717000i64)]
    pub id: i64,
    #[schema(example = "Write the quarterly report")]
    pub title: String,
    #[schema(example = "Work")]
    pub category: String,
    #[schema(value_type = String, example = "In Progress")]
    pub status: TaskStatus,
    #[serde(rename = "dueDate", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "2025-06-01")]
    pub due_date: Option<NaiveDate>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

impl From<TaskRecord> for TaskResponse {
    fn from(r: TaskRecord) -> Self {
        Self {
            id: r.id,
            title: r.title,
            category: r.category,
            status: r.status,
            due_date: r.due_date,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Request body for both create and replace.
///
/// Clients mint their own ids; a request without one gets a
/// server-minted id on create. An unknown status literal fails
/// deserialization, which axum surfaces as 422.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TaskRequest {
    #[schema(example = 1717171717000i64)]
    pub id: Option<i64>,
    #[schema(example = "Write the quarterly report")]
    pub title: String,
    #[schema(example = "Work")]
    pub category: String,
    #[serde(default)]
    #[schema(value_type = String, example = "To Do")]
    pub status: TaskStatus,
    #[serde(rename = "dueDate", default)]
    #[schema(value_type = Option<String>, example = "2025-06-01")]
    pub due_date: Option<NaiveDate>,
}

impl TaskRequest {
    fn into_task(self, id: i64) -> Task {
        Task {
            id,
            title: self.title,
            category: self.category,
            status: self.status,
            due_date: self.due_date,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = "tasks",
    responses(
        (status = 200, description = "All tasks, oldest first", body = [TaskResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_tasks<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<TaskResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let records = state.db().tasks().list().await.map_err(error_response)?;

    Ok(Json(records.into_iter().map(TaskResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = "tasks",
    request_body = TaskRequest,
    responses(
        (status = 201, description = "Task created", body = TaskResponse),
        (status = 409, description = "Id already taken", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_task<D: Database>(
    State(state): State<AppState<D>>,
    Json(req): Json<TaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), (StatusCode, Json<ErrorResponse>)> {
    // Id 0 tells the repository to mint one.
    let id = req.id.unwrap_or(0);
    let task = req.into_task(id);

    let created = state
        .db()
        .tasks()
        .create(&task)
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(TaskResponse::from(created))))
}

#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    tag = "tasks",
    params(("id" = i64, Path, description = "Task ID")),
    request_body = TaskRequest,
    responses(
        (status = 200, description = "Task replaced", body = TaskResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn replace_task<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<i64>,
    Json(req): Json<TaskRequest>,
) -> Result<Json<TaskResponse>, (StatusCode, Json<ErrorResponse>)> {
    // The path id is authoritative; any id in the body is ignored.
    let task = req.into_task(id);

    let replaced = state
        .db()
        .tasks()
        .replace(&task)
        .await
        .map_err(error_response)?;

    Ok(Json(TaskResponse::from(replaced)))
}

#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    tag = "tasks",
    params(("id" = i64, Path, description = "Task ID")),
    responses(
        (status = 204, description = "Task deleted (or was already gone)"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_task<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    state
        .db()
        .tasks()
        .delete(id)
        .await
        .map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Helpers
// =============================================================================

fn error_response(e: DbError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match e {
        DbError::NotFound { .. } => StatusCode::NOT_FOUND,
        DbError::AlreadyExists { .. } => StatusCode::CONFLICT,
        DbError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}
