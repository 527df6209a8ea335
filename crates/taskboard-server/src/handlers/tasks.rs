use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::{CategoryId, TaskId};
use taskboard_store::{TaskPatch, TaskRepo};

use super::{body, body_or_default, missing_fields, path_id, IdPath, JsonBody, OptionalJsonBody};
use crate::dto::{
    AssignCategoryBody, CreateTaskBody, MessageResponse, TaskCreated, TaskResponse, UpdateTaskBody,
};
use crate::error::ApiError;
use crate::server::AppState;

/// GET /tasks
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = TaskRepo::new(state.db.clone()).list()?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// POST /tasks
pub async fn create(
    State(state): State<AppState>,
    payload: JsonBody<CreateTaskBody>,
) -> Result<(StatusCode, Json<TaskCreated>), ApiError> {
    let (name, description, eta) = match body(payload)? {
        CreateTaskBody {
            name: Some(name),
            description: Some(description),
            eta: Some(eta),
        } => (name, description, eta),
        partial => {
            return Err(ApiError::MissingFields(missing_fields(&[
                ("name", partial.name.is_none()),
                ("description", partial.description.is_none()),
                ("eta", partial.eta.is_none()),
            ])))
        }
    };

    let task_id = TaskRepo::new(state.db.clone()).create(&name, &description, &eta)?;
    Ok((
        StatusCode::CREATED,
        Json(TaskCreated {
            message: "Task created".into(),
            task_id,
        }),
    ))
}

/// PUT /tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    id: IdPath,
    payload: OptionalJsonBody<UpdateTaskBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = TaskId::new(path_id(id)?);
    let patch = TaskPatch::from(body_or_default(payload)?);
    TaskRepo::new(state.db.clone()).update(id, &patch)?;
    Ok(Json(MessageResponse::new("Task updated")))
}

/// DELETE /tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    id: IdPath,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = TaskId::new(path_id(id)?);
    TaskRepo::new(state.db.clone()).delete(id)?;
    Ok(Json(MessageResponse::new("Task deleted")))
}

/// POST /tasks/{id}/assign-category
pub async fn assign_category(
    State(state): State<AppState>,
    id: IdPath,
    payload: JsonBody<AssignCategoryBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    let task_id = TaskId::new(path_id(id)?);
    let Some(category_id) = body(payload)?.category_id else {
        return Err(ApiError::MissingFields(vec!["categoryId"]));
    };

    TaskRepo::new(state.db.clone()).assign_category(task_id, CategoryId::new(category_id))?;
    Ok(Json(MessageResponse::new("Category assigned to task")))
}
