use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::CategoryId;
use taskboard_store::CategoryRepo;

use super::{body, body_or_default, path_id, IdPath, JsonBody, OptionalJsonBody};
use crate::dto::{
    CategoryBody, CategoryCreated, CategoryNameResponse, CategoryResponse, MessageResponse,
};
use crate::error::ApiError;
use crate::server::AppState;

/// GET /categories
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let categories = CategoryRepo::new(state.db.clone()).list()?;
    Ok(Json(categories.into_iter().map(CategoryResponse::from).collect()))
}

/// GET /categories/{id}
pub async fn get(
    State(state): State<AppState>,
    id: IdPath,
) -> Result<Json<CategoryNameResponse>, ApiError> {
    let id = CategoryId::new(path_id(id)?);
    let name = CategoryRepo::new(state.db.clone()).get(id)?;
    Ok(Json(CategoryNameResponse { name }))
}

/// POST /categories
pub async fn create(
    State(state): State<AppState>,
    payload: JsonBody<CategoryBody>,
) -> Result<(StatusCode, Json<CategoryCreated>), ApiError> {
    let Some(name) = body(payload)?.name else {
        return Err(ApiError::MissingFields(vec!["name"]));
    };

    let category_id = CategoryRepo::new(state.db.clone()).create(&name)?;
    Ok((
        StatusCode::CREATED,
        Json(CategoryCreated {
            message: "Category created".into(),
            category_id,
        }),
    ))
}

/// PUT /categories/{id}
///
/// The name is not validated here; an absent name or body is stored as empty.
pub async fn update(
    State(state): State<AppState>,
    id: IdPath,
    payload: OptionalJsonBody<CategoryBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = CategoryId::new(path_id(id)?);
    let name = body_or_default(payload)?.name.unwrap_or_default();
    CategoryRepo::new(state.db.clone()).update(id, &name)?;
    Ok(Json(MessageResponse::new("Category updated")))
}

/// DELETE /categories/{id}
///
/// Tasks pointing at the category lose their reference in the same step.
pub async fn delete(
    State(state): State<AppState>,
    id: IdPath,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = CategoryId::new(path_id(id)?);
    CategoryRepo::new(state.db.clone()).delete(id)?;
    Ok(Json(MessageResponse::new("Category deleted")))
}
