//! Route handlers, one module per resource. Each handler performs exactly
//! one store call.

pub mod categories;
pub mod tasks;
pub mod theme;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::Json;

use crate::error::ApiError;

pub type JsonBody<T> = Result<Json<T>, JsonRejection>;
/// A JSON body that may be left off entirely. A request without a
/// `Content-Type` header extracts as `None`.
pub type OptionalJsonBody<T> = Result<Option<Json<T>>, JsonRejection>;
pub type IdPath = Result<Path<i64>, PathRejection>;

fn body<T>(body: JsonBody<T>) -> Result<T, ApiError> {
    let Json(inner) = body?;
    Ok(inner)
}

fn body_or_default<T: Default>(body: OptionalJsonBody<T>) -> Result<T, ApiError> {
    Ok(body?.map(|Json(inner)| inner).unwrap_or_default())
}

fn path_id(path: IdPath) -> Result<i64, ApiError> {
    let Path(id) = path?;
    Ok(id)
}

/// Names of the fields flagged as absent, in the order given.
fn missing_fields(fields: &[(&'static str, bool)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, absent)| *absent)
        .map(|(name, _)| *name)
        .collect()
}
