use axum::extract::State;
use axum::Json;
use taskboard_store::ConfigRepo;

use super::{body, JsonBody};
use crate::dto::{MessageResponse, SetThemeBody, ThemeResponse};
use crate::error::ApiError;
use crate::server::AppState;

/// GET /theme
pub async fn get(State(state): State<AppState>) -> Result<Json<ThemeResponse>, ApiError> {
    let theme = ConfigRepo::new(state.db.clone()).theme()?;
    Ok(Json(ThemeResponse { theme }))
}

/// POST /theme
pub async fn set(
    State(state): State<AppState>,
    payload: JsonBody<SetThemeBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Some(new_theme) = body(payload)?.new_theme else {
        return Err(ApiError::Validation("Invalid theme".into()));
    };

    ConfigRepo::new(state.db.clone())
        .set_theme(&new_theme)
        .map_err(|e| match e {
            taskboard_store::StoreError::Validation(_) => {
                ApiError::Validation("Invalid theme".into())
            }
            other => other.into(),
        })?;
    Ok(Json(MessageResponse::new("Theme updated")))
}
