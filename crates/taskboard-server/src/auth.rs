//! Shared-secret gate applied to every route.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::server::AppState;

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "api-key";

/// Reject the request before any store access unless the `api-key` header
/// matches the configured secret. An unconfigured secret fails closed.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(expected) = state.api_key.as_ref() else {
        return Err(ApiError::KeyNotConfigured);
    };

    let authorized = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|key| expected.matches(key));

    if !authorized {
        tracing::warn!(path = %request.uri().path(), "rejected request with bad api key");
        return Err(ApiError::Forbidden);
    }
    Ok(next.run(request).await)
}
