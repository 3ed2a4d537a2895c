//! Default-name preference handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::errors::AppResult;

/// Set default name request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetDefaultNameRequest {
    /// Name used to pre-fill the form; empty clears it
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub default_name: String,
}

/// Default name response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultNameResponse {
    pub default_name: Option<String>,
}

/// Create preference routes
pub fn preferences_routes() -> Router<AppState> {
    Router::new().route(
        "/default-name",
        get(get_default_name)
            .put(set_default_name)
            .delete(clear_default_name),
    )
}

/// Get the remembered default name
pub async fn get_default_name(
    State(state): State<AppState>,
) -> AppResult<Json<DefaultNameResponse>> {
    let default_name = state.preferences.default_name().await?;
    Ok(Json(DefaultNameResponse { default_name }))
}

/// Remember a new default name
pub async fn set_default_name(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SetDefaultNameRequest>,
) -> AppResult<StatusCode> {
    state
        .preferences
        .set_default_name(&payload.default_name)
        .await?;
    tracing::debug!("Default name updated");
    Ok(StatusCode::NO_CONTENT)
}

/// Forget the default name
pub async fn clear_default_name(State(state): State<AppState>) -> AppResult<StatusCode> {
    state.preferences.clear_default_name().await?;
    Ok(StatusCode::NO_CONTENT)
}
