//! services/api/src/web/settings.rs
//!
//! The singleton reader preferences.

use crate::error::{port_error_response, HandlerError};
use crate::web::protocol::{SettingsResponse, UpdateSettingsRequest};
use crate::web::state::AppState;
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::info;

/// Current settings; defaults are stored on first access.
#[utoipa::path(
    get,
    path = "/settings",
    responses((status = 200, description = "Current settings", body = SettingsResponse))
)]
pub async fn get_settings_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<SettingsResponse>, HandlerError> {
    let settings = app_state
        .db
        .get_or_create_settings()
        .await
        .map_err(|e| port_error_response("Failed to load settings", e))?;
    Ok(Json(settings.into()))
}

/// Change some settings in place.
#[utoipa::path(
    patch,
    path = "/settings",
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "Updated settings", body = SettingsResponse),
        (status = 400, description = "A value is out of bounds")
    )
)]
pub async fn update_settings_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<UpdateSettingsRequest>,
) -> Result<Json<SettingsResponse>, HandlerError> {
    let next = app_state
        .db
        .update_settings(req.into())
        .await
        .map_err(|e| port_error_response("Failed to update settings", e))?;

    info!(dark_mode = next.dark_mode, font_size = next.font_size, "Settings updated");
    Ok(Json(next.into()))
}
