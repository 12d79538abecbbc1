use axum::{extract::State, http::StatusCode, Json};
use tracing::{error, info};

use super::{api_error, ApiError};
use crate::server::config::AppState;
use crate::server::models::AppSettings;

pub async fn get_settings(State(state): State<AppState>) -> Json<AppSettings> {
    Json(state.settings.load().await)
}

pub async fn update_settings(
    State(state): State<AppState>,
    Json(settings): Json<AppSettings>,
) -> Result<Json<AppSettings>, ApiError> {
    info!("Updating settings: {:?}", settings);
    state.settings.save(settings.clone()).await.map_err(|e| {
        error!("Failed to save settings: {:?}", e);
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to save settings",
        )
    })?;
    Ok(Json(settings))
}
