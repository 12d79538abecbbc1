use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use super::{api_error, ApiError};
use crate::server::config::AppState;
use crate::server::models::TipsyLevel;
use crate::server::services::calculator::{
    adjusted_points, calculate_tipsy_level, has_mixed_drinks, ThresholdSettings,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TipsyResponse {
    pub session_id: Uuid,
    pub total_points: f64,
    pub adjusted_points: f64,
    pub has_mixed_drinks: bool,
    pub level: TipsyLevel,
}

/// Recompute a session's standing from its stored drinks: raw total (floored
/// at zero), mixed-drinks adjustment, and the tier for the thresholds
/// currently in the settings store.
pub async fn session_tipsy_level(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<TipsyResponse>, ApiError> {
    let session_id: Uuid = session_id
        .parse()
        .map_err(|_| api_error(StatusCode::BAD_REQUEST, "Invalid session ID"))?;

    let session = state
        .storage
        .get_session(session_id)
        .await
        .map_err(|e| {
            error!("Failed to retrieve session {}: {:?}", session_id, e);
            api_error(StatusCode::from(&e), "Failed to retrieve session")
        })?
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "Session not found"))?;

    let drinks = state
        .storage
        .get_session_drinks(session.id)
        .await
        .map_err(|e| {
            error!("Failed to retrieve drinks for {}: {:?}", session_id, e);
            api_error(StatusCode::from(&e), "Failed to retrieve drinks")
        })?;

    let total: i32 = drinks.iter().map(|drink| drink.points).sum();
    let total = f64::from(total).max(0.0);
    let mixed = has_mixed_drinks(drinks.iter().map(|drink| &drink.kind));
    let adjusted = adjusted_points(total, mixed);

    let settings = state.settings.load().await;
    let level = calculate_tipsy_level(
        adjusted,
        ThresholdSettings {
            tipsy_threshold: settings.tipsy_threshold,
            drunk_threshold: settings.drunk_threshold,
        },
    );

    Ok(Json(TipsyResponse {
        session_id: session.id,
        total_points: total,
        adjusted_points: adjusted,
        has_mixed_drinks: mixed,
        level,
    }))
}
