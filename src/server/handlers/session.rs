use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info};
use uuid::Uuid;

use super::{api_error, ApiError};
use crate::server::config::AppState;
use crate::server::models::{CreateSessionRequest, Session, UpdateSessionRequest};

fn parse_session_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| api_error(StatusCode::BAD_REQUEST, "Invalid session ID"))
}

pub async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<Session>), ApiError> {
    info!("Creating session: {:?}", request);
    let session = state.storage.create_session(&request).await.map_err(|e| {
        error!("Failed to create session: {:?}", e);
        api_error(StatusCode::from(&e), "Failed to create session")
    })?;
    Ok((StatusCode::CREATED, Json(session)))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Session>, ApiError> {
    let session_id = parse_session_id(&session_id)?;
    let session = state.storage.get_session(session_id).await.map_err(|e| {
        error!("Failed to retrieve session {}: {:?}", session_id, e);
        api_error(StatusCode::from(&e), "Failed to retrieve session")
    })?;

    session
        .map(Json)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "Session not found"))
}

pub async fn update_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<UpdateSessionRequest>,
) -> Result<Json<Session>, ApiError> {
    let session_id = parse_session_id(&session_id)?;
    let session = state
        .storage
        .update_session_points(session_id, request.total_points, request.has_mixed_drinks)
        .await
        .map_err(|e| {
            error!("Failed to update session {}: {:?}", session_id, e);
            api_error(StatusCode::from(&e), "Failed to update session")
        })?;

    session
        .map(Json)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "Session not found"))
}

pub async fn list_user_sessions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Session>>, ApiError> {
    let user_id: i32 = user_id
        .parse()
        .map_err(|_| api_error(StatusCode::BAD_REQUEST, "Invalid user ID"))?;

    let sessions = state.storage.get_user_sessions(user_id).await.map_err(|e| {
        error!("Failed to retrieve sessions for user {}: {:?}", user_id, e);
        api_error(StatusCode::from(&e), "Failed to retrieve sessions")
    })?;
    Ok(Json(sessions))
}
