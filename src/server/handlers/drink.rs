use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{Duration, Utc};
use tracing::{error, info};
use uuid::Uuid;

use super::{api_error, ApiError};
use crate::server::config::AppState;
use crate::server::models::{Drink, NewDrink};
use crate::server::services::calculator::WATER_GLASSES_PER_HOUR;

pub async fn add_drink(
    State(state): State<AppState>,
    Json(request): Json<NewDrink>,
) -> Result<(StatusCode, Json<Drink>), ApiError> {
    info!("Adding drink: {:?}", request);

    if request.kind.is_water() {
        check_water_limit(&state, request.session_id).await?;
    }

    let drink = state.storage.add_drink(&request).await.map_err(|e| {
        error!("Failed to add drink: {:?}", e);
        api_error(StatusCode::from(&e), "Failed to add drink")
    })?;
    Ok((StatusCode::CREATED, Json(drink)))
}

/// Water only counteracts the tipsy level up to twice an hour; a third glass
/// within the window is rejected.
async fn check_water_limit(state: &AppState, session_id: Uuid) -> Result<(), ApiError> {
    let drinks = state
        .storage
        .get_session_drinks(session_id)
        .await
        .map_err(|e| {
            error!("Failed to check water limit: {:?}", e);
            api_error(StatusCode::from(&e), "Failed to add drink")
        })?;

    let cutoff = Utc::now() - Duration::hours(1);
    let recent_waters = drinks
        .iter()
        .filter(|drink| drink.kind.is_water() && drink.created_at > cutoff)
        .count();

    if recent_waters >= WATER_GLASSES_PER_HOUR {
        return Err(api_error(
            StatusCode::TOO_MANY_REQUESTS,
            "Water limit reached: only 2 water drinks per hour",
        ));
    }
    Ok(())
}

pub async fn list_session_drinks(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Vec<Drink>>, ApiError> {
    let session_id: Uuid = session_id
        .parse()
        .map_err(|_| api_error(StatusCode::BAD_REQUEST, "Invalid session ID"))?;

    let drinks = state
        .storage
        .get_session_drinks(session_id)
        .await
        .map_err(|e| {
            error!("Failed to retrieve drinks for {}: {:?}", session_id, e);
            api_error(StatusCode::from(&e), "Failed to retrieve drinks")
        })?;
    Ok(Json(drinks))
}

pub async fn remove_drink(
    State(state): State<AppState>,
    Path(drink_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let drink_id: i32 = drink_id
        .parse()
        .map_err(|_| api_error(StatusCode::BAD_REQUEST, "Invalid drink ID"))?;

    let removed = state.storage.remove_drink(drink_id).await.map_err(|e| {
        error!("Failed to remove drink {}: {:?}", drink_id, e);
        api_error(StatusCode::from(&e), "Failed to remove drink")
    })?;

    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(api_error(StatusCode::NOT_FOUND, "Drink not found"))
    }
}
