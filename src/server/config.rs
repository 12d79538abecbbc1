use std::sync::Arc;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::info;

use crate::server::handlers::{
    add_drink, create_session, get_session, get_settings, health_check, index,
    list_session_drinks, list_user_sessions, remove_drink, session_tipsy_level, update_session,
    update_settings,
};
use crate::server::services::{SettingsStore, Storage};

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub settings: Arc<SettingsStore>,
}

pub fn configure_app(storage: Arc<dyn Storage>, settings: Arc<SettingsStore>) -> Router {
    let state = AppState { storage, settings };
    app_router(state)
}

async fn log_request(request: Request, next: Next) -> Result<Response, StatusCode> {
    info!("{} {}", request.method(), request.uri().path());
    Ok(next.run(request).await)
}

fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/health", get(health_check))
        .route("/api/sessions", post(create_session))
        .route(
            "/api/sessions/:session_id",
            get(get_session).put(update_session),
        )
        .route("/api/sessions/:session_id/drinks", get(list_session_drinks))
        .route("/api/sessions/:session_id/tipsy", get(session_tipsy_level))
        .route("/api/users/:user_id/sessions", get(list_user_sessions))
        .route("/api/drinks", post(add_drink))
        .route("/api/drinks/:drink_id", delete(remove_drink))
        .route("/api/settings", get(get_settings).put(update_settings))
        .nest_service("/assets", ServeDir::new("./assets"))
        .layer(middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
