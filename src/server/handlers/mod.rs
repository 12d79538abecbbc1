use axum::{http::StatusCode, Json};
use serde::Serialize;

pub mod drink;
pub mod health;
pub mod pages;
pub mod session;
pub mod settings;
pub mod tipsy;

pub use drink::{add_drink, list_session_drinks, remove_drink};
pub use health::health_check;
pub use pages::index;
pub use session::{create_session, get_session, list_user_sessions, update_session};
pub use settings::{get_settings, update_settings};
pub use tipsy::session_tipsy_level;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}
