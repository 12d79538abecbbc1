use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A drinking session: a client-side grouping of logged drinks with a running
/// points total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    pub user_id: Option<i32>,
    pub total_points: f64,
    pub has_mixed_drinks: bool,
    pub created_at: DateTime<Utc>,
}

/// Session creation payload. Clients may supply their own UUID so they can
/// reference the session before the server responds; storage generates one
/// otherwise.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub id: Option<Uuid>,
    pub user_id: Option<i32>,
    pub total_points: Option<f64>,
    pub has_mixed_drinks: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSessionRequest {
    pub total_points: f64,
    pub has_mixed_drinks: bool,
}
