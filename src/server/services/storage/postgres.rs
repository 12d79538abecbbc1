use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::{Storage, StorageError};
use crate::server::models::{
    CreateSessionRequest, CreateUser, Drink, DrinkKind, NewDrink, Session, User,
};

/// Postgres backend. Schema lives in `migrations/`; the drink kind is stored
/// as a lowercase tag column plus nullable custom-payload columns so the
/// tagged union round-trips.
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct DrinkRow {
    id: i32,
    session_id: Uuid,
    #[sqlx(rename = "type")]
    kind: String,
    amount: f64,
    points: i32,
    custom_name: Option<String>,
    custom_emoji: Option<String>,
    custom_percentage: Option<f64>,
    created_at: DateTime<Utc>,
}

impl TryFrom<DrinkRow> for Drink {
    type Error = StorageError;

    fn try_from(row: DrinkRow) -> Result<Self, StorageError> {
        let kind = match row.kind.as_str() {
            "beer" => DrinkKind::Beer,
            "wine" => DrinkKind::Wine,
            "spirits" => DrinkKind::Spirits,
            "water" => DrinkKind::Water,
            "custom" => DrinkKind::Custom {
                name: row.custom_name.ok_or_else(|| {
                    StorageError::Corrupt(format!("drink {} has no custom_name", row.id))
                })?,
                emoji: row.custom_emoji,
                percentage: row.custom_percentage.ok_or_else(|| {
                    StorageError::Corrupt(format!("drink {} has no custom_percentage", row.id))
                })?,
            },
            other => {
                return Err(StorageError::Corrupt(format!(
                    "drink {} has unknown type {other:?}",
                    row.id
                )))
            }
        };

        Ok(Drink {
            id: row.id,
            session_id: row.session_id,
            kind,
            amount: row.amount,
            points: row.points,
            created_at: row.created_at,
        })
    }
}

fn custom_parts(kind: &DrinkKind) -> (Option<&str>, Option<&str>, Option<f64>) {
    match kind {
        DrinkKind::Custom {
            name,
            emoji,
            percentage,
        } => (Some(name.as_str()), emoji.as_deref(), Some(*percentage)),
        _ => (None, None, None),
    }
}

const DRINK_COLUMNS: &str =
    "id, session_id, type, amount, points, custom_name, custom_emoji, custom_percentage, created_at";

#[async_trait]
impl Storage for PgStorage {
    async fn get_user(&self, id: i32) -> Result<Option<User>, StorageError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password, created_at FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn create_user(&self, user: &CreateUser) -> Result<User, StorageError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password) VALUES ($1, $2) \
             RETURNING id, username, password, created_at",
        )
        .bind(&user.username)
        .bind(&user.password)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn create_session(
        &self,
        request: &CreateSessionRequest,
    ) -> Result<Session, StorageError> {
        let id = request.id.unwrap_or_else(Uuid::new_v4);
        let session = sqlx::query_as::<_, Session>(
            "INSERT INTO sessions (id, user_id, total_points, has_mixed_drinks) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, user_id, total_points, has_mixed_drinks, created_at",
        )
        .bind(id)
        .bind(request.user_id)
        .bind(request.total_points.unwrap_or(0.0))
        .bind(request.has_mixed_drinks.unwrap_or(false))
        .fetch_one(&self.pool)
        .await?;
        Ok(session)
    }

    async fn get_session(&self, id: Uuid) -> Result<Option<Session>, StorageError> {
        let session = sqlx::query_as::<_, Session>(
            "SELECT id, user_id, total_points, has_mixed_drinks, created_at \
             FROM sessions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(session)
    }

    async fn update_session_points(
        &self,
        id: Uuid,
        total_points: f64,
        has_mixed_drinks: bool,
    ) -> Result<Option<Session>, StorageError> {
        let session = sqlx::query_as::<_, Session>(
            "UPDATE sessions SET total_points = $2, has_mixed_drinks = $3 WHERE id = $1 \
             RETURNING id, user_id, total_points, has_mixed_drinks, created_at",
        )
        .bind(id)
        .bind(total_points)
        .bind(has_mixed_drinks)
        .fetch_optional(&self.pool)
        .await?;
        Ok(session)
    }

    async fn get_user_sessions(&self, user_id: i32) -> Result<Vec<Session>, StorageError> {
        let sessions = sqlx::query_as::<_, Session>(
            "SELECT id, user_id, total_points, has_mixed_drinks, created_at \
             FROM sessions WHERE user_id = $1 ORDER BY created_at",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(sessions)
    }

    async fn add_drink(&self, drink: &NewDrink) -> Result<Drink, StorageError> {
        let (custom_name, custom_emoji, custom_percentage) = custom_parts(&drink.kind);
        let row = sqlx::query_as::<_, DrinkRow>(&format!(
            "INSERT INTO drinks \
             (session_id, type, amount, points, custom_name, custom_emoji, custom_percentage) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {DRINK_COLUMNS}"
        ))
        .bind(drink.session_id)
        .bind(drink.kind.as_str())
        .bind(drink.amount)
        .bind(drink.points)
        .bind(custom_name)
        .bind(custom_emoji)
        .bind(custom_percentage)
        .fetch_one(&self.pool)
        .await?;
        row.try_into()
    }

    async fn get_session_drinks(&self, session_id: Uuid) -> Result<Vec<Drink>, StorageError> {
        let rows = sqlx::query_as::<_, DrinkRow>(&format!(
            "SELECT {DRINK_COLUMNS} FROM drinks WHERE session_id = $1 ORDER BY created_at, id"
        ))
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Drink::try_from).collect()
    }

    async fn remove_drink(&self, id: i32) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM drinks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
