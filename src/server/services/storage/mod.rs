use async_trait::async_trait;
use axum::http::StatusCode;
use thiserror::Error;
use uuid::Uuid;

use crate::server::models::{
    CreateSessionRequest, CreateUser, Drink, NewDrink, Session, User,
};

pub mod memory;
pub mod postgres;

pub use memory::MemStorage;
pub use postgres::PgStorage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

impl From<&StorageError> for StatusCode {
    fn from(_: &StorageError) -> Self {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// CRUD surface shared by the Postgres and in-memory backends. The server
/// picks a backend at startup (`DATABASE_URL` set or not) and everything
/// above this trait is agnostic to the choice.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_user(&self, id: i32) -> Result<Option<User>, StorageError>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError>;
    async fn create_user(&self, user: &CreateUser) -> Result<User, StorageError>;

    async fn create_session(
        &self,
        request: &CreateSessionRequest,
    ) -> Result<Session, StorageError>;
    async fn get_session(&self, id: Uuid) -> Result<Option<Session>, StorageError>;
    async fn update_session_points(
        &self,
        id: Uuid,
        total_points: f64,
        has_mixed_drinks: bool,
    ) -> Result<Option<Session>, StorageError>;
    async fn get_user_sessions(&self, user_id: i32) -> Result<Vec<Session>, StorageError>;

    async fn add_drink(&self, drink: &NewDrink) -> Result<Drink, StorageError>;
    /// Drinks for a session, oldest first.
    async fn get_session_drinks(&self, session_id: Uuid) -> Result<Vec<Drink>, StorageError>;
    /// Returns false when no drink with that id existed.
    async fn remove_drink(&self, id: i32) -> Result<bool, StorageError>;
}
