use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Storage, StorageError};
use crate::server::models::{
    CreateSessionRequest, CreateUser, Drink, NewDrink, Session, User,
};

/// In-memory backend used when no database is configured, and by the test
/// suite. Observable behavior matches [`super::PgStorage`].
pub struct MemStorage {
    inner: RwLock<Inner>,
}

struct Inner {
    users: HashMap<i32, User>,
    sessions: HashMap<Uuid, Session>,
    drinks: HashMap<i32, Drink>,
    next_user_id: i32,
    next_drink_id: i32,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: HashMap::new(),
                sessions: HashMap::new(),
                drinks: HashMap::new(),
                next_user_id: 1,
                next_drink_id: 1,
            }),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: i32) -> Result<Option<User>, StorageError> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        Ok(self
            .inner
            .read()
            .await
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create_user(&self, user: &CreateUser) -> Result<User, StorageError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_user_id;
        inner.next_user_id += 1;

        let user = User {
            id,
            username: user.username.clone(),
            password: user.password.clone(),
            created_at: Utc::now(),
        };
        inner.users.insert(id, user.clone());
        Ok(user)
    }

    async fn create_session(
        &self,
        request: &CreateSessionRequest,
    ) -> Result<Session, StorageError> {
        let session = Session {
            id: request.id.unwrap_or_else(Uuid::new_v4),
            user_id: request.user_id,
            total_points: request.total_points.unwrap_or(0.0),
            has_mixed_drinks: request.has_mixed_drinks.unwrap_or(false),
            created_at: Utc::now(),
        };
        self.inner
            .write()
            .await
            .sessions
            .insert(session.id, session.clone());
        Ok(session)
    }

    async fn get_session(&self, id: Uuid) -> Result<Option<Session>, StorageError> {
        Ok(self.inner.read().await.sessions.get(&id).cloned())
    }

    async fn update_session_points(
        &self,
        id: Uuid,
        total_points: f64,
        has_mixed_drinks: bool,
    ) -> Result<Option<Session>, StorageError> {
        let mut inner = self.inner.write().await;
        let Some(session) = inner.sessions.get_mut(&id) else {
            return Ok(None);
        };
        session.total_points = total_points;
        session.has_mixed_drinks = has_mixed_drinks;
        Ok(Some(session.clone()))
    }

    async fn get_user_sessions(&self, user_id: i32) -> Result<Vec<Session>, StorageError> {
        let inner = self.inner.read().await;
        let mut sessions: Vec<Session> = inner
            .sessions
            .values()
            .filter(|session| session.user_id == Some(user_id))
            .cloned()
            .collect();
        sessions.sort_by_key(|session| session.created_at);
        Ok(sessions)
    }

    async fn add_drink(&self, drink: &NewDrink) -> Result<Drink, StorageError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_drink_id;
        inner.next_drink_id += 1;

        let drink = Drink {
            id,
            session_id: drink.session_id,
            kind: drink.kind.clone(),
            amount: drink.amount,
            points: drink.points,
            created_at: Utc::now(),
        };
        inner.drinks.insert(id, drink.clone());
        Ok(drink)
    }

    async fn get_session_drinks(&self, session_id: Uuid) -> Result<Vec<Drink>, StorageError> {
        let inner = self.inner.read().await;
        let mut drinks: Vec<Drink> = inner
            .drinks
            .values()
            .filter(|drink| drink.session_id == session_id)
            .cloned()
            .collect();
        drinks.sort_by_key(|drink| (drink.created_at, drink.id));
        Ok(drinks)
    }

    async fn remove_drink(&self, id: i32) -> Result<bool, StorageError> {
        Ok(self.inner.write().await.drinks.remove(&id).is_some())
    }
}
