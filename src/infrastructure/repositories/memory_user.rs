// src/infrastructure/repositories/memory_user.rs
use crate::domain::{
    errors::{PersistenceError, PersistenceResult},
    user::{NewUser, User, UserRepository},
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Users keyed by lower-cased email.
#[derive(Default)]
pub struct InMemoryUserRepository {
    inner: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> PersistenceResult<Option<User>> {
        let users = self.inner.read().await;
        Ok(users.get(&email.to_lowercase()).cloned())
    }

    async fn insert(&self, new_user: NewUser) -> PersistenceResult<User> {
        let key = new_user.email.to_lowercase();
        let mut users = self.inner.write().await;
        if users.contains_key(&key) {
            return Err(PersistenceError::Conflict(format!(
                "email {} already registered",
                new_user.email
            )));
        }
        let user = new_user.into_user(Uuid::new_v4());
        users.insert(key, user.clone());
        Ok(user)
    }
}
