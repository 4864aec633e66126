// src/domain/user/repository.rs
use crate::domain::errors::PersistenceResult;
use crate::domain::user::entity::{NewUser, User};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lookup is case-insensitive on the email address.
    async fn find_by_email(&self, email: &str) -> PersistenceResult<Option<User>>;

    /// Fails with `PersistenceError::Conflict` when the email is taken.
    async fn insert(&self, new_user: NewUser) -> PersistenceResult<User>;
}
