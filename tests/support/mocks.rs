// tests/support/mocks.rs
use async_trait::async_trait;
use poll_api::application::ports::security::{PasswordHasher, SecurityError};
use poll_api::domain::errors::{PersistenceError, PersistenceResult};
use poll_api::domain::poll::{NewPoll, Poll, PollId, PollRepository};

/// Reversible "hash" so tests avoid argon2 cost.
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, SecurityError> {
        Ok(format!("plain:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> Result<bool, SecurityError> {
        expected_hash
            .strip_prefix("plain:")
            .map(|stored| stored == password)
            .ok_or_else(|| SecurityError::MalformedHash(expected_hash.to_owned()))
    }
}

/// Poll store whose backend is always down.
pub struct UnavailablePollRepo;

fn down<T>() -> PersistenceResult<T> {
    Err(PersistenceError::Unavailable("connection refused".into()))
}

#[async_trait]
impl PollRepository for UnavailablePollRepo {
    async fn list(&self) -> PersistenceResult<Vec<Poll>> {
        down()
    }

    async fn find_by_id(&self, _id: PollId) -> PersistenceResult<Option<Poll>> {
        down()
    }

    async fn insert(&self, _poll: NewPoll) -> PersistenceResult<Poll> {
        down()
    }

    async fn update(&self, _poll: Poll) -> PersistenceResult<bool> {
        down()
    }

    async fn delete(&self, _id: PollId) -> PersistenceResult<bool> {
        down()
    }
}
