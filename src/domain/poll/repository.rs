// src/domain/poll/repository.rs
use crate::domain::errors::PersistenceResult;
use crate::domain::poll::entity::{NewPoll, Poll, PollId};
use async_trait::async_trait;

#[async_trait]
pub trait PollRepository: Send + Sync {
    async fn list(&self) -> PersistenceResult<Vec<Poll>>;

    async fn find_by_id(&self, id: PollId) -> PersistenceResult<Option<Poll>>;

    /// Fails with `PersistenceError::Conflict` when another poll already
    /// uses the title (case-insensitive). The check and the write are atomic.
    async fn insert(&self, poll: NewPoll) -> PersistenceResult<Poll>;

    /// Returns `false` when no poll with that id exists. Fails with
    /// `PersistenceError::Conflict` when a different poll uses the title.
    async fn update(&self, poll: Poll) -> PersistenceResult<bool>;

    /// Returns `false` when no poll with that id exists.
    async fn delete(&self, id: PollId) -> PersistenceResult<bool>;
}
