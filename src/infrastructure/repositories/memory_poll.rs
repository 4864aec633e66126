// src/infrastructure/repositories/memory_poll.rs
use crate::domain::{
    errors::{PersistenceError, PersistenceResult},
    poll::{NewPoll, Poll, PollId, PollRepository},
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryPollRepository {
    inner: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    polls: BTreeMap<PollId, Poll>,
    last_id: i64,
}

impl Store {
    fn ensure_title_free(&self, title: &str, excluding: Option<PollId>) -> PersistenceResult<()> {
        let taken = self
            .polls
            .values()
            .filter(|poll| Some(poll.id) != excluding)
            .any(|poll| poll.title.eq_ignore_ascii_case(title));
        if taken {
            return Err(PersistenceError::Conflict(format!("poll title '{title}' is taken")));
        }
        Ok(())
    }
}

impl InMemoryPollRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PollRepository for InMemoryPollRepository {
    async fn list(&self) -> PersistenceResult<Vec<Poll>> {
        let store = self.inner.read().await;
        Ok(store.polls.values().cloned().collect())
    }

    async fn find_by_id(&self, id: PollId) -> PersistenceResult<Option<Poll>> {
        let store = self.inner.read().await;
        Ok(store.polls.get(&id).cloned())
    }

    async fn insert(&self, poll: NewPoll) -> PersistenceResult<Poll> {
        let mut store = self.inner.write().await;
        store.ensure_title_free(&poll.title, None)?;
        store.last_id += 1;
        let poll = poll.into_poll(PollId(store.last_id));
        store.polls.insert(poll.id, poll.clone());
        Ok(poll)
    }

    async fn update(&self, poll: Poll) -> PersistenceResult<bool> {
        let mut store = self.inner.write().await;
        if !store.polls.contains_key(&poll.id) {
            return Ok(false);
        }
        store.ensure_title_free(&poll.title, Some(poll.id))?;
        match store.polls.get_mut(&poll.id) {
            Some(slot) => {
                *slot = poll;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: PollId) -> PersistenceResult<bool> {
        let mut store = self.inner.write().await;
        Ok(store.polls.remove(&id).is_some())
    }
}
