// src/application/services/polls.rs
use std::sync::Arc;

use crate::{
    application::dto::{PollRequest, PollResponse},
    domain::{
        errors::{Error, PersistenceError},
        outcome::Outcome,
        poll::{NewPoll, PollErrors, PollId, PollRepository},
    },
};

pub struct PollService {
    repo: Arc<dyn PollRepository>,
}

impl PollService {
    #[must_use]
    pub fn new(repo: Arc<dyn PollRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Outcome<Vec<PollResponse>> {
        self.repo
            .list()
            .await
            .map(|polls| polls.into_iter().map(PollResponse::from).collect())
            .map_err(Error::from)
            .into()
    }

    pub async fn get(&self, id: i64) -> Outcome<PollResponse> {
        match self.repo.find_by_id(PollId(id)).await {
            Ok(Some(poll)) => Outcome::success(poll.into()),
            Ok(None) => Outcome::failure(PollErrors::NOT_FOUND),
            Err(err) => Outcome::failure(err.into()),
        }
    }

    pub async fn create(&self, request: PollRequest) -> Outcome<PollResponse> {
        self.try_create(request.into()).await.into()
    }

    pub async fn update(&self, id: i64, request: PollRequest) -> Outcome {
        self.try_update(PollId(id), request.into()).await.into()
    }

    pub async fn delete(&self, id: i64) -> Outcome {
        match self.repo.delete(PollId(id)).await {
            Ok(true) => Outcome::ok(),
            Ok(false) => Outcome::failure(PollErrors::NOT_FOUND),
            Err(err) => Outcome::failure(err.into()),
        }
    }

    pub async fn toggle_publish(&self, id: i64) -> Outcome {
        self.try_toggle_publish(PollId(id)).await.into()
    }

    async fn try_create(&self, poll: NewPoll) -> Result<PollResponse, Error> {
        let created = self.repo.insert(poll).await.map_err(title_conflict)?;
        tracing::info!(poll_id = %created.id, "poll created");
        Ok(created.into())
    }

    async fn try_update(&self, id: PollId, changes: NewPoll) -> Result<(), Error> {
        let mut poll = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(PollErrors::NOT_FOUND)?;
        poll.apply(changes);
        if !self.repo.update(poll).await.map_err(title_conflict)? {
            return Err(PollErrors::NOT_FOUND);
        }
        Ok(())
    }

    async fn try_toggle_publish(&self, id: PollId) -> Result<(), Error> {
        let mut poll = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(PollErrors::NOT_FOUND)?;
        poll.toggle_publish();
        tracing::debug!(poll_id = %id, published = poll.is_published, "poll publish state toggled");
        if !self.repo.update(poll).await? {
            return Err(PollErrors::NOT_FOUND);
        }
        Ok(())
    }
}

fn title_conflict(err: PersistenceError) -> Error {
    match err {
        PersistenceError::Conflict(_) => PollErrors::DUPLICATED_TITLE,
        other => other.into(),
    }
}
