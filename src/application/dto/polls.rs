// src/application/dto/polls.rs
use crate::domain::poll::{NewPoll, Poll};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_poll_dates", skip_on_field_errors = false))]
pub struct PollRequest {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[validate(length(
        min = 3,
        max = 1500,
        message = "Summary must be between 3 and 1500 characters"
    ))]
    pub summary: String,
    pub starts_at: NaiveDate,
    pub ends_at: NaiveDate,
}

/// Length is checked on the trimmed title, which is what gets stored.
fn validate_title(title: &str) -> Result<(), ValidationError> {
    let length = title.trim().chars().count();
    if (3..=100).contains(&length) {
        return Ok(());
    }
    Err(ValidationError::new("length")
        .with_message("Title must be between 3 and 100 characters".into()))
}

fn validate_poll_dates(request: &PollRequest) -> Result<(), ValidationError> {
    if request.ends_at < request.starts_at {
        return Err(ValidationError::new("ends_at")
            .with_message("End date must be greater than or equal to start date".into()));
    }
    Ok(())
}

impl From<PollRequest> for NewPoll {
    fn from(request: PollRequest) -> Self {
        Self {
            title: request.title.trim().to_owned(),
            summary: request.summary,
            starts_at: request.starts_at,
            ends_at: request.ends_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollResponse {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub is_published: bool,
    pub starts_at: NaiveDate,
    pub ends_at: NaiveDate,
}

impl From<Poll> for PollResponse {
    fn from(poll: Poll) -> Self {
        Self {
            id: poll.id.into(),
            title: poll.title,
            summary: poll.summary,
            is_published: poll.is_published,
            starts_at: poll.starts_at,
            ends_at: poll.ends_at,
        }
    }
}
