// src/domain/poll/errors.rs
use crate::domain::errors::Error;

pub struct PollErrors;

impl PollErrors {
    pub const NOT_FOUND: Error =
        Error::from_static("Poll.NotFound", "No Poll Was Found With The Given Id");
    pub const DUPLICATED_TITLE: Error = Error::from_static(
        "Poll.DuplicatedTitle",
        "Another poll with the same title already exists",
    );
}
