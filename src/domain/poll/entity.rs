// src/domain/poll/entity.rs
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PollId(pub i64);

impl From<PollId> for i64 {
    fn from(value: PollId) -> Self {
        value.0
    }
}

impl fmt::Display for PollId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poll {
    pub id: PollId,
    pub title: String,
    pub summary: String,
    pub is_published: bool,
    pub starts_at: NaiveDate,
    pub ends_at: NaiveDate,
}

impl Poll {
    pub const fn toggle_publish(&mut self) {
        self.is_published = !self.is_published;
    }

    /// Replace the editable fields, keeping identity and publish state.
    pub fn apply(&mut self, changes: NewPoll) {
        self.title = changes.title;
        self.summary = changes.summary;
        self.starts_at = changes.starts_at;
        self.ends_at = changes.ends_at;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPoll {
    pub title: String,
    pub summary: String,
    pub starts_at: NaiveDate,
    pub ends_at: NaiveDate,
}

impl NewPoll {
    #[must_use]
    pub fn into_poll(self, id: PollId) -> Poll {
        Poll {
            id,
            title: self.title,
            summary: self.summary,
            is_published: false,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
        }
    }
}
