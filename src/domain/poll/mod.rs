// src/domain/poll/mod.rs
pub mod entity;
pub mod errors;
pub mod repository;

pub use entity::{NewPoll, Poll, PollId};
pub use errors::PollErrors;
pub use repository::PollRepository;
