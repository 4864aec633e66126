// src/domain/mod.rs
pub mod errors;
pub mod outcome;
pub mod poll;
pub mod user;

pub use errors::{CommonErrors, Error, PersistenceError, PersistenceResult};
pub use outcome::Outcome;
