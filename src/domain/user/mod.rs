// src/domain/user/mod.rs
pub mod entity;
pub mod errors;
pub mod repository;

pub use entity::{NewUser, User};
pub use errors::UserErrors;
pub use repository::UserRepository;
