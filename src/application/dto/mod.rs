// src/application/dto/mod.rs
pub mod auth;
pub mod polls;

pub use auth::{AuthResponse, LoginRequest};
pub use polls::{PollRequest, PollResponse};
