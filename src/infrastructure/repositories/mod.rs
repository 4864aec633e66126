// src/infrastructure/repositories/mod.rs
mod memory_poll;
mod memory_user;

pub use memory_poll::InMemoryPollRepository;
pub use memory_user::InMemoryUserRepository;
