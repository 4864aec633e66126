// src/application/ports/security.rs
use crate::domain::errors::{self, CommonErrors};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecurityError {
    #[error("password hashing failed: {0}")]
    Hashing(String),
    #[error("stored password hash is malformed: {0}")]
    MalformedHash(String),
    #[error("blocking task failed: {0}")]
    Task(String),
}

impl From<SecurityError> for errors::Error {
    fn from(err: SecurityError) -> Self {
        tracing::error!(error = %err, "security backend failure");
        CommonErrors::UNEXPECTED
    }
}

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, SecurityError>;
    /// `Ok(false)` means the password does not match; `Err` is reserved for
    /// backend failures.
    async fn verify(&self, password: &str, expected_hash: &str) -> Result<bool, SecurityError>;
}
