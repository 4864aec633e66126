use crate::application::ports::security::{PasswordHasher, SecurityError};
use argon2::{
    Argon2,
    password_hash::{
        self, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

#[derive(Default, Clone)]
pub struct Argon2PasswordHasher;

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, SecurityError> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| SecurityError::Hashing(err.to_string()))
        })
        .await
        .map_err(|err| SecurityError::Task(err.to_string()))?
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> Result<bool, SecurityError> {
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&expected_hash)
                .map_err(|err| SecurityError::MalformedHash(err.to_string()))?;
            match Argon2::default().verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(password_hash::Error::Password) => Ok(false),
                Err(err) => Err(SecurityError::Hashing(err.to_string())),
            }
        })
        .await
        .map_err(|err| SecurityError::Task(err.to_string()))?
    }
}
