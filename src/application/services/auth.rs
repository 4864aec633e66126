// src/application/services/auth.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthResponse, LoginRequest},
        ports::security::PasswordHasher,
    },
    domain::{
        errors::Error,
        outcome::Outcome,
        user::{NewUser, UserErrors, UserRepository},
    },
};

pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

/// Account created at startup from configuration.
#[derive(Debug, Clone)]
pub struct SeedAccount {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl AuthService {
    #[must_use]
    pub fn new(user_repo: Arc<dyn UserRepository>, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            user_repo,
            password_hasher,
        }
    }

    /// Unknown email and wrong password fail identically so callers cannot
    /// tell which accounts exist.
    pub async fn login(&self, request: LoginRequest) -> Outcome<AuthResponse> {
        self.try_login(request).await.into()
    }

    pub async fn register_seed(&self, account: SeedAccount) -> Outcome<AuthResponse> {
        self.try_register(account).await.into()
    }

    async fn try_login(&self, request: LoginRequest) -> Result<AuthResponse, Error> {
        let Some(user) = self.user_repo.find_by_email(&request.email).await? else {
            tracing::debug!("login attempt for unknown email");
            return Err(UserErrors::INVALID_CREDENTIALS);
        };

        if !self
            .password_hasher
            .verify(&request.password, &user.password_hash)
            .await?
        {
            tracing::debug!(user_id = %user.id, "login attempt with wrong password");
            return Err(UserErrors::INVALID_CREDENTIALS);
        }

        Ok(user.into())
    }

    async fn try_register(&self, account: SeedAccount) -> Result<AuthResponse, Error> {
        let password_hash = self.password_hasher.hash(&account.password).await?;
        let user = self
            .user_repo
            .insert(NewUser {
                email: account.email,
                first_name: account.first_name,
                last_name: account.last_name,
                password_hash,
            })
            .await?;
        tracing::info!(user_id = %user.id, "seed account registered");
        Ok(user.into())
    }
}
