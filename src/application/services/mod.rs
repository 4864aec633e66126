// src/application/services/mod.rs
mod auth;
mod polls;

pub use auth::{AuthService, SeedAccount};
pub use polls::PollService;

use std::sync::Arc;

use crate::{
    application::ports::security::PasswordHasher,
    domain::{poll::PollRepository, user::UserRepository},
};

pub struct ApplicationServices {
    pub polls: Arc<PollService>,
    pub auth: Arc<AuthService>,
}

impl ApplicationServices {
    #[must_use]
    pub fn new(
        poll_repo: Arc<dyn PollRepository>,
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        let polls = Arc::new(PollService::new(Arc::clone(&poll_repo)));
        let auth = Arc::new(AuthService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
        ));

        Self { polls, auth }
    }
}
