// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    allowed_origins: Vec<String>,
    admin: Option<AdminAccount>,
}

/// Credentials of the account seeded at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminAccount {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from environment variables, after loading a
    /// `.env` file when present.
    ///
    /// # Errors
    ///
    /// Fails when the admin account is only partially configured or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Fails when the admin account is only partially configured or invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let admin = match (lookup("ADMIN_EMAIL"), lookup("ADMIN_PASSWORD")) {
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing("ADMIN_PASSWORD")),
            (None, Some(_)) => return Err(ConfigError::Missing("ADMIN_EMAIL")),
            (Some(email), Some(password)) => {
                if !email.contains('@') {
                    return Err(ConfigError::Invalid(
                        "ADMIN_EMAIL must be an email address".into(),
                    ));
                }
                if password.is_empty() {
                    return Err(ConfigError::Invalid("ADMIN_PASSWORD must not be empty".into()));
                }
                Some(AdminAccount { email, password })
            }
        };

        Ok(Self {
            listen_addr,
            allowed_origins,
            admin,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub const fn admin(&self) -> Option<&AdminAccount> {
        self.admin.as_ref()
    }
}
