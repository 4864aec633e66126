// src/domain/errors.rs
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Structured failure descriptor carried by a failed [`Outcome`](super::outcome::Outcome).
///
/// `code` is a short machine readable key such as `"Poll.NotFound"` that
/// clients branch on; `description` is the human readable text. Two errors are
/// equal when both fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[error("{code}: {description}")]
pub struct Error {
    code: Cow<'static, str>,
    description: Cow<'static, str>,
}

impl Error {
    /// Sentinel meaning "no error". Carried by every successful outcome and
    /// never attached to a failure.
    pub const NONE: Self = Self::from_static("", "");

    #[must_use]
    pub fn new(code: impl Into<Cow<'static, str>>, description: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }

    /// Const constructor used by the error catalogs.
    #[must_use]
    pub const fn from_static(code: &'static str, description: &'static str) -> Self {
        Self {
            code: Cow::Borrowed(code),
            description: Cow::Borrowed(description),
        }
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.code.is_empty() && self.description.is_empty()
    }
}

/// Errors shared by every module.
pub struct CommonErrors;

impl CommonErrors {
    pub const UNEXPECTED: Error =
        Error::from_static("Server.Unexpected", "An unexpected error occurred");
    pub const ROUTE_NOT_FOUND: Error =
        Error::from_static("Route.NotFound", "No route matches the request");
    pub const METHOD_NOT_ALLOWED: Error = Error::from_static(
        "Route.MethodNotAllowed",
        "The route does not support this HTTP method",
    );
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("record conflict: {0}")]
    Conflict(String),
}

impl From<PersistenceError> for Error {
    fn from(err: PersistenceError) -> Self {
        tracing::error!(error = %err, "persistence failure");
        CommonErrors::UNEXPECTED
    }
}
