// src/presentation/http/extractors.rs
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::error::HttpError;

/// JSON body that has been deserialized and validated. Both failure modes
/// reject with a problem payload.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::from_json_rejection(&rejection))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Single path parameter whose rejection is reported as a problem payload.
#[derive(Debug, Clone)]
pub struct ProblemPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ProblemPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection, "malformed path parameter");
                HttpError::bad_request("Request.InvalidPath", rejection.body_text())
            })?;
        Ok(Self(value))
    }
}
