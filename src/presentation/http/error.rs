use crate::domain::{
    errors::{CommonErrors, Error},
    outcome::Outcome,
};
use crate::presentation::http::problem::{APPLICATION_PROBLEM_JSON, ProblemError, ProblemPayload};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

#[derive(Debug)]
pub struct HttpError {
    problem: ProblemPayload,
}

impl HttpError {
    #[must_use]
    pub fn from_error(status: StatusCode, err: &Error) -> Self {
        if status.is_server_error() {
            tracing::error!(code = err.code(), status = status.as_u16(), "request failed");
        } else {
            tracing::debug!(code = err.code(), status = status.as_u16(), "request failed");
        }
        Self::new(ProblemPayload::from_error(status, err))
    }

    /// Keeps the status axum picked for the rejection: 400 for broken JSON,
    /// 415 for a missing content type, 422 for JSON of the wrong shape.
    #[must_use]
    pub fn from_json_rejection(rejection: &JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "rejected request body");
        let code = match rejection {
            JsonRejection::JsonSyntaxError(_) => "Request.MalformedBody",
            JsonRejection::JsonDataError(_) => "Request.InvalidBody",
            JsonRejection::MissingJsonContentType(_) => "Request.UnsupportedMediaType",
            JsonRejection::BytesRejection(_) => "Request.UnreadableBody",
            _ => "Request.RejectedBody",
        };
        let status = rejection.status();
        let status = if status.is_client_error() || status.is_server_error() {
            status
        } else {
            StatusCode::BAD_REQUEST
        };
        Self::rejected(status, code, rejection.body_text())
    }

    /// 400 for requests the framework could not decode.
    #[must_use]
    pub fn bad_request(code: &str, description: String) -> Self {
        Self::rejected(StatusCode::BAD_REQUEST, code, description)
    }

    #[must_use]
    pub fn rejected(status: StatusCode, code: &str, description: String) -> Self {
        Self::new(ProblemPayload::new(
            status,
            vec![ProblemError {
                code: code.to_owned(),
                description,
            }],
        ))
    }

    #[must_use]
    pub fn route_not_found() -> Self {
        Self::from_error(StatusCode::NOT_FOUND, &CommonErrors::ROUTE_NOT_FOUND)
    }

    #[must_use]
    pub fn method_not_allowed() -> Self {
        Self::from_error(StatusCode::METHOD_NOT_ALLOWED, &CommonErrors::METHOD_NOT_ALLOWED)
    }

    #[must_use]
    pub const fn new(problem: ProblemPayload) -> Self {
        Self { problem }
    }

    #[must_use]
    pub const fn problem(&self) -> &ProblemPayload {
        &self.problem
    }
}

impl From<ValidationErrors> for HttpError {
    fn from(errors: ValidationErrors) -> Self {
        tracing::debug!(error = %errors, "request validation failed");
        Self::new(ProblemPayload::from_validation(&errors))
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (
            self.problem.status_code(),
            [(header::CONTENT_TYPE, APPLICATION_PROBLEM_JSON)],
            Json(self.problem),
        )
            .into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

/// Boundary conversion from a service [`Outcome`] into a handler result.
pub trait IntoHttpResult<T> {
    fn into_http(self, status: StatusCode) -> HttpResult<T>;

    /// Picks the status from the error, for operations that fail in more
    /// than one way.
    fn into_http_with(self, status: impl FnOnce(&Error) -> StatusCode) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for Outcome<T> {
    fn into_http(self, status: StatusCode) -> HttpResult<T> {
        self.into_http_with(|_| status)
    }

    fn into_http_with(self, status: impl FnOnce(&Error) -> StatusCode) -> HttpResult<T> {
        self.into_result().map_err(|err| {
            let status = if err == CommonErrors::UNEXPECTED {
                StatusCode::INTERNAL_SERVER_ERROR
            } else {
                status(&err)
            };
            HttpError::from_error(status, &err)
        })
    }
}
