// src/presentation/http/problem.rs
//! RFC 7807 problem payloads.
//!
//! Every expected failure leaves the service in the same shape: a stable
//! `type`/`title` per status and an `errors` array of `{code, description}`
//! pairs, whether it came from a domain [`Error`] or from request validation.

use crate::domain::{errors::Error, outcome::Outcome};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use validator::{ValidationErrors, ValidationErrorsKind};

pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Key `validator` uses for struct-level (schema) failures.
const SCHEMA_ERRORS_KEY: &str = "__all__";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProblemWire")]
pub struct ProblemPayload {
    #[serde(rename = "type")]
    problem_type: String,
    title: String,
    status: u16,
    errors: Vec<ProblemError>,
}

/// Unchecked wire form; deserialization goes through the same invariants
/// as [`ProblemPayload::new`].
#[derive(Deserialize)]
struct ProblemWire {
    #[serde(rename = "type")]
    problem_type: String,
    title: String,
    status: u16,
    errors: Vec<ProblemError>,
}

impl TryFrom<ProblemWire> for ProblemPayload {
    type Error = String;

    fn try_from(wire: ProblemWire) -> Result<Self, Self::Error> {
        let status = StatusCode::from_u16(wire.status).map_err(|err| err.to_string())?;
        if !(status.is_client_error() || status.is_server_error()) {
            return Err(format!("problem status must be 4xx/5xx, got {}", wire.status));
        }
        if wire.errors.is_empty() {
            return Err("problem payload needs at least one error".into());
        }
        Ok(Self {
            problem_type: wire.problem_type,
            title: wire.title,
            status: wire.status,
            errors: wire.errors,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemError {
    pub code: String,
    pub description: String,
}

impl From<&Error> for ProblemError {
    fn from(error: &Error) -> Self {
        Self {
            code: error.code().to_owned(),
            description: error.description().to_owned(),
        }
    }
}

impl ProblemPayload {
    /// # Panics
    ///
    /// Panics when `status` is not a client or server error, or when
    /// `errors` is empty.
    #[must_use]
    #[track_caller]
    pub fn new(status: StatusCode, errors: Vec<ProblemError>) -> Self {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "problem payloads describe 4xx/5xx responses, got {status}"
        );
        assert!(!errors.is_empty(), "a problem payload needs at least one error");
        Self {
            problem_type: type_uri(status).to_owned(),
            title: title(status).to_owned(),
            status: status.as_u16(),
            errors,
        }
    }

    /// # Panics
    ///
    /// Panics when `error` is [`Error::NONE`] or `status` is not 4xx/5xx.
    #[must_use]
    #[track_caller]
    pub fn from_error(status: StatusCode, error: &Error) -> Self {
        assert!(!error.is_none(), "Error::NONE cannot be reported as a problem");
        Self::new(status, vec![ProblemError::from(error)])
    }

    /// One entry per violated rule, ordered by field path. Nested structs and
    /// lists are flattened into `parent.child` / `items[0].child` codes;
    /// struct-level failures use the rule's own code. Errors with no
    /// violations at all collapse into a single `Request.Invalid` entry.
    #[must_use]
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let mut entries = Vec::new();
        collect_validation_entries(errors, "", &mut entries);
        if entries.is_empty() {
            entries.push(ProblemError {
                code: "Request.Invalid".into(),
                description: "The request failed validation".into(),
            });
        }
        Self::new(StatusCode::BAD_REQUEST, entries)
    }

    #[must_use]
    pub fn problem_type(&self) -> &str {
        &self.problem_type
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    #[must_use]
    pub fn errors(&self) -> &[ProblemError] {
        &self.errors
    }
}

fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_owned()
    } else {
        format!("{prefix}.{segment}")
    }
}

fn collect_validation_entries(errors: &ValidationErrors, prefix: &str, out: &mut Vec<ProblemError>) {
    let mut kinds: Vec<_> = errors.errors().iter().collect();
    kinds.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (field, kind) in kinds {
        let path = join_path(prefix, field);
        match kind {
            ValidationErrorsKind::Field(failures) => {
                for failure in failures {
                    let code = if *field == SCHEMA_ERRORS_KEY {
                        join_path(prefix, &failure.code)
                    } else {
                        path.clone()
                    };
                    let description = failure.message.as_ref().map_or_else(
                        || format!("{code} failed the '{}' rule", failure.code),
                        ToString::to_string,
                    );
                    out.push(ProblemError { code, description });
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_validation_entries(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_validation_entries(inner, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

/// RFC 9110 section describing `status`, falling back to the class section.
#[must_use]
pub fn type_uri(status: StatusCode) -> &'static str {
    match status.as_u16() {
        400 => "https://tools.ietf.org/html/rfc9110#section-15.5.1",
        401 => "https://tools.ietf.org/html/rfc9110#section-15.5.2",
        403 => "https://tools.ietf.org/html/rfc9110#section-15.5.4",
        404 => "https://tools.ietf.org/html/rfc9110#section-15.5.5",
        405 => "https://tools.ietf.org/html/rfc9110#section-15.5.6",
        406 => "https://tools.ietf.org/html/rfc9110#section-15.5.7",
        408 => "https://tools.ietf.org/html/rfc9110#section-15.5.9",
        409 => "https://tools.ietf.org/html/rfc9110#section-15.5.10",
        412 => "https://tools.ietf.org/html/rfc9110#section-15.5.13",
        415 => "https://tools.ietf.org/html/rfc9110#section-15.5.16",
        422 => "https://tools.ietf.org/html/rfc9110#section-15.5.21",
        500 => "https://tools.ietf.org/html/rfc9110#section-15.6.1",
        502 => "https://tools.ietf.org/html/rfc9110#section-15.6.3",
        503 => "https://tools.ietf.org/html/rfc9110#section-15.6.4",
        _ if status.is_server_error() => "https://tools.ietf.org/html/rfc9110#section-15.6",
        _ => "https://tools.ietf.org/html/rfc9110#section-15.5",
    }
}

/// Canonical reason phrase, so titles stay the same across domain errors.
#[must_use]
pub fn title(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or_else(|| {
        if status.is_server_error() {
            "Server Error"
        } else {
            "Client Error"
        }
    })
}

/// # Panics
///
/// Panics when `outcome` is a success, or when `status` is not 4xx/5xx.
#[track_caller]
pub fn to_problem<T>(outcome: &Outcome<T>, status: StatusCode) -> ProblemPayload {
    assert!(
        outcome.is_failure(),
        "only a failed outcome can be turned into a problem payload"
    );
    ProblemPayload::from_error(status, outcome.error())
}

pub trait ToProblem {
    /// # Panics
    ///
    /// Panics when called on a successful outcome.
    fn to_problem(&self, status: StatusCode) -> ProblemPayload;
}

impl<T> ToProblem for Outcome<T> {
    #[track_caller]
    fn to_problem(&self, status: StatusCode) -> ProblemPayload {
        to_problem(self, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{poll::PollErrors, user::UserErrors};
    use serde_json::json;
    use validator::{Validate, ValidationError};

    #[derive(Validate)]
    struct SignUp {
        #[validate(length(min = 3, message = "Name is too short"))]
        name: String,
    }

    #[derive(Validate)]
    struct Address {
        #[validate(length(min = 2, message = "City is too short"))]
        city: String,
    }

    #[derive(Validate)]
    struct Order {
        #[validate(nested)]
        address: Address,
        #[validate(nested)]
        lines: Vec<Address>,
    }

    #[test]
    fn not_found_scenario() {
        let outcome: Outcome<()> = Outcome::failure(PollErrors::NOT_FOUND);
        let problem = outcome.to_problem(StatusCode::NOT_FOUND);

        let body = serde_json::to_value(&problem).unwrap();
        assert_eq!(
            body,
            json!({
                "type": "https://tools.ietf.org/html/rfc9110#section-15.5.5",
                "title": "Not Found",
                "status": 404,
                "errors": [{
                    "code": "Poll.NotFound",
                    "description": "No Poll Was Found With The Given Id"
                }]
            })
        );
    }

    #[test]
    fn title_is_status_label_not_domain_code() {
        let outcome: Outcome<u8> = Outcome::failure(UserErrors::INVALID_CREDENTIALS);
        let problem = to_problem(&outcome, StatusCode::BAD_REQUEST);
        assert_eq!(problem.title(), "Bad Request");
        assert_eq!(problem.status(), 400);
        assert_eq!(problem.errors()[0].code, "User.InvalidCredentials");
    }

    #[test]
    fn mapping_is_idempotent() {
        let outcome: Outcome<()> = Outcome::failure(PollErrors::DUPLICATED_TITLE);
        assert_eq!(
            outcome.to_problem(StatusCode::CONFLICT),
            outcome.to_problem(StatusCode::CONFLICT)
        );
    }

    #[test]
    #[should_panic(expected = "only a failed outcome")]
    fn success_cannot_be_mapped() {
        let _ = to_problem(&Outcome::success(1), StatusCode::BAD_REQUEST);
    }

    #[test]
    #[should_panic(expected = "4xx/5xx")]
    fn success_status_is_rejected() {
        let outcome: Outcome<()> = Outcome::failure(PollErrors::NOT_FOUND);
        let _ = outcome.to_problem(StatusCode::OK);
    }

    #[test]
    fn validation_and_domain_problems_share_shape() {
        let errors = SignUp { name: "ab".into() }.validate().unwrap_err();
        let from_fields = serde_json::to_value(ProblemPayload::from_validation(&errors)).unwrap();

        let outcome: Outcome<()> = Outcome::failure(UserErrors::INVALID_CREDENTIALS);
        let from_domain =
            serde_json::to_value(outcome.to_problem(StatusCode::BAD_REQUEST)).unwrap();

        let keys = |value: &serde_json::Value| {
            let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
            keys.sort();
            keys
        };
        assert_eq!(keys(&from_fields), keys(&from_domain));
        assert_eq!(from_fields["type"], from_domain["type"]);
        assert_eq!(from_fields["title"], from_domain["title"]);
        assert_eq!(from_fields["status"], from_domain["status"]);
        assert_eq!(
            from_fields["errors"][0],
            json!({ "code": "name", "description": "Name is too short" })
        );
        assert_eq!(keys(&from_fields["errors"][0]), keys(&from_domain["errors"][0]));
    }

    #[test]
    fn validation_entries_are_sorted_and_schema_errors_use_rule_code() {
        let mut errors = ValidationErrors::new();
        errors.add("title", ValidationError::new("length"));
        errors.add(
            "__all__",
            ValidationError::new("ends_at").with_message("End date too early".into()),
        );
        errors.add("summary", ValidationError::new("length"));

        let problem = ProblemPayload::from_validation(&errors);
        let codes: Vec<_> = problem.errors().iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, ["ends_at", "summary", "title"]);
        assert_eq!(problem.errors()[0].description, "End date too early");
        assert_eq!(problem.errors()[2].description, "title failed the 'length' rule");
    }

    #[test]
    fn unknown_statuses_fall_back_to_class_sections() {
        assert_eq!(
            type_uri(StatusCode::IM_A_TEAPOT),
            "https://tools.ietf.org/html/rfc9110#section-15.5"
        );
        assert_eq!(
            type_uri(StatusCode::INSUFFICIENT_STORAGE),
            "https://tools.ietf.org/html/rfc9110#section-15.6"
        );
        let custom = StatusCode::from_u16(499).unwrap();
        assert_eq!(title(custom), "Client Error");
    }

    #[test]
    fn nested_validation_errors_are_flattened() {
        let order = Order {
            address: Address { city: "x".into() },
            lines: vec![Address { city: "ok".into() }, Address { city: "y".into() }],
        };
        let errors = order.validate().unwrap_err();

        let problem = ProblemPayload::from_validation(&errors);
        let codes: Vec<_> = problem.errors().iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, ["address.city", "lines[1].city"]);
        assert_eq!(problem.errors()[0].description, "City is too short");
        assert_eq!(problem.status(), 400);
    }

    #[test]
    fn empty_validation_errors_still_yield_one_entry() {
        let problem = ProblemPayload::from_validation(&ValidationErrors::new());
        assert_eq!(problem.errors().len(), 1);
        assert_eq!(problem.errors()[0].code, "Request.Invalid");
    }

    #[test]
    fn deserialization_enforces_payload_invariants() {
        let ok = json!({
            "type": "https://tools.ietf.org/html/rfc9110#section-15.5.5",
            "title": "Not Found",
            "status": 404,
            "errors": [{ "code": "Poll.NotFound", "description": "missing" }]
        });
        let parsed: ProblemPayload = serde_json::from_value(ok.clone()).unwrap();
        assert_eq!(parsed.status_code(), StatusCode::NOT_FOUND);

        let mut success_status = ok.clone();
        success_status["status"] = json!(200);
        assert!(serde_json::from_value::<ProblemPayload>(success_status).is_err());

        let mut no_errors = ok;
        no_errors["errors"] = json!([]);
        assert!(serde_json::from_value::<ProblemPayload>(no_errors).is_err());
    }
}
