// tests/support/helpers.rs
use super::mocks;
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use axum::response::Response;
use poll_api::application::ports::security::PasswordHasher;
use poll_api::application::services::{ApplicationServices, SeedAccount};
use poll_api::domain::poll::PollRepository;
use poll_api::domain::user::UserRepository;
use poll_api::infrastructure::repositories::{InMemoryPollRepository, InMemoryUserRepository};
use poll_api::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const ADMIN_EMAIL: &str = "admin@survey-basket.com";
pub const ADMIN_PASSWORD: &str = "P@ssword123";

pub fn build_services(poll_repo: Arc<dyn PollRepository>) -> Arc<ApplicationServices> {
    let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(mocks::PlainPasswordHasher);
    Arc::new(ApplicationServices::new(poll_repo, user_repo, password_hasher))
}

pub async fn make_test_router_with_repo(poll_repo: Arc<dyn PollRepository>) -> Router {
    let services = build_services(poll_repo);
    let seeded = services
        .auth
        .register_seed(SeedAccount {
            email: ADMIN_EMAIL.into(),
            password: ADMIN_PASSWORD.into(),
            first_name: "Survey".into(),
            last_name: "Admin".into(),
        })
        .await;
    assert!(seeded.is_success(), "seed failed: {}", seeded.error());

    let state = HttpState { services };
    build_router(state, &["http://localhost:3000".to_string()])
}

pub async fn make_test_router() -> Router {
    make_test_router_with_repo(Arc::new(InMemoryPollRepository::new())).await
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

/// Sends `body` verbatim, for payloads `serde_json::Value` cannot express.
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    let req = builder.body(Body::from(body.to_owned())).unwrap();
    app.clone().oneshot(req).await.unwrap()
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert a problem response and return its body for further checks.
pub async fn assert_problem(resp: Response, expected_status: StatusCode, expected_title: &str) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_owned();
    assert!(
        ct.starts_with("application/problem+json"),
        "unexpected content-type: {ct}"
    );
    let json = json_body(resp).await;
    assert_eq!(json["title"], expected_title);
    assert_eq!(json["status"], expected_status.as_u16());
    assert!(json["type"].as_str().is_some_and(|t| t.starts_with("https://")));
    let errors = json["errors"].as_array().expect("errors array");
    assert!(!errors.is_empty(), "expected at least one error entry");
    for entry in errors {
        assert!(entry["code"].is_string());
        assert!(entry["description"].is_string());
    }
    json
}

pub fn poll_body(title: &str) -> Value {
    serde_json::json!({
        "title": title,
        "summary": "Where should the team have lunch?",
        "startsAt": "2026-11-01",
        "endsAt": "2026-11-30"
    })
}
