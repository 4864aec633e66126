// src/presentation/http/controllers/auth.rs
use crate::application::dto::{AuthResponse, LoginRequest};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ValidatedJson;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};

pub async fn login(
    Extension(state): Extension<HttpState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> HttpResult<Json<AuthResponse>> {
    state
        .services
        .auth
        .login(payload)
        .await
        .into_http(StatusCode::BAD_REQUEST)
        .map(Json)
}
