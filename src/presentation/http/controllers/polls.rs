// src/presentation/http/controllers/polls.rs
use crate::application::dto::{PollRequest, PollResponse};
use crate::domain::poll::PollErrors;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ProblemPath, ValidatedJson};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::{StatusCode, header},
};

pub async fn list_polls(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<PollResponse>>> {
    state
        .services
        .polls
        .list()
        .await
        .into_http(StatusCode::INTERNAL_SERVER_ERROR)
        .map(Json)
}

pub async fn get_poll(
    Extension(state): Extension<HttpState>,
    ProblemPath(id): ProblemPath<i64>,
) -> HttpResult<Json<PollResponse>> {
    state
        .services
        .polls
        .get(id)
        .await
        .into_http(StatusCode::NOT_FOUND)
        .map(Json)
}

pub async fn create_poll(
    Extension(state): Extension<HttpState>,
    ValidatedJson(payload): ValidatedJson<PollRequest>,
) -> HttpResult<(StatusCode, [(header::HeaderName, String); 1], Json<PollResponse>)> {
    let poll = state
        .services
        .polls
        .create(payload)
        .await
        .into_http(StatusCode::CONFLICT)?;

    let location = format!("/api/polls/{}", poll.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(poll)))
}

pub async fn update_poll(
    Extension(state): Extension<HttpState>,
    ProblemPath(id): ProblemPath<i64>,
    ValidatedJson(payload): ValidatedJson<PollRequest>,
) -> HttpResult<StatusCode> {
    state
        .services
        .polls
        .update(id, payload)
        .await
        .into_http_with(|err| {
            if *err == PollErrors::DUPLICATED_TITLE {
                StatusCode::CONFLICT
            } else {
                StatusCode::NOT_FOUND
            }
        })?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_poll(
    Extension(state): Extension<HttpState>,
    ProblemPath(id): ProblemPath<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .polls
        .delete(id)
        .await
        .into_http(StatusCode::NOT_FOUND)?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_publish(
    Extension(state): Extension<HttpState>,
    ProblemPath(id): ProblemPath<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .polls
        .toggle_publish(id)
        .await
        .into_http(StatusCode::NOT_FOUND)?;

    Ok(StatusCode::NO_CONTENT)
}
