use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::domain::PersonId;
use super::service::{ProfileService, ProfileServiceError};
use super::store::{RosterStore, StoreError};

/// Router builder exposing the profile endpoints.
pub fn profile_router<S>(service: Arc<ProfileService<S>>) -> Router
where
    S: RosterStore + 'static,
{
    Router::new()
        .route("/api/v1/people", get(roster_handler::<S>))
        .route("/api/v1/people/:person_id", get(profile_handler::<S>))
        .route(
            "/api/v1/people/:person_id/score",
            post(update_score_handler::<S>),
        )
        .with_state(service)
}

/// Body of a score edit. The effective date defaults to today so clients
/// only send it when replaying history.
#[derive(Debug, Deserialize)]
pub struct ScoreUpdateRequest {
    pub score: u16,
    #[serde(default)]
    pub effective_date: Option<NaiveDate>,
}

pub(crate) async fn roster_handler<S>(State(service): State<Arc<ProfileService<S>>>) -> Response
where
    S: RosterStore + 'static,
{
    match service.roster() {
        Ok(entries) => (StatusCode::OK, axum::Json(entries)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn profile_handler<S>(
    State(service): State<Arc<ProfileService<S>>>,
    Path(person_id): Path<String>,
) -> Response
where
    S: RosterStore + 'static,
{
    let id = PersonId(person_id);
    match service.profile(&id) {
        Ok(person) => (StatusCode::OK, axum::Json(person)).into_response(),
        Err(ProfileServiceError::Store(StoreError::UnknownPerson(_))) => {
            let payload = json!({
                "error": format!("no person with id {id}"),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn update_score_handler<S>(
    State(service): State<Arc<ProfileService<S>>>,
    Path(person_id): Path<String>,
    axum::Json(request): axum::Json<ScoreUpdateRequest>,
) -> Response
where
    S: RosterStore + 'static,
{
    let id = PersonId(person_id);
    let today = request
        .effective_date
        .unwrap_or_else(|| Local::now().date_naive());
    match service.update_score(&id, request.score, today) {
        Ok(change) => (StatusCode::OK, axum::Json(change)).into_response(),
        Err(ProfileServiceError::Store(error @ StoreError::ScoreOutOfRange(_))) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(ProfileServiceError::Store(StoreError::UnknownPerson(_))) => {
            let payload = json!({
                "error": format!("no person with id {id}"),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
