use super::common::*;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::credit::router::{self, ScoreUpdateRequest};
use crate::credit::service::ProfileService;

#[tokio::test]
async fn profile_handler_returns_not_found_for_unknown_people() {
    let (service, _) = build_service();
    let service = Arc::new(service);

    let response =
        router::profile_handler::<MemoryRoster>(State(service), Path("404".to_string())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("404"));
}

#[tokio::test]
async fn update_score_handler_rejects_out_of_range_scores() {
    let (service, _) = build_service();
    let service = Arc::new(service);

    let response = router::update_score_handler::<MemoryRoster>(
        State(service),
        Path("1".to_string()),
        axum::Json(ScoreUpdateRequest {
            score: 1000,
            effective_date: Some(edit_day()),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn update_score_handler_returns_not_found_for_unknown_people() {
    let (service, _) = build_service();
    let service = Arc::new(service);

    let response = router::update_score_handler::<MemoryRoster>(
        State(service),
        Path("404".to_string()),
        axum::Json(ScoreUpdateRequest {
            score: 700,
            effective_date: Some(edit_day()),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn roster_handler_reports_store_outages() {
    let service = Arc::new(ProfileService::new(Arc::new(UnavailableRoster)));

    let response = router::roster_handler::<UnavailableRoster>(State(service)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn people_route_lists_the_roster() {
    let router = profile_router_with_seed();

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/people")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let entries = payload.as_array().expect("roster array");
    assert_eq!(entries.len(), 8);
    assert_eq!(entries[0]["name"], "Sarah Johnson");
    assert_eq!(entries[0]["tier_label"], "Very Good");
}

#[tokio::test]
async fn profile_route_returns_person_payloads() {
    let router = profile_router_with_seed();

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/people/3")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["first_name"], "Emily");
    assert_eq!(payload["credit_score"], 820);
    assert_eq!(payload["address"]["city"], "Denver");
}

#[tokio::test]
async fn score_route_applies_edits() {
    let router = profile_router_with_seed();

    let body = json!({
        "score": 765,
        "effective_date": "2024-12-20",
    });
    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/people/1/score")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&body).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["previous_score"], 750);
    assert_eq!(payload["new_score"], 765);
    assert_eq!(payload["delta"], 15);
    assert_eq!(payload["tier"], "very_good");
}
