use crate::infra::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

use dental_credit::credit::{
    cards, offers, payments, profile_router, seed, CardOverview, CardRow, CardsQuery,
    CategorySpend, HistoryView, ImprovementTip, PaymentHistoryView, PaymentOverview,
    PaymentsQuery, PeopleQuery, PersonId, ProfileService, ProfileServiceError,
    QualificationView, RosterStore, ScoreCard, StatementImporter, StoreError,
};
use dental_credit::error::AppError;

/// Query payload for the card activity endpoint. An inline statement CSV
/// replaces the seeded transactions as the data under the query.
#[derive(Debug, Deserialize)]
pub(crate) struct CardsQueryRequest {
    #[serde(flatten)]
    pub(crate) query: CardsQuery,
    #[serde(default)]
    pub(crate) statement_csv: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CardActivityResponse {
    pub(crate) data_source: ActivityDataSource,
    pub(crate) overview: CardOverview,
    pub(crate) category_spending: Vec<CategorySpend>,
    pub(crate) transactions: Vec<CardRow>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DashboardReportRequest {
    pub(crate) person_id: String,
    /// Procedure to qualify financing against; omitted means no financing
    /// panel in the report.
    #[serde(default)]
    pub(crate) procedure_id: Option<String>,
    #[serde(default)]
    pub(crate) include_transactions: bool,
    #[serde(default)]
    pub(crate) statement_csv: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DashboardReportResponse {
    pub(crate) score_card: ScoreCard,
    pub(crate) history: HistoryView,
    pub(crate) payments: PaymentOverview,
    pub(crate) cards: CardOverview,
    pub(crate) data_source: ActivityDataSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) financing: Option<QualificationView>,
    pub(crate) tips: Vec<ImprovementTip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) transactions: Option<Vec<CardRow>>,
}

/// Where the card activity in a response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ActivityDataSource {
    Statement,
    Seed,
}

pub(crate) fn with_dashboard_routes<S>(service: Arc<ProfileService<S>>) -> axum::Router
where
    S: RosterStore + 'static,
{
    let service_routes = axum::Router::new()
        .route(
            "/api/v1/people/query",
            axum::routing::post(people_query_endpoint::<S>),
        )
        .route(
            "/api/v1/dashboard/report",
            axum::routing::post(dashboard_report_endpoint::<S>),
        )
        .with_state(service.clone());

    profile_router(service)
        .merge(service_routes)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/payments/query",
            axum::routing::post(payments_query_endpoint),
        )
        .route(
            "/api/v1/cards/query",
            axum::routing::post(cards_query_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// The people browser over the live roster, so score edits made through
/// the API show up in the grid.
pub(crate) async fn people_query_endpoint<S>(
    State(service): State<Arc<ProfileService<S>>>,
    Json(query): Json<PeopleQuery>,
) -> Response
where
    S: RosterStore + 'static,
{
    match service.browse(&query) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn payments_query_endpoint(
    Json(query): Json<PaymentsQuery>,
) -> Result<Json<PaymentHistoryView>, AppError> {
    let view = payments::review(&seed::payment_history(), &query)?;
    Ok(Json(view))
}

pub(crate) async fn cards_query_endpoint(
    Json(payload): Json<CardsQueryRequest>,
) -> Result<Json<CardActivityResponse>, AppError> {
    let CardsQueryRequest {
        query,
        statement_csv,
    } = payload;

    let (transactions, data_source) = if let Some(csv) = statement_csv {
        let reader = Cursor::new(csv.into_bytes());
        let transactions = StatementImporter::from_reader(reader)?;
        (transactions, ActivityDataSource::Statement)
    } else {
        (seed::card_transactions(), ActivityDataSource::Seed)
    };

    let view = cards::activity(&transactions, &query)?;
    Ok(Json(CardActivityResponse {
        data_source,
        overview: view.overview,
        category_spending: view.category_spending,
        transactions: view.transactions,
    }))
}

pub(crate) async fn dashboard_report_endpoint<S>(
    State(service): State<Arc<ProfileService<S>>>,
    Json(payload): Json<DashboardReportRequest>,
) -> Response
where
    S: RosterStore + 'static,
{
    let DashboardReportRequest {
        person_id,
        procedure_id,
        include_transactions,
        statement_csv,
    } = payload;

    let id = PersonId(person_id);
    let score_card = match service.score_card(&id) {
        Ok(card) => card,
        Err(ProfileServiceError::Store(StoreError::UnknownPerson(_))) => {
            let payload = json!({
                "error": format!("no person with id {id}"),
            });
            return (StatusCode::NOT_FOUND, Json(payload)).into_response();
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response();
        }
    };

    let history = match service.history(&id) {
        Ok(history) => history,
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response();
        }
    };

    let financing = match procedure_id {
        Some(procedure_id) => {
            let Some(procedure) = seed::procedures()
                .into_iter()
                .find(|procedure| procedure.id == procedure_id)
            else {
                let payload = json!({
                    "error": format!("no procedure with id {procedure_id}"),
                });
                return (StatusCode::NOT_FOUND, Json(payload)).into_response();
            };
            Some(offers::qualification(
                &seed::loan_offers(),
                score_card.credit_score,
                &procedure,
            ))
        }
        None => None,
    };

    let (transactions, data_source) = if let Some(csv) = statement_csv {
        match StatementImporter::from_reader(Cursor::new(csv.into_bytes())) {
            Ok(transactions) => (transactions, ActivityDataSource::Statement),
            Err(error) => {
                let payload = json!({
                    "error": error.to_string(),
                });
                return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
            }
        }
    } else {
        (seed::card_transactions(), ActivityDataSource::Seed)
    };

    let activity = match cards::activity(&transactions, &CardsQuery::default()) {
        Ok(activity) => activity,
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response();
        }
    };

    let payment_overview =
        match payments::review(&seed::payment_history(), &PaymentsQuery::default()) {
            Ok(view) => view.overview,
            Err(error) => {
                let payload = json!({
                    "error": error.to_string(),
                });
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response();
            }
        };

    let transactions = if include_transactions {
        Some(activity.transactions)
    } else {
        None
    };

    (
        StatusCode::OK,
        Json(DashboardReportResponse {
            score_card,
            history,
            payments: payment_overview,
            cards: activity.overview,
            data_source,
            financing,
            tips: seed::improvement_tips(),
            transactions,
        }),
    )
        .into_response()
}
