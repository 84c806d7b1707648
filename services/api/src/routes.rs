use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use gtm_directory::directory::{
    directory_router, DirectoryService, ListingRecord, ListingSource, ListingSummary,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Listing posted for ad hoc aggregation.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ListingInput {
    pub(crate) identifier: String,
    #[serde(default)]
    pub(crate) amount: Option<f64>,
    #[serde(default)]
    pub(crate) tags: Vec<String>,
}

impl ListingRecord for ListingInput {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn amount(&self) -> Option<f64> {
        self.amount
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AggregateRequest {
    #[serde(default)]
    pub(crate) records: Vec<ListingInput>,
    #[serde(default)]
    pub(crate) fallback: f64,
    #[serde(default = "default_limit")]
    pub(crate) limit: usize,
}

fn default_limit() -> usize {
    gtm_directory::directory::stats::DEFAULT_TOP_TAGS
}

#[derive(Debug, Serialize)]
pub(crate) struct AggregateResponse {
    #[serde(flatten)]
    pub(crate) summary: ListingSummary,
}

pub(crate) fn with_directory_routes<S>(service: Arc<DirectoryService<S>>) -> axum::Router
where
    S: ListingSource + 'static,
{
    directory_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/directory/aggregate",
            axum::routing::post(aggregate_endpoint),
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

pub(crate) async fn aggregate_endpoint(
    Json(payload): Json<AggregateRequest>,
) -> Json<AggregateResponse> {
    let AggregateRequest {
        records,
        fallback,
        limit,
    } = payload;

    tracing::debug!(records = records.len(), limit, "aggregating posted listings");

    Json(AggregateResponse {
        summary: ListingSummary::of(&records, fallback, limit),
    })
}
