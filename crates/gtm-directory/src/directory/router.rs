use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::currency::DisplayCurrency;
use super::service::DirectoryService;
use super::source::{DirectoryQuery, ListingSource};

#[derive(Debug, Default, Deserialize)]
pub struct AgencyStatsParams {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct JobStatsParams {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Router builder exposing directory page statistics.
pub fn directory_router<S>(service: Arc<DirectoryService<S>>) -> Router
where
    S: ListingSource + 'static,
{
    Router::new()
        .route(
            "/api/v1/directory/agencies/stats",
            get(agency_stats_handler::<S>),
        )
        .route("/api/v1/directory/jobs/stats", get(job_stats_handler::<S>))
        .route(
            "/api/v1/directory/service-areas",
            get(service_areas_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn agency_stats_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    Query(params): Query<AgencyStatsParams>,
) -> Response
where
    S: ListingSource + 'static,
{
    let currency = match params.currency.as_deref() {
        Some(code) => match DisplayCurrency::from_code(code) {
            Some(currency) => Some(currency),
            None => {
                let payload = json!({
                    "error": format!("unsupported currency '{code}'"),
                });
                return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
            }
        },
        None => None,
    };

    let query = DirectoryQuery {
        category: params.category,
        location: params.location,
        ..DirectoryQuery::default()
    };

    Json(service.agency_stats(query, currency)).into_response()
}

pub(crate) async fn job_stats_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    Query(params): Query<JobStatsParams>,
) -> Response
where
    S: ListingSource + 'static,
{
    let query = DirectoryQuery {
        location: params.location,
        role: params.role,
        ..DirectoryQuery::default()
    };

    Json(service.job_stats(query)).into_response()
}

pub(crate) async fn service_areas_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
) -> Response
where
    S: ListingSource + 'static,
{
    let areas = service.service_areas();
    Json(json!({ "service_areas": areas })).into_response()
}
