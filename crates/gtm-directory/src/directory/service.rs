use super::currency::DisplayCurrency;
use super::source::{DirectoryQuery, ListingSource};
use super::stats::{JobMarketStats, LocationStats, DEFAULT_TOP_TAGS};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// Agency page figures plus the display budget for the page's market.
#[derive(Debug, Clone, Serialize)]
pub struct AgencyPageStats {
    pub query: DirectoryQuery,
    pub currency: DisplayCurrency,
    pub budget_label: String,
    #[serde(flatten)]
    pub stats: LocationStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobPageStats {
    pub query: DirectoryQuery,
    #[serde(flatten)]
    pub stats: JobMarketStats,
}

/// Computes directory page statistics from a listing source.
///
/// Statistics always cover the whole selection; a query `limit` only applies
/// to listing fetches. Source failures never reach the caller: they are
/// logged and the page gets the empty-collection statistics instead.
pub struct DirectoryService<S> {
    source: Arc<S>,
    top_tags: usize,
}

impl<S> DirectoryService<S>
where
    S: ListingSource,
{
    pub fn new(source: Arc<S>) -> Self {
        Self::with_top_tags(source, DEFAULT_TOP_TAGS)
    }

    pub fn with_top_tags(source: Arc<S>, top_tags: usize) -> Self {
        Self { source, top_tags }
    }

    pub fn agency_stats(
        &self,
        query: DirectoryQuery,
        currency: Option<DisplayCurrency>,
    ) -> AgencyPageStats {
        let agencies = self.source.agencies(&query.unbounded()).unwrap_or_else(|err| {
            warn!(error = %err, ?query, "agency lookup failed; rendering empty stats");
            Vec::new()
        });

        let currency = currency.unwrap_or_else(|| {
            query
                .location
                .as_deref()
                .map(DisplayCurrency::for_market)
                .unwrap_or_default()
        });
        let stats = LocationStats::from_agencies(&agencies, self.top_tags);

        AgencyPageStats {
            budget_label: stats.budget_label(currency),
            query,
            currency,
            stats,
        }
    }

    pub fn job_stats(&self, query: DirectoryQuery) -> JobPageStats {
        let jobs = self.source.jobs(&query.unbounded()).unwrap_or_else(|err| {
            warn!(error = %err, ?query, "job lookup failed; rendering empty stats");
            Vec::new()
        });

        JobPageStats {
            stats: JobMarketStats::from_jobs(&jobs, self.top_tags),
            query,
        }
    }

    pub fn service_areas(&self) -> Vec<String> {
        self.source.service_areas().unwrap_or_else(|err| {
            warn!(error = %err, "service area lookup failed");
            Vec::new()
        })
    }
}
