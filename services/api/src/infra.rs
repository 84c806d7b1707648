use gtm_directory::directory::DisplayCurrency;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_currency(raw: &str) -> Result<DisplayCurrency, String> {
    DisplayCurrency::from_code(raw).ok_or_else(|| {
        let known: Vec<&str> = DisplayCurrency::all()
            .into_iter()
            .map(DisplayCurrency::code)
            .collect();
        format!(
            "unsupported currency '{}' (expected one of {})",
            raw.trim(),
            known.join(", ")
        )
    })
}
