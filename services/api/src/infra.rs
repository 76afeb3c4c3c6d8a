use chrono::NaiveDate;
use learnlytics::analytics::{Dataset, DatasetConfig, DatasetGenerator};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) dataset: Arc<Dataset>,
}

pub(crate) fn seeded_dataset(fiscal_year: i32, seed: u64) -> Dataset {
    DatasetGenerator::new(DatasetConfig::standard(fiscal_year), seed).generate()
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
