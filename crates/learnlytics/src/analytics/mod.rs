//! Dataset generation, filtering, aggregation, and metric derivation.

pub mod aggregate;
pub mod dataset;
pub mod domain;
pub mod filter;
pub mod imports;
pub mod metrics;
pub mod records;
pub mod report;

#[cfg(test)]
mod tests;

pub use aggregate::{median, top_n_by, MeasureTotals, PeriodGranularity};
pub use dataset::{Dataset, DatasetConfig, DatasetGenerator};
pub use domain::{ContentType, DecaySeverity, Provider, Region, ReportingHorizon, Role};
pub use filter::{filter_records, matches, DateWindow, FilterSelection};
pub use imports::{import_activities, ImportError};
pub use metrics::{
    decay_alerts, skill_gaps, top_gaps_by_role, DecayAlert, SkillGap, DECAY_ALERT_MIN_GAP,
    DECAY_HIGH_SEVERITY_GAP,
};
pub use records::{
    AnalyticsRecord, DemandSignal, FilterDimensions, LearningActivity, RecordId, SkillRating,
    TrendingTopic,
};
pub use report::DashboardReport;
