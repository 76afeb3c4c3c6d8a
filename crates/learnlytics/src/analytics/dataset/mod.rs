//! Synthetic dataset construction with guaranteed dimension coverage.

mod config;
mod generator;

pub use config::DatasetConfig;
pub use generator::DatasetGenerator;

use super::filter::{filter_records, FilterSelection};
use super::records::{AnalyticsRecord, DemandSignal, LearningActivity, SkillRating, TrendingTopic};

/// An owned, immutable record universe. Built once per process by
/// [`DatasetGenerator::generate`] or the CSV importer and then only read.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<AnalyticsRecord>,
}

impl Dataset {
    pub fn new(records: Vec<AnalyticsRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[AnalyticsRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Narrows the dataset to one selection, preserving generation order.
    pub fn filter(&self, selection: &FilterSelection) -> Vec<&AnalyticsRecord> {
        filter_records(&self.records, selection)
    }

    pub fn activities(&self) -> impl Iterator<Item = &LearningActivity> {
        self.records.iter().filter_map(AnalyticsRecord::as_activity)
    }

    pub fn ratings(&self) -> impl Iterator<Item = &SkillRating> {
        self.records.iter().filter_map(AnalyticsRecord::as_rating)
    }

    pub fn topics(&self) -> impl Iterator<Item = &TrendingTopic> {
        self.records.iter().filter_map(AnalyticsRecord::as_topic)
    }

    pub fn demand(&self) -> impl Iterator<Item = &DemandSignal> {
        self.records.iter().filter_map(AnalyticsRecord::as_demand)
    }
}
