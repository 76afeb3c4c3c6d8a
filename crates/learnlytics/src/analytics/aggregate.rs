use super::records::LearningActivity;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Time-bucket width for period aggregation. Always caller-supplied, never
/// inferred from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodGranularity {
    Month,
    Quarter,
    Year,
}

impl PeriodGranularity {
    pub const fn ordered() -> [Self; 3] {
        [Self::Month, Self::Quarter, Self::Year]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Month => "Monthly",
            Self::Quarter => "Quarterly",
            Self::Year => "Yearly",
        }
    }

    /// Group key for a date: `YYYY-MM`, `YYYY-Qn`, or `YYYY`.
    pub fn key(self, date: NaiveDate) -> String {
        match self {
            Self::Month => format!("{:04}-{:02}", date.year(), date.month()),
            Self::Quarter => format!("{:04}-Q{}", date.year(), (date.month() + 2) / 3),
            Self::Year => format!("{:04}", date.year()),
        }
    }
}

/// Running sums accumulated in a single pass over the filtered record set.
/// Derived averages are computed afterwards, once per group.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct MeasureTotals {
    pub records: usize,
    pub learners: u64,
    pub completions: u64,
    pub hours: f64,
    pub active_users: u64,
    pub engagement_sum: f64,
}

impl MeasureTotals {
    pub fn absorb(&mut self, activity: &LearningActivity) {
        self.records += 1;
        self.learners += u64::from(activity.learners);
        self.completions += u64::from(activity.completions);
        self.hours += f64::from(activity.hours);
        self.active_users += u64::from(activity.active_users);
        self.engagement_sum += f64::from(activity.engagement_rate);
    }

    pub fn completion_rate(&self) -> f64 {
        if self.learners == 0 {
            0.0
        } else {
            self.completions as f64 / self.learners as f64
        }
    }

    pub fn avg_engagement(&self) -> f64 {
        if self.records == 0 {
            0.0
        } else {
            self.engagement_sum / self.records as f64
        }
    }

    pub fn active_ratio(&self) -> f64 {
        if self.learners == 0 {
            0.0
        } else {
            self.active_users as f64 / self.learners as f64
        }
    }
}

/// Derived per-group averages; the O(groups) second pass over totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupAverages {
    pub completion_rate: f64,
    pub avg_engagement: f64,
    pub avg_hours_per_record: f64,
}

/// Generic one-pass grouped reduction over any record iterator.
pub fn group_reduce<R, K, A, KeyFn, FoldFn>(
    records: impl IntoIterator<Item = R>,
    key_fn: KeyFn,
    fold: FoldFn,
) -> BTreeMap<K, A>
where
    K: Ord,
    A: Default,
    KeyFn: Fn(&R) -> K,
    FoldFn: Fn(&mut A, &R),
{
    let mut groups: BTreeMap<K, A> = BTreeMap::new();
    for record in records {
        let entry = groups.entry(key_fn(&record)).or_default();
        fold(entry, &record);
    }
    groups
}

/// Activity totals grouped by an arbitrary key function.
pub fn activity_totals<'a, K, KeyFn>(
    activities: impl IntoIterator<Item = &'a LearningActivity>,
    key_fn: KeyFn,
) -> BTreeMap<K, MeasureTotals>
where
    K: Ord,
    KeyFn: Fn(&LearningActivity) -> K,
{
    group_reduce(
        activities,
        |activity| key_fn(activity),
        |totals: &mut MeasureTotals, activity| totals.absorb(activity),
    )
}

/// Activity totals bucketed by reporting period.
pub fn totals_by_period<'a>(
    activities: impl IntoIterator<Item = &'a LearningActivity>,
    granularity: PeriodGranularity,
) -> BTreeMap<String, MeasureTotals> {
    activity_totals(activities, |activity| granularity.key(activity.date))
}

/// Averages derived from grouped totals in a second pass.
pub fn group_averages<K: Ord + Clone>(
    totals: &BTreeMap<K, MeasureTotals>,
) -> BTreeMap<K, GroupAverages> {
    totals
        .iter()
        .map(|(key, totals)| {
            let avg_hours = if totals.records == 0 {
                0.0
            } else {
                totals.hours / totals.records as f64
            };
            (
                key.clone(),
                GroupAverages {
                    completion_rate: totals.completion_rate(),
                    avg_engagement: totals.avg_engagement(),
                    avg_hours_per_record: avg_hours,
                },
            )
        })
        .collect()
}

/// Top-N ranking by a descending measure. The sort is stable, so records with
/// an identical measure keep their input order — first seen wins.
pub fn top_n_by<'a, T, MeasureFn>(items: &'a [T], n: usize, measure: MeasureFn) -> Vec<&'a T>
where
    MeasureFn: Fn(&T) -> f64,
{
    let mut ranked: Vec<&T> = items.iter().collect();
    ranked.sort_by(|a, b| {
        measure(b)
            .partial_cmp(&measure(a))
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(n);
    ranked
}

/// Exact median: middle element for odd lengths, mean of the two middle
/// elements for even lengths. Empty input yields `None`, never `NaN`.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}
