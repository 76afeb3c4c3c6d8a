use super::domain::{ContentType, Provider, Region, Role};
use super::records::{AnalyticsRecord, FilterDimensions};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Optional date interval. Both bounds absent is the explicit "all time" mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

impl DateWindow {
    pub fn all_time() -> Self {
        Self::default()
    }

    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// A window with `from > to` is malformed; it matches nothing rather than
    /// erroring so interactive callers stay responsive mid-edit.
    pub fn is_inverted(&self) -> bool {
        matches!((self.from, self.to), (Some(from), Some(to)) if from > to)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        if self.is_inverted() {
            return false;
        }
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }
}

/// The user's active choice per dimension. An empty set means "no
/// restriction, match all" — never "match nothing". Pure value type; compared
/// by structural equality so callers can memoize on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub roles: BTreeSet<Role>,
    #[serde(default)]
    pub content_types: BTreeSet<ContentType>,
    #[serde(default)]
    pub providers: BTreeSet<Provider>,
    #[serde(default)]
    pub regions: BTreeSet<Region>,
    #[serde(default)]
    pub skills: BTreeSet<String>,
    #[serde(default)]
    pub groups: BTreeSet<String>,
    #[serde(default)]
    pub custom_attributes: BTreeSet<String>,
    #[serde(default)]
    pub rating_levels: BTreeSet<u8>,
    #[serde(default)]
    pub window: DateWindow,
}

impl FilterSelection {
    /// All dimensions unrestricted; filtering with this is the identity.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn is_unrestricted(&self) -> bool {
        *self == Self::default()
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.insert(role);
        self
    }

    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.insert(skill.into());
        self
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.regions.insert(region);
        self
    }

    pub fn with_window(mut self, window: DateWindow) -> Self {
        self.window = window;
        self
    }
}

/// Multi-valued axis: passes when the selection is empty, the axis does not
/// apply to this record kind, or any record value is selected.
fn intersects<T: Ord>(selection: &BTreeSet<T>, values: &[T]) -> bool {
    selection.is_empty() || values.is_empty() || values.iter().any(|value| selection.contains(value))
}

/// Single-valued axis the record may not carry.
fn single_matches<T: Ord>(selection: &BTreeSet<T>, value: Option<T>) -> bool {
    match value {
        _ if selection.is_empty() => true,
        Some(value) => selection.contains(&value),
        None => true,
    }
}

/// Decides whether one record satisfies one selection: logical AND across all
/// dimensions, short-circuiting on the first failing axis.
pub fn matches<R: FilterDimensions + ?Sized>(record: &R, selection: &FilterSelection) -> bool {
    if !selection.window.contains(record.date()) {
        return false;
    }
    if !intersects(&selection.roles, record.roles()) {
        return false;
    }
    if !selection.regions.is_empty() && !selection.regions.contains(&record.region()) {
        return false;
    }
    if !single_matches(&selection.content_types, record.content_type()) {
        return false;
    }
    if !single_matches(&selection.providers, record.provider()) {
        return false;
    }
    if !intersects(&selection.skills, record.skills()) {
        return false;
    }
    if !intersects(&selection.groups, record.groups()) {
        return false;
    }
    if !intersects(&selection.custom_attributes, record.custom_attributes()) {
        return false;
    }
    if !single_matches(&selection.rating_levels, record.rating_level()) {
        return false;
    }
    true
}

/// Narrows a record set, preserving input order.
pub fn filter_records<'a>(
    records: &'a [AnalyticsRecord],
    selection: &FilterSelection,
) -> Vec<&'a AnalyticsRecord> {
    records
        .iter()
        .filter(|record| matches(*record, selection))
        .collect()
}
