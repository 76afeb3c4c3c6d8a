//! Hydrates the engine from an LMS activity export instead of synthetic data.

use super::domain::{ContentType, Provider, Region, Role};
use super::records::{LearningActivity, RecordId};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read activity export: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: unknown {dimension} label '{value}'")]
    UnknownLabel {
        row: usize,
        dimension: &'static str,
        value: String,
    },
    #[error("row {row}: unparseable date '{value}'")]
    InvalidDate { row: usize, value: String },
    #[error("row {row}: at least one role is required")]
    MissingRoles { row: usize },
    #[error("row {row}: at least one skill is required")]
    MissingSkills { row: usize },
}

/// Collapse whitespace, strip BOM/zero-width characters, lowercase. Export
/// tools disagree on spacing and casing; dimension matching must not.
pub(crate) fn normalize_label(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_lowercase()
}

/// Parses an LMS export into activity records. Rows referencing dimension
/// labels outside the catalog are rejected with row context; completions are
/// clamped to learners so the completion bound holds for imported data too.
pub fn import_activities<R: Read>(reader: R) -> Result<Vec<LearningActivity>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut activities = Vec::new();

    for (index, record) in csv_reader.deserialize::<ActivityRow>().enumerate() {
        let row_number = index + 1;
        let row = record?;
        activities.push(row.into_activity(row_number)?);
    }

    Ok(activities)
}

#[derive(Debug, Deserialize)]
struct ActivityRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Content Type")]
    content_type: String,
    #[serde(rename = "Provider")]
    provider: String,
    #[serde(rename = "Region")]
    region: String,
    #[serde(rename = "Roles")]
    roles: String,
    #[serde(rename = "Skills")]
    skills: String,
    #[serde(rename = "Groups", default, deserialize_with = "empty_string_as_none")]
    groups: Option<String>,
    #[serde(
        rename = "Attributes",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    attributes: Option<String>,
    #[serde(rename = "Learners")]
    learners: u32,
    #[serde(rename = "Completions")]
    completions: u32,
    #[serde(rename = "Hours", default)]
    hours: f32,
    #[serde(rename = "Active Users", default)]
    active_users: u32,
    #[serde(rename = "Engagement Rate", default)]
    engagement_rate: f32,
    #[serde(rename = "Avg Rating", default)]
    avg_rating: f32,
}

impl ActivityRow {
    fn into_activity(self, row: usize) -> Result<LearningActivity, ImportError> {
        let date = parse_date(&self.date).ok_or_else(|| ImportError::InvalidDate {
            row,
            value: self.date.clone(),
        })?;

        let content_type = ContentType::from_label(&self.content_type).ok_or_else(|| {
            ImportError::UnknownLabel {
                row,
                dimension: "content type",
                value: self.content_type.clone(),
            }
        })?;
        let provider =
            Provider::from_label(&self.provider).ok_or_else(|| ImportError::UnknownLabel {
                row,
                dimension: "provider",
                value: self.provider.clone(),
            })?;
        let region = Region::from_label(&self.region).ok_or_else(|| ImportError::UnknownLabel {
            row,
            dimension: "region",
            value: self.region.clone(),
        })?;

        let mut roles = Vec::new();
        for raw in split_list(&self.roles) {
            let role = Role::from_label(&raw).ok_or_else(|| ImportError::UnknownLabel {
                row,
                dimension: "role",
                value: raw.clone(),
            })?;
            if !roles.contains(&role) {
                roles.push(role);
            }
        }
        if roles.is_empty() {
            return Err(ImportError::MissingRoles { row });
        }

        let skills = split_list(&self.skills);
        if skills.is_empty() {
            return Err(ImportError::MissingSkills { row });
        }

        // A zero-learner row is a legitimate "no uptake yet" signal; only the
        // upper bound is enforced so completions never exceed learners.
        let learners = self.learners;
        let completions = self.completions.min(learners);
        let active_users = if self.active_users == 0 {
            learners
        } else {
            self.active_users
        };

        Ok(LearningActivity {
            id: RecordId(format!("import-{row:05}")),
            date,
            content_type,
            provider,
            region,
            roles,
            skills,
            groups: self.groups.as_deref().map(split_list).unwrap_or_default(),
            custom_attributes: self
                .attributes
                .as_deref()
                .map(split_list)
                .unwrap_or_default(),
            learners,
            completions,
            hours: self.hours.max(0.0),
            active_users,
            engagement_rate: self.engagement_rate.clamp(0.0, 1.0),
            avg_rating: self.avg_rating.clamp(0.0, 5.0),
        })
    }
}

/// Semicolon-separated multi-value cell.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc().date());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}
