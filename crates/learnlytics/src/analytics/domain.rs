use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Job families tracked by the dashboard. Closed set so filtering is typed
/// end to end rather than string-matched.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Developer,
    DataScientist,
    Designer,
    ProductManager,
    QaEngineer,
    EngineeringManager,
}

impl Role {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Developer,
            Self::DataScientist,
            Self::Designer,
            Self::ProductManager,
            Self::QaEngineer,
            Self::EngineeringManager,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Developer => "Developer",
            Self::DataScientist => "Data Scientist",
            Self::Designer => "Designer",
            Self::ProductManager => "Product Manager",
            Self::QaEngineer => "QA Engineer",
            Self::EngineeringManager => "Engineering Manager",
        }
    }

    /// Case/whitespace tolerant lookup used by the CSV importer.
    pub fn from_label(value: &str) -> Option<Self> {
        let normalized = crate::analytics::imports::normalize_label(value);
        Self::ordered()
            .into_iter()
            .find(|role| crate::analytics::imports::normalize_label(role.label()) == normalized)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Course,
    Video,
    Article,
    Assessment,
    LearningPath,
}

impl ContentType {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Course,
            Self::Video,
            Self::Article,
            Self::Assessment,
            Self::LearningPath,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Course => "Course",
            Self::Video => "Video",
            Self::Article => "Article",
            Self::Assessment => "Assessment",
            Self::LearningPath => "Learning Path",
        }
    }

    /// Flagship formats draw systematically more learners than snackable ones.
    pub(crate) const fn volume_bias(self) -> f32 {
        match self {
            Self::Course => 1.4,
            Self::Video => 1.0,
            Self::Article => 0.7,
            Self::Assessment => 0.6,
            Self::LearningPath => 1.2,
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let normalized = crate::analytics::imports::normalize_label(value);
        Self::ordered()
            .into_iter()
            .find(|ct| crate::analytics::imports::normalize_label(ct.label()) == normalized)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Coursera,
    Udemy,
    LinkedinLearning,
    Pluralsight,
    InternalAcademy,
}

impl Provider {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Coursera,
            Self::Udemy,
            Self::LinkedinLearning,
            Self::Pluralsight,
            Self::InternalAcademy,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Coursera => "Coursera",
            Self::Udemy => "Udemy",
            Self::LinkedinLearning => "LinkedIn Learning",
            Self::Pluralsight => "Pluralsight",
            Self::InternalAcademy => "Internal Academy",
        }
    }

    /// Premier catalogs skew higher; the same provider always biases the same
    /// direction so aggregates stay comparable across runs.
    pub(crate) const fn volume_bias(self) -> f32 {
        match self {
            Self::Coursera => 1.3,
            Self::Udemy => 1.1,
            Self::LinkedinLearning => 0.9,
            Self::Pluralsight => 1.0,
            Self::InternalAcademy => 0.8,
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let normalized = crate::analytics::imports::normalize_label(value);
        Self::ordered()
            .into_iter()
            .find(|provider| {
                crate::analytics::imports::normalize_label(provider.label()) == normalized
            })
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    NorthAmerica,
    Europe,
    AsiaPacific,
    LatinAmerica,
}

impl Region {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::NorthAmerica,
            Self::Europe,
            Self::AsiaPacific,
            Self::LatinAmerica,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NorthAmerica => "North America",
            Self::Europe => "Europe",
            Self::AsiaPacific => "Asia Pacific",
            Self::LatinAmerica => "Latin America",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let normalized = crate::analytics::imports::normalize_label(value);
        Self::ordered()
            .into_iter()
            .find(|region| crate::analytics::imports::normalize_label(region.label()) == normalized)
    }
}

/// Severity attached to proficiency decay alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecaySeverity {
    Medium,
    High,
}

impl DecaySeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// One reporting fiscal year, partitioned into 4 quarters of 3 months each.
/// Aligned to the calendar year so period keys derive directly from dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingHorizon {
    pub fiscal_year: i32,
}

impl ReportingHorizon {
    pub const fn new(fiscal_year: i32) -> Self {
        Self { fiscal_year }
    }

    pub fn start(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.fiscal_year, 1, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn end(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.fiscal_year, 12, 31).unwrap_or(NaiveDate::MAX)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.fiscal_year
    }

    /// First day of every month in the horizon, January through December.
    pub fn months(&self) -> Vec<NaiveDate> {
        (1..=12)
            .filter_map(|month| NaiveDate::from_ymd_opt(self.fiscal_year, month, 1))
            .collect()
    }

    /// First day of every quarter in the horizon.
    pub fn quarters(&self) -> Vec<NaiveDate> {
        [1, 4, 7, 10]
            .into_iter()
            .filter_map(|month| NaiveDate::from_ymd_opt(self.fiscal_year, month, 1))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_resolve_back_to_dimension_values() {
        assert_eq!(Role::from_label(" data  scientist "), Some(Role::DataScientist));
        assert_eq!(
            Provider::from_label("LINKEDIN LEARNING"),
            Some(Provider::LinkedinLearning)
        );
        assert_eq!(ContentType::from_label("learning path"), Some(ContentType::LearningPath));
        assert_eq!(Region::from_label("nowhere"), None);
    }

    #[test]
    fn horizon_spans_exactly_one_fiscal_year() {
        let horizon = ReportingHorizon::new(2025);
        assert_eq!(horizon.months().len(), 12);
        assert_eq!(horizon.quarters().len(), 4);
        assert!(horizon.contains(NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")));
        assert!(!horizon.contains(NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date")));
    }
}
