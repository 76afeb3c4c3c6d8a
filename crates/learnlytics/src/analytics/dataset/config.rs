use crate::analytics::domain::{ContentType, Provider, Region, ReportingHorizon, Role};

/// Everything the generator needs to know about the record universe: the
/// legal value catalog per dimension, the reporting horizon, and the tuning
/// constants for synthetic volume. The boost/top-N pair was tuned for demo
/// plausibility, so both are plain fields rather than hard-coded.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetConfig {
    pub fiscal_year: i32,
    pub roles: Vec<Role>,
    pub content_types: Vec<ContentType>,
    pub providers: Vec<Provider>,
    pub regions: Vec<Region>,
    pub skills: Vec<&'static str>,
    pub groups: Vec<&'static str>,
    pub custom_attributes: Vec<&'static str>,
    /// Base uniform range for learner counts before category biasing.
    pub learners_range: (u32, u32),
    /// Curated multi-role cohorts for the secondary matrix.
    pub multi_role_groupings: Vec<Vec<Role>>,
    /// Engagement multiplier applied to secondary-matrix records.
    pub secondary_boost: f32,
    /// How many of the leading content types/providers the secondary matrix
    /// cross-products over.
    pub secondary_top_n: usize,
}

impl DatasetConfig {
    /// Full catalog for one fiscal year; the configuration every dashboard
    /// deployment starts from.
    pub fn standard(fiscal_year: i32) -> Self {
        Self {
            fiscal_year,
            roles: Role::ordered().to_vec(),
            content_types: ContentType::ordered().to_vec(),
            providers: Provider::ordered().to_vec(),
            regions: Region::ordered().to_vec(),
            skills: vec![
                "Python",
                "SQL",
                "Rust",
                "Machine Learning",
                "Cloud Architecture",
                "Kubernetes",
                "Figma",
                "Data Visualization",
                "Leadership",
                "Communication",
            ],
            groups: vec![
                "Platform Guild",
                "Data Guild",
                "Design Chapter",
                "Leadership Circle",
                "New Hires",
            ],
            custom_attributes: vec!["Remote", "On-site", "Hybrid", "Contractor"],
            learners_range: (40, 220),
            multi_role_groupings: vec![
                vec![Role::Developer, Role::DataScientist],
                vec![Role::Designer, Role::ProductManager],
                vec![Role::EngineeringManager, Role::Developer],
                vec![Role::QaEngineer, Role::Developer, Role::EngineeringManager],
            ],
            secondary_boost: 1.5,
            secondary_top_n: 2,
        }
    }

    pub fn horizon(&self) -> ReportingHorizon {
        ReportingHorizon::new(self.fiscal_year)
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self::standard(2025)
    }
}
