use super::domain::{ContentType, Provider, Region, Role};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for analytic records; assigned at creation, never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

/// The filter-dimension contract shared by every record kind. The predicate
/// evaluator is written once against this trait instead of per entity.
///
/// A dimension a record kind does not carry (empty slice or `None`) is
/// treated as unconstrained for that record, never as "matches nothing".
pub trait FilterDimensions {
    fn date(&self) -> NaiveDate;
    fn roles(&self) -> &[Role];
    fn skills(&self) -> &[String];
    fn region(&self) -> Region;

    fn groups(&self) -> &[String] {
        &[]
    }

    fn custom_attributes(&self) -> &[String] {
        &[]
    }

    fn content_type(&self) -> Option<ContentType> {
        None
    }

    fn provider(&self) -> Option<Provider> {
        None
    }

    /// Whole-star rating band, for selections expressed as sets of numbers.
    fn rating_level(&self) -> Option<u8> {
        None
    }
}

/// Consumption of one piece of learning content over one reporting month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningActivity {
    pub id: RecordId,
    pub date: NaiveDate,
    pub content_type: ContentType,
    pub provider: Provider,
    pub region: Region,
    pub roles: Vec<Role>,
    pub skills: Vec<String>,
    pub groups: Vec<String>,
    pub custom_attributes: Vec<String>,
    pub learners: u32,
    pub completions: u32,
    pub hours: f32,
    pub active_users: u32,
    pub engagement_rate: f32,
    pub avg_rating: f32,
}

impl FilterDimensions for LearningActivity {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn roles(&self) -> &[Role] {
        &self.roles
    }

    fn skills(&self) -> &[String] {
        &self.skills
    }

    fn region(&self) -> Region {
        self.region
    }

    fn groups(&self) -> &[String] {
        &self.groups
    }

    fn custom_attributes(&self) -> &[String] {
        &self.custom_attributes
    }

    fn content_type(&self) -> Option<ContentType> {
        Some(self.content_type)
    }

    fn provider(&self) -> Option<Provider> {
        Some(self.provider)
    }

    fn rating_level(&self) -> Option<u8> {
        Some(self.avg_rating.round().clamp(0.0, 5.0) as u8)
    }
}

/// Proficiency snapshot for one skill within one reporting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRating {
    pub id: RecordId,
    pub date: NaiveDate,
    pub skill: String,
    pub roles: Vec<Role>,
    pub region: Region,
    pub groups: Vec<String>,
    pub current_rating: f32,
    pub target_rating: f32,
    pub raters: u32,
}

impl SkillRating {
    /// Raw proficiency shortfall; negative shortfalls read as "at target".
    pub fn gap(&self) -> f32 {
        (self.target_rating - self.current_rating).max(0.0)
    }
}

impl FilterDimensions for SkillRating {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn roles(&self) -> &[Role] {
        &self.roles
    }

    fn skills(&self) -> &[String] {
        std::slice::from_ref(&self.skill)
    }

    fn region(&self) -> Region {
        self.region
    }

    fn groups(&self) -> &[String] {
        &self.groups
    }

    fn rating_level(&self) -> Option<u8> {
        Some(self.current_rating.round().clamp(0.0, 5.0) as u8)
    }
}

/// Community interest signal for a skill: mentions plus peer endorsements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingTopic {
    pub id: RecordId,
    pub date: NaiveDate,
    pub topic: String,
    pub roles: Vec<Role>,
    pub region: Region,
    pub mentions: u32,
    pub endorsements: u32,
    pub growth_rate: f32,
}

impl FilterDimensions for TrendingTopic {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn roles(&self) -> &[Role] {
        &self.roles
    }

    fn skills(&self) -> &[String] {
        std::slice::from_ref(&self.topic)
    }

    fn region(&self) -> Region {
        self.region
    }
}

/// Internal-mobility demand: open opportunities asking for a skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandSignal {
    pub id: RecordId,
    pub date: NaiveDate,
    pub skill: String,
    pub roles: Vec<Role>,
    pub region: Region,
    pub opportunities: u32,
}

impl FilterDimensions for DemandSignal {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn roles(&self) -> &[Role] {
        &self.roles
    }

    fn skills(&self) -> &[String] {
        std::slice::from_ref(&self.skill)
    }

    fn region(&self) -> Region {
        self.region
    }
}

/// Closed, tagged union of every analytic entity kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalyticsRecord {
    Activity(LearningActivity),
    Rating(SkillRating),
    Topic(TrendingTopic),
    Demand(DemandSignal),
}

impl AnalyticsRecord {
    pub fn id(&self) -> &RecordId {
        match self {
            Self::Activity(record) => &record.id,
            Self::Rating(record) => &record.id,
            Self::Topic(record) => &record.id,
            Self::Demand(record) => &record.id,
        }
    }

    pub fn as_activity(&self) -> Option<&LearningActivity> {
        match self {
            Self::Activity(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_rating(&self) -> Option<&SkillRating> {
        match self {
            Self::Rating(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_topic(&self) -> Option<&TrendingTopic> {
        match self {
            Self::Topic(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_demand(&self) -> Option<&DemandSignal> {
        match self {
            Self::Demand(record) => Some(record),
            _ => None,
        }
    }
}

impl FilterDimensions for AnalyticsRecord {
    fn date(&self) -> NaiveDate {
        match self {
            Self::Activity(record) => record.date(),
            Self::Rating(record) => record.date(),
            Self::Topic(record) => record.date(),
            Self::Demand(record) => record.date(),
        }
    }

    fn roles(&self) -> &[Role] {
        match self {
            Self::Activity(record) => record.roles(),
            Self::Rating(record) => record.roles(),
            Self::Topic(record) => record.roles(),
            Self::Demand(record) => record.roles(),
        }
    }

    fn skills(&self) -> &[String] {
        match self {
            Self::Activity(record) => record.skills(),
            Self::Rating(record) => record.skills(),
            Self::Topic(record) => record.skills(),
            Self::Demand(record) => record.skills(),
        }
    }

    fn region(&self) -> Region {
        match self {
            Self::Activity(record) => record.region(),
            Self::Rating(record) => record.region(),
            Self::Topic(record) => record.region(),
            Self::Demand(record) => record.region(),
        }
    }

    fn groups(&self) -> &[String] {
        match self {
            Self::Activity(record) => record.groups(),
            Self::Rating(record) => record.groups(),
            Self::Topic(record) => record.groups(),
            Self::Demand(record) => record.groups(),
        }
    }

    fn custom_attributes(&self) -> &[String] {
        match self {
            Self::Activity(record) => record.custom_attributes(),
            Self::Rating(record) => record.custom_attributes(),
            Self::Topic(record) => record.custom_attributes(),
            Self::Demand(record) => record.custom_attributes(),
        }
    }

    fn content_type(&self) -> Option<ContentType> {
        match self {
            Self::Activity(record) => record.content_type(),
            Self::Rating(record) => record.content_type(),
            Self::Topic(record) => record.content_type(),
            Self::Demand(record) => record.content_type(),
        }
    }

    fn provider(&self) -> Option<Provider> {
        match self {
            Self::Activity(record) => record.provider(),
            Self::Rating(record) => record.provider(),
            Self::Topic(record) => record.provider(),
            Self::Demand(record) => record.provider(),
        }
    }

    fn rating_level(&self) -> Option<u8> {
        match self {
            Self::Activity(record) => record.rating_level(),
            Self::Rating(record) => record.rating_level(),
            Self::Topic(record) => record.rating_level(),
            Self::Demand(record) => record.rating_level(),
        }
    }
}
