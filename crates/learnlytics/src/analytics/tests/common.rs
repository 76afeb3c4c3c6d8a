use chrono::NaiveDate;

use crate::analytics::dataset::Dataset;
use crate::analytics::domain::{ContentType, Provider, Region, Role};
use crate::analytics::records::{
    AnalyticsRecord, DemandSignal, LearningActivity, RecordId, SkillRating,
};

pub(super) fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).expect("valid date")
}

pub(super) fn activity(
    id: &str,
    role: Role,
    skill: &str,
    learners: u32,
    completions: u32,
) -> LearningActivity {
    LearningActivity {
        id: RecordId(id.to_string()),
        date: march(10),
        content_type: ContentType::Course,
        provider: Provider::Coursera,
        region: Region::NorthAmerica,
        roles: vec![role],
        skills: vec![skill.to_string()],
        groups: vec!["Platform Guild".to_string()],
        custom_attributes: vec!["Remote".to_string()],
        learners,
        completions,
        hours: learners as f32 * 1.5,
        active_users: learners,
        engagement_rate: 0.6,
        avg_rating: 4.2,
    }
}

pub(super) fn rating(
    id: &str,
    role: Role,
    skill: &str,
    current: f32,
    target: f32,
) -> SkillRating {
    SkillRating {
        id: RecordId(id.to_string()),
        date: march(15),
        skill: skill.to_string(),
        roles: vec![role],
        region: Region::NorthAmerica,
        groups: vec!["Data Guild".to_string()],
        current_rating: current,
        target_rating: target,
        raters: 12,
    }
}

pub(super) fn demand(id: &str, role: Role, skill: &str, opportunities: u32) -> DemandSignal {
    DemandSignal {
        id: RecordId(id.to_string()),
        date: march(20),
        skill: skill.to_string(),
        roles: vec![role],
        region: Region::Europe,
        opportunities,
    }
}

/// Small fixed scenario shared across the filter and report tests: two
/// Developer activities (Python, SQL) and one Designer activity (Figma).
pub(super) fn scenario_records() -> Vec<AnalyticsRecord> {
    vec![
        AnalyticsRecord::Activity(activity("act-1", Role::Developer, "Python", 10, 8)),
        AnalyticsRecord::Activity(activity("act-2", Role::Developer, "SQL", 5, 5)),
        AnalyticsRecord::Activity(activity("act-3", Role::Designer, "Figma", 20, 12)),
    ]
}

pub(super) fn scenario_dataset() -> Dataset {
    Dataset::new(scenario_records())
}
