use super::domain::{DecaySeverity, Role};
use super::records::{LearningActivity, RecordId, SkillRating, TrendingTopic};
use serde::Serialize;
use std::collections::BTreeMap;

/// Ratings sit on a 1–5 scale; gaps are reported as 0–100 point differences.
pub const GAP_POINT_SCALE: f32 = 20.0;

/// Raw rating shortfall above which a proficiency decay alert is raised.
pub const DECAY_ALERT_MIN_GAP: f32 = 0.8;

/// Raw rating shortfall above which a decay alert escalates to high severity.
pub const DECAY_HIGH_SEVERITY_GAP: f32 = 1.5;

/// Proficiency shortfall for one (role, skill) pair, on the point scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGap {
    pub role: Role,
    pub skill: String,
    pub avg_current: f32,
    pub avg_target: f32,
    pub gap_points: u8,
}

#[derive(Default)]
struct RatingAccumulator {
    current_sum: f64,
    target_sum: f64,
    count: usize,
}

/// Gap per (role, skill) pair. When several records share a pair, the gap is
/// computed from the *averaged* current/target ratings, not averaged per-record
/// gaps, so variance is not double-counted. Output is ordered by role then
/// skill, which keeps downstream rankings deterministic.
pub fn skill_gaps<'a>(ratings: impl IntoIterator<Item = &'a SkillRating>) -> Vec<SkillGap> {
    let mut accumulators: BTreeMap<(Role, String), RatingAccumulator> = BTreeMap::new();
    for rating in ratings {
        for role in &rating.roles {
            let entry = accumulators
                .entry((*role, rating.skill.clone()))
                .or_default();
            entry.current_sum += f64::from(rating.current_rating);
            entry.target_sum += f64::from(rating.target_rating);
            entry.count += 1;
        }
    }

    accumulators
        .into_iter()
        .filter(|(_, accumulator)| accumulator.count > 0)
        .map(|((role, skill), accumulator)| {
            let avg_current = (accumulator.current_sum / accumulator.count as f64) as f32;
            let avg_target = (accumulator.target_sum / accumulator.count as f64) as f32;
            let gap_points = (GAP_POINT_SCALE * (avg_target - avg_current).max(0.0)).round() as u8;
            SkillGap {
                role,
                skill,
                avg_current,
                avg_target,
                gap_points,
            }
        })
        .collect()
}

/// Picks the single largest gap per role, then ranks those role
/// representatives globally. Guarantees role diversity in any "critical gaps"
/// view instead of letting one role dominate. Ties keep first-seen order.
pub fn top_gaps_by_role(gaps: &[SkillGap]) -> Vec<SkillGap> {
    let mut per_role: Vec<SkillGap> = Vec::new();
    for gap in gaps {
        match per_role.iter_mut().find(|entry| entry.role == gap.role) {
            Some(entry) => {
                if gap.gap_points > entry.gap_points {
                    *entry = gap.clone();
                }
            }
            None => per_role.push(gap.clone()),
        }
    }

    per_role.sort_by(|a, b| b.gap_points.cmp(&a.gap_points));
    per_role
}

/// A skill whose measured proficiency has fallen materially behind target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecayAlert {
    pub record_id: RecordId,
    pub skill: String,
    pub roles: Vec<Role>,
    pub gap: f32,
    pub severity: DecaySeverity,
    pub severity_label: &'static str,
}

/// Flags individual rating records whose raw shortfall exceeds
/// [`DECAY_ALERT_MIN_GAP`]. Severity escalates above
/// [`DECAY_HIGH_SEVERITY_GAP`]; both thresholds are exclusive.
pub fn decay_alerts<'a>(ratings: impl IntoIterator<Item = &'a SkillRating>) -> Vec<DecayAlert> {
    ratings
        .into_iter()
        .filter_map(|rating| {
            let gap = rating.target_rating - rating.current_rating;
            if gap <= DECAY_ALERT_MIN_GAP {
                return None;
            }
            let severity = if gap > DECAY_HIGH_SEVERITY_GAP {
                DecaySeverity::High
            } else {
                DecaySeverity::Medium
            };
            Some(DecayAlert {
                record_id: rating.id.clone(),
                skill: rating.skill.clone(),
                roles: rating.roles.clone(),
                gap,
                severity,
                severity_label: severity.label(),
            })
        })
        .collect()
}

/// `matching / total`, guarded: an empty scope yields 0 rather than NaN.
pub fn ratio(matching: usize, total: usize) -> f32 {
    if total == 0 {
        0.0
    } else {
        matching as f32 / total as f32
    }
}

/// Share of activities in scope that touch the given skill.
pub fn focus_ratio<'a>(
    activities: impl IntoIterator<Item = &'a LearningActivity>,
    skill: &str,
) -> f32 {
    let mut total = 0;
    let mut matching = 0;
    for activity in activities {
        total += 1;
        if activity.skills.iter().any(|candidate| candidate == skill) {
            matching += 1;
        }
    }
    ratio(matching, total)
}

/// Endorsements as a share of mentions across trending topics.
pub fn endorsement_ratio<'a>(topics: impl IntoIterator<Item = &'a TrendingTopic>) -> f32 {
    let mut mentions: u64 = 0;
    let mut endorsements: u64 = 0;
    for topic in topics {
        mentions += u64::from(topic.mentions);
        endorsements += u64::from(topic.endorsements);
    }
    if mentions == 0 {
        0.0
    } else {
        endorsements as f32 / mentions as f32
    }
}

/// Blended 0–100 engagement score: completion weight 45%, session engagement
/// 35%, re-engagement 20%. Clamped so outlier inputs cannot push it off scale.
pub fn engagement_score(totals: &super::aggregate::MeasureTotals) -> f32 {
    let blended = 0.45 * totals.completion_rate()
        + 0.35 * totals.avg_engagement()
        + 0.20 * totals.active_ratio().min(1.0);
    (blended * 100.0).clamp(0.0, 100.0) as f32
}
