use crate::analytics::domain::{DecaySeverity, Role};
use crate::analytics::metrics::{DecayAlert, SkillGap};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PeriodActivityEntry {
    pub period: String,
    pub records: usize,
    pub learners: u64,
    pub completions: u64,
    pub hours: f64,
    pub active_users: u64,
    pub completion_rate: f64,
    pub avg_engagement: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleLoadEntry {
    pub role: Role,
    pub role_label: &'static str,
    pub records: usize,
    pub learners: u64,
    pub completions: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillVolumeEntry {
    pub skill: String,
    pub learners: u64,
    pub completions: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGapView {
    pub role: Role,
    pub role_label: &'static str,
    pub skill: String,
    pub avg_current: f32,
    pub avg_target: f32,
    pub gap_points: u8,
}

impl SkillGapView {
    pub(crate) fn from_gap(gap: &SkillGap) -> Self {
        Self {
            role: gap.role,
            role_label: gap.role.label(),
            skill: gap.skill.clone(),
            avg_current: gap.avg_current,
            avg_target: gap.avg_target,
            gap_points: gap.gap_points,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DecayAlertView {
    pub skill: String,
    pub role_labels: Vec<&'static str>,
    pub gap: f32,
    pub severity: DecaySeverity,
    pub severity_label: &'static str,
}

impl DecayAlertView {
    pub(crate) fn from_alert(alert: &DecayAlert) -> Self {
        Self {
            skill: alert.skill.clone(),
            role_labels: alert.roles.iter().map(|role| role.label()).collect(),
            gap: alert.gap,
            severity: alert.severity,
            severity_label: alert.severity_label,
        }
    }
}

/// Chart-ready rollup of one filtered dataset slice.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub granularity_label: &'static str,
    pub matched_records: usize,
    pub total_records: usize,
    pub activity_by_period: Vec<PeriodActivityEntry>,
    pub role_load: Vec<RoleLoadEntry>,
    pub top_skills: Vec<SkillVolumeEntry>,
    pub critical_gaps: Vec<SkillGapView>,
    pub decay_alerts: Vec<DecayAlertView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthLevel {
    Thriving,
    Steady,
    NeedsAttention,
}

impl HealthLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Thriving => "Thriving",
            Self::Steady => "Steady",
            Self::NeedsAttention => "Needs Attention",
        }
    }
}

/// Narrative layer derived from the summary for the dashboard header.
#[derive(Debug, Clone, Serialize)]
pub struct LearningInsights {
    pub health_score: u8,
    pub health_level: HealthLevel,
    pub completion_rate: f64,
    pub engagement_score: f32,
    pub median_gap_points: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_skill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_skill_gap_points: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub observations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_actions: Vec<String>,
}
