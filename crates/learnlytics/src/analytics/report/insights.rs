use super::summary::DashboardReport;
use super::views::{DashboardSummary, HealthLevel, LearningInsights};
use crate::analytics::aggregate::median;
use crate::analytics::domain::DecaySeverity;
use crate::analytics::metrics::engagement_score;

pub(crate) fn generate_insights(
    summary: &DashboardSummary,
    report: &DashboardReport,
) -> LearningInsights {
    let overall = report.overall_totals();
    let completion_rate = overall.completion_rate();
    let engagement = engagement_score(overall);

    let gap_values: Vec<f64> = report
        .gaps()
        .iter()
        .map(|gap| f64::from(gap.gap_points))
        .collect();
    let median_gap_points = median(&gap_values).unwrap_or(0.0);

    // Each median gap point above 10 drags the blended score down half a
    // point, so widespread proficiency shortfalls surface in the headline.
    let gap_drag = ((median_gap_points - 10.0).max(0.0) * 0.5) as f32;
    let health_score = (engagement - gap_drag).clamp(0.0, 100.0).round() as u8;

    let high_alerts = summary
        .decay_alerts
        .iter()
        .filter(|alert| alert.severity == DecaySeverity::High)
        .count();

    let health_level = if health_score >= 75 && high_alerts == 0 {
        HealthLevel::Thriving
    } else if health_score >= 50 {
        HealthLevel::Steady
    } else {
        HealthLevel::NeedsAttention
    };

    let focus_gap = summary.critical_gaps.first();
    let focus_skill = focus_gap.map(|gap| gap.skill.clone());
    let focus_skill_gap_points = focus_gap.map(|gap| gap.gap_points);

    let mut observations = Vec::new();
    if summary.matched_records > 0 {
        observations.push(format!(
            "{} of {} records in scope after filtering",
            summary.matched_records, summary.total_records
        ));
    }

    if overall.learners > 0 {
        observations.push(format!(
            "{} learners with {:.0}% completion across the selected window",
            overall.learners,
            completion_rate * 100.0
        ));
    }

    if high_alerts > 0 {
        observations.push(format!(
            "{} high-severity proficiency decay alert(s) need review",
            high_alerts
        ));
    }

    if let (Some(skill), Some(points)) = (&focus_skill, focus_skill_gap_points) {
        if points > 0 {
            observations.push(format!(
                "Widest critical gap is {} at {} points behind target",
                skill, points
            ));
        }
    }

    let mut recommended_actions = Vec::new();
    if let Some(gap) = focus_gap {
        if gap.gap_points > 0 {
            recommended_actions.push(format!(
                "Commission a {} learning path for {}s ({} point gap)",
                gap.skill, gap.role_label, gap.gap_points
            ));
        }
    }

    if completion_rate < 0.6 && overall.learners > 0 {
        recommended_actions.push(
            "Completion is trailing enrollment; shorten assignments or add nudges".to_string(),
        );
    }

    if high_alerts > 0 {
        recommended_actions.push(
            "Schedule refresher assessments for skills with high-severity decay".to_string(),
        );
    }

    if let Some(top_skill) = summary.top_skills.first() {
        recommended_actions.push(format!(
            "Double down on {} content; it leads current demand",
            top_skill.skill
        ));
    }

    if observations.is_empty() {
        observations.push("No activity matches the current selection".to_string());
    }

    LearningInsights {
        health_score,
        health_level,
        completion_rate,
        engagement_score: engagement,
        median_gap_points,
        focus_skill,
        focus_skill_gap_points,
        observations,
        recommended_actions,
    }
}
