use super::common::*;
use crate::analytics::domain::{DecaySeverity, Role};
use crate::analytics::metrics::{
    decay_alerts, endorsement_ratio, engagement_score, focus_ratio, ratio, skill_gaps,
    top_gaps_by_role,
};
use crate::analytics::aggregate::MeasureTotals;

#[test]
fn gaps_are_never_negative() {
    let ratings = vec![rating("r1", Role::Developer, "Python", 4.5, 4.0)];

    let gaps = skill_gaps(ratings.iter());

    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].gap_points, 0);
}

#[test]
fn gap_uses_averaged_ratings_not_averaged_gaps() {
    // (2.0 -> 3.0) and (4.0 -> 3.0): averaging per-record gaps would give 10
    // points; averaging ratings first gives current 3.0 / target 3.0 = 0.
    let ratings = vec![
        rating("r1", Role::Developer, "Python", 2.0, 3.0),
        rating("r2", Role::Developer, "Python", 4.0, 3.0),
    ];

    let gaps = skill_gaps(ratings.iter());

    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].gap_points, 0);
}

#[test]
fn gap_points_scale_ratings_to_the_point_scale() {
    let ratings = vec![rating("r1", Role::Designer, "Figma", 3.0, 4.0)];

    let gaps = skill_gaps(ratings.iter());

    assert_eq!(gaps[0].gap_points, 20);
}

#[test]
fn multi_role_ratings_contribute_to_each_role() {
    let mut shared = rating("r1", Role::Developer, "Kubernetes", 3.0, 4.5);
    shared.roles.push(Role::QaEngineer);

    let gaps = skill_gaps(std::iter::once(&shared));

    assert_eq!(gaps.len(), 2);
    assert!(gaps.iter().any(|gap| gap.role == Role::Developer));
    assert!(gaps.iter().any(|gap| gap.role == Role::QaEngineer));
}

#[test]
fn top_gaps_keep_one_representative_per_role() {
    let ratings = vec![
        rating("r1", Role::Developer, "Python", 3.0, 4.0),
        rating("r2", Role::Developer, "Rust", 2.0, 4.5),
        rating("r3", Role::Designer, "Figma", 3.5, 4.0),
    ];

    let ranked = top_gaps_by_role(&skill_gaps(ratings.iter()));

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].role, Role::Developer);
    assert_eq!(ranked[0].skill, "Rust");
    assert_eq!(ranked[1].role, Role::Designer);
}

#[test]
fn decay_alert_thresholds_are_exclusive_at_both_boundaries() {
    // Exactly representable shortfalls so no float drift at the boundaries:
    // 0.75 below threshold, 1.0 and 1.5 medium, 1.75 high.
    let ratings = vec![
        rating("ok", Role::Developer, "Python", 3.0, 3.75),
        rating("medium", Role::Developer, "SQL", 3.0, 4.0),
        rating("edge", Role::Developer, "Rust", 3.0, 4.5),
        rating("high", Role::Developer, "Kubernetes", 3.0, 4.75),
    ];

    let alerts = decay_alerts(ratings.iter());

    assert_eq!(alerts.len(), 3);
    assert!(!alerts.iter().any(|alert| alert.record_id.0 == "ok"));

    let medium = alerts
        .iter()
        .find(|alert| alert.record_id.0 == "medium")
        .expect("medium alert present");
    assert_eq!(medium.severity, DecaySeverity::Medium);

    // A shortfall of exactly 1.5 is still medium; escalation requires more.
    let edge = alerts
        .iter()
        .find(|alert| alert.record_id.0 == "edge")
        .expect("edge alert present");
    assert_eq!(edge.severity, DecaySeverity::Medium);

    let high = alerts
        .iter()
        .find(|alert| alert.record_id.0 == "high")
        .expect("high alert present");
    assert_eq!(high.severity, DecaySeverity::High);
}

#[test]
fn ratios_fall_back_to_zero_instead_of_nan() {
    assert_eq!(ratio(0, 0), 0.0);
    assert_eq!(focus_ratio(std::iter::empty(), "Python"), 0.0);
    assert_eq!(endorsement_ratio(std::iter::empty()), 0.0);
    assert_eq!(engagement_score(&MeasureTotals::default()), 0.0);
}

#[test]
fn focus_ratio_counts_matching_share() {
    let activities = vec![
        activity("a", Role::Developer, "Python", 10, 8),
        activity("b", Role::Developer, "SQL", 5, 5),
        activity("c", Role::Developer, "Python", 7, 4),
        activity("d", Role::Developer, "Rust", 3, 2),
    ];

    assert_eq!(focus_ratio(activities.iter(), "Python"), 0.5);
}

#[test]
fn engagement_score_stays_on_the_percent_scale() {
    let mut totals = MeasureTotals::default();
    totals.absorb(&activity("a", Role::Developer, "Python", 100, 95));

    let score = engagement_score(&totals);
    assert!(score > 0.0 && score <= 100.0);
}
