use learnlytics::analytics::{
    Dataset, DatasetConfig, DatasetGenerator, DashboardReport, DateWindow, FilterSelection,
    PeriodGranularity, Role,
};
use chrono::NaiveDate;

fn seeded_dataset() -> Dataset {
    DatasetGenerator::new(DatasetConfig::standard(2025), 42).generate()
}

#[test]
fn full_pipeline_from_generation_to_insights() {
    let dataset = seeded_dataset();
    assert!(dataset.len() > 1000, "standard config generates a full year");

    let selection = FilterSelection::unrestricted()
        .with_role(Role::Developer)
        .with_window(DateWindow::between(
            NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"),
            NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid date"),
        ));

    let report = DashboardReport::build(&dataset, &selection, PeriodGranularity::Quarter);
    let summary = report.summary();

    assert!(summary.matched_records > 0);
    assert!(summary.matched_records < summary.total_records);
    // First half of the year at quarterly granularity: Q1 and Q2 only.
    assert!(summary.activity_by_period.len() <= 2);
    for entry in &summary.activity_by_period {
        assert!(entry.period == "2025-Q1" || entry.period == "2025-Q2");
        assert!(entry.completions <= entry.learners);
    }

    let insights = summary.insights(&report);
    assert!(insights.health_score <= 100);
    assert!(insights.completion_rate.is_finite());
    assert!(!insights.observations.is_empty());
}

#[test]
fn narrowing_a_selection_is_monotone_over_the_generated_universe() {
    let dataset = seeded_dataset();

    let mut selection = FilterSelection::unrestricted();
    let mut previous = dataset.filter(&selection).len();
    assert_eq!(previous, dataset.len());

    selection = selection.with_role(Role::DataScientist);
    let after_role = dataset.filter(&selection).len();
    assert!(after_role <= previous);
    previous = after_role;

    selection = selection.with_skill("Machine Learning");
    let after_skill = dataset.filter(&selection).len();
    assert!(after_skill <= previous);
    previous = after_skill;

    selection = selection.with_window(DateWindow::between(
        NaiveDate::from_ymd_opt(2025, 7, 1).expect("valid date"),
        NaiveDate::from_ymd_opt(2025, 9, 30).expect("valid date"),
    ));
    let after_window = dataset.filter(&selection).len();
    assert!(after_window <= previous);
}

#[test]
fn reports_are_pure_functions_of_their_inputs() {
    let dataset = seeded_dataset();
    let selection = FilterSelection::unrestricted().with_role(Role::Designer);

    let first = DashboardReport::build(&dataset, &selection, PeriodGranularity::Month).summary();
    let second = DashboardReport::build(&dataset, &selection, PeriodGranularity::Month).summary();

    let a = serde_json::to_value(&first).expect("first summary serializes");
    let b = serde_json::to_value(&second).expect("second summary serializes");
    assert_eq!(a, b);
}
