use chrono::{Datelike, Local, NaiveDate};
use clap::Args;
use learnlytics::analytics::report::views::{DashboardSummary, LearningInsights};
use learnlytics::analytics::{
    DashboardReport, Dataset, DateWindow, FilterSelection, PeriodGranularity, Region, Role,
};
use learnlytics::error::AppError;

use crate::infra::seeded_dataset;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed for the synthetic dataset (defaults to 42)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Fiscal year covered by the dataset (defaults to the current year)
    #[arg(long)]
    pub(crate) fiscal_year: Option<i32>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DashboardReportArgs {
    /// Seed for the synthetic dataset (defaults to 42)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Fiscal year covered by the dataset (defaults to the current year)
    #[arg(long)]
    pub(crate) fiscal_year: Option<i32>,
    /// Restrict to a role label, e.g. "Developer"
    #[arg(long, value_parser = parse_role)]
    pub(crate) role: Option<Role>,
    /// Restrict to a skill, e.g. "Python"
    #[arg(long)]
    pub(crate) skill: Option<String>,
    /// Restrict to a region label, e.g. "North America"
    #[arg(long, value_parser = parse_region)]
    pub(crate) region: Option<Region>,
    /// Start of the reporting window (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) from: Option<NaiveDate>,
    /// End of the reporting window (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) to: Option<NaiveDate>,
    /// Bucket width for the activity timeline
    #[arg(long, value_enum, default_value = "month")]
    pub(crate) granularity: GranularityArg,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum GranularityArg {
    #[default]
    Month,
    Quarter,
    Year,
}

impl From<GranularityArg> for PeriodGranularity {
    fn from(value: GranularityArg) -> Self {
        match value {
            GranularityArg::Month => PeriodGranularity::Month,
            GranularityArg::Quarter => PeriodGranularity::Quarter,
            GranularityArg::Year => PeriodGranularity::Year,
        }
    }
}

const DEFAULT_SEED: u64 = 42;

pub(crate) fn run_dashboard_report(args: DashboardReportArgs) -> Result<(), AppError> {
    let DashboardReportArgs {
        seed,
        fiscal_year,
        role,
        skill,
        region,
        from,
        to,
        granularity,
    } = args;

    let fiscal_year = fiscal_year.unwrap_or_else(|| Local::now().date_naive().year());
    let seed = seed.unwrap_or(DEFAULT_SEED);
    let dataset = seeded_dataset(fiscal_year, seed);

    let selection = build_selection(role, skill, region, from, to);
    render_dashboard(&dataset, &selection, granularity.into(), seed, fiscal_year);
    Ok(())
}

fn build_selection(
    role: Option<Role>,
    skill: Option<String>,
    region: Option<Region>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> FilterSelection {
    let mut selection = FilterSelection::default();
    if let Some(role) = role {
        selection = selection.with_role(role);
    }
    if let Some(skill) = skill {
        selection = selection.with_skill(skill);
    }
    if let Some(region) = region {
        selection = selection.with_region(region);
    }
    selection.with_window(DateWindow { from, to })
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { seed, fiscal_year } = args;

    let fiscal_year = fiscal_year.unwrap_or_else(|| Local::now().date_naive().year());
    let seed = seed.unwrap_or(DEFAULT_SEED);
    let dataset = seeded_dataset(fiscal_year, seed);

    println!("Learning analytics demo");

    println!("\n== Unfiltered yearly view ==");
    render_dashboard(
        &dataset,
        &FilterSelection::default(),
        PeriodGranularity::Year,
        seed,
        fiscal_year,
    );

    println!("\n== Developer deep dive, quarterly ==");
    let selection = FilterSelection::default().with_role(Role::Developer);
    render_dashboard(
        &dataset,
        &selection,
        PeriodGranularity::Quarter,
        seed,
        fiscal_year,
    );

    Ok(())
}

fn parse_role(raw: &str) -> Result<Role, String> {
    Role::from_label(raw).ok_or_else(|| format!("unknown role '{raw}'"))
}

fn parse_region(raw: &str) -> Result<Region, String> {
    Region::from_label(raw).ok_or_else(|| format!("unknown region '{raw}'"))
}

fn render_dashboard(
    dataset: &Dataset,
    selection: &FilterSelection,
    granularity: PeriodGranularity,
    seed: u64,
    fiscal_year: i32,
) {
    let report = DashboardReport::build(dataset, selection, granularity);
    let summary = report.summary();
    let insights = summary.insights(&report);

    println!(
        "Dataset: fiscal year {} | seed {} | {} records",
        fiscal_year,
        seed,
        dataset.len()
    );
    if selection.is_unrestricted() {
        println!("Filters: none (full dataset)");
    } else {
        println!(
            "Filters applied: {} of {} records matched",
            summary.matched_records, summary.total_records
        );
    }

    render_summary(&summary);
    render_insights(&insights);
}

fn render_summary(summary: &DashboardSummary) {
    println!("\nActivity by period ({})", summary.granularity_label);
    for entry in &summary.activity_by_period {
        println!(
            "- {}: {} learners, {} completions, {:.0} hours ({:.0}% completion)",
            entry.period,
            entry.learners,
            entry.completions,
            entry.hours,
            entry.completion_rate * 100.0
        );
    }

    println!("\nRole workload");
    for load in &summary.role_load {
        println!(
            "- {}: {} records, {} learners, {} completions",
            load.role_label, load.records, load.learners, load.completions
        );
    }

    println!("\nTop skills by learner volume");
    for skill in &summary.top_skills {
        println!(
            "- {}: {} learners, {} completions",
            skill.skill, skill.learners, skill.completions
        );
    }

    if summary.critical_gaps.is_empty() {
        println!("\nCritical skill gaps: none");
    } else {
        println!("\nCritical skill gaps");
        for gap in &summary.critical_gaps {
            println!(
                "- {} / {}: {} gap points (current {:.1} -> target {:.1})",
                gap.role_label, gap.skill, gap.gap_points, gap.avg_current, gap.avg_target
            );
        }
    }

    if summary.decay_alerts.is_empty() {
        println!("\nDecay alerts: none");
    } else {
        println!("\nDecay alerts");
        for alert in &summary.decay_alerts {
            println!(
                "- [{}] {} ({}): gap {:.2}",
                alert.severity_label,
                alert.skill,
                alert.role_labels.join(", "),
                alert.gap
            );
        }
    }
}

fn render_insights(insights: &LearningInsights) {
    println!(
        "\nHealth score: {}% ({})",
        insights.health_score,
        insights.health_level.label()
    );
    println!(
        "Completion {:.0}% | Engagement {:.0} | Median gap {:.0} points",
        insights.completion_rate * 100.0,
        insights.engagement_score,
        insights.median_gap_points
    );

    if let Some(skill) = &insights.focus_skill {
        if let Some(points) = insights.focus_skill_gap_points {
            println!("Focus skill: {} ({} gap points)", skill, points);
        } else {
            println!("Focus skill: {}", skill);
        }
    }

    if !insights.observations.is_empty() {
        println!("\nObservations");
        for note in &insights.observations {
            println!("- {}", note);
        }
    }

    if !insights.recommended_actions.is_empty() {
        println!("\nRecommended actions");
        for action in &insights.recommended_actions {
            println!("- {}", action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn one_sided_from_bound_sets_the_window() {
        let selection = build_selection(None, None, None, Some(date(2026, 4, 1)), None);
        assert_eq!(selection.window.from, Some(date(2026, 4, 1)));
        assert_eq!(selection.window.to, None);
    }

    #[test]
    fn one_sided_to_bound_sets_the_window() {
        let selection = build_selection(None, None, None, None, Some(date(2026, 6, 30)));
        assert_eq!(selection.window.from, None);
        assert_eq!(selection.window.to, Some(date(2026, 6, 30)));
    }

    #[test]
    fn no_bounds_leaves_the_selection_unwindowed() {
        let selection = build_selection(Some(Role::Developer), None, None, None, None);
        assert_eq!(selection.window, DateWindow::default());
        assert!(selection.roles.contains(&Role::Developer));
    }
}
