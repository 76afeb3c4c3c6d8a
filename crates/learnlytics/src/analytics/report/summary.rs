use super::views::{
    DashboardSummary, DecayAlertView, LearningInsights, PeriodActivityEntry, RoleLoadEntry,
    SkillGapView, SkillVolumeEntry,
};
use crate::analytics::aggregate::{totals_by_period, top_n_by, MeasureTotals, PeriodGranularity};
use crate::analytics::dataset::Dataset;
use crate::analytics::domain::Role;
use crate::analytics::filter::FilterSelection;
use crate::analytics::metrics::{decay_alerts, skill_gaps, top_gaps_by_role, DecayAlert, SkillGap};
use std::collections::{BTreeMap, HashMap};

/// How many skills the "top skills" ranking keeps.
const TOP_SKILL_COUNT: usize = 5;

#[derive(Debug, Default, Clone)]
pub struct RoleActivity {
    pub records: usize,
    pub learners: u64,
    pub completions: u64,
}

#[derive(Debug, Clone)]
struct SkillVolume {
    skill: String,
    learners: u64,
    completions: u64,
}

/// One filtered slice of the dataset, rolled up for the dashboard. Built as a
/// pure function of (dataset, selection, granularity); holds no state beyond
/// the rollup itself and is recomputed whenever the selection changes.
#[derive(Debug)]
pub struct DashboardReport {
    granularity: PeriodGranularity,
    matched_records: usize,
    total_records: usize,
    overall: MeasureTotals,
    activity_by_period: BTreeMap<String, MeasureTotals>,
    role_load: HashMap<Role, RoleActivity>,
    skill_volume: Vec<SkillVolume>,
    gaps: Vec<SkillGap>,
    alerts: Vec<DecayAlert>,
}

impl DashboardReport {
    pub fn build(
        dataset: &Dataset,
        selection: &FilterSelection,
        granularity: PeriodGranularity,
    ) -> Self {
        let filtered = dataset.filter(selection);
        let matched_records = filtered.len();

        let activities: Vec<_> = filtered
            .iter()
            .filter_map(|record| record.as_activity())
            .collect();
        let ratings: Vec<_> = filtered
            .iter()
            .filter_map(|record| record.as_rating())
            .collect();

        let activity_by_period = totals_by_period(activities.iter().copied(), granularity);

        let mut overall = MeasureTotals::default();
        let mut role_load: HashMap<Role, RoleActivity> = HashMap::new();
        // Insertion order preserved so top-N ties resolve to first-seen.
        let mut skill_volume: Vec<SkillVolume> = Vec::new();

        for activity in &activities {
            overall.absorb(activity);

            for role in &activity.roles {
                let entry = role_load.entry(*role).or_default();
                entry.records += 1;
                entry.learners += u64::from(activity.learners);
                entry.completions += u64::from(activity.completions);
            }

            for skill in &activity.skills {
                match skill_volume.iter_mut().find(|entry| &entry.skill == skill) {
                    Some(entry) => {
                        entry.learners += u64::from(activity.learners);
                        entry.completions += u64::from(activity.completions);
                    }
                    None => skill_volume.push(SkillVolume {
                        skill: skill.clone(),
                        learners: u64::from(activity.learners),
                        completions: u64::from(activity.completions),
                    }),
                }
            }
        }

        let gaps = skill_gaps(ratings.iter().copied());
        let alerts = decay_alerts(ratings.iter().copied());

        Self {
            granularity,
            matched_records,
            total_records: dataset.len(),
            overall,
            activity_by_period,
            role_load,
            skill_volume,
            gaps,
            alerts,
        }
    }

    pub fn overall_totals(&self) -> &MeasureTotals {
        &self.overall
    }

    pub fn gaps(&self) -> &[SkillGap] {
        &self.gaps
    }

    pub fn alerts(&self) -> &[DecayAlert] {
        &self.alerts
    }

    pub fn summary(&self) -> DashboardSummary {
        let activity_by_period = self
            .activity_by_period
            .iter()
            .map(|(period, totals)| PeriodActivityEntry {
                period: period.clone(),
                records: totals.records,
                learners: totals.learners,
                completions: totals.completions,
                hours: totals.hours,
                active_users: totals.active_users,
                completion_rate: totals.completion_rate(),
                avg_engagement: totals.avg_engagement(),
            })
            .collect();

        let role_load = Role::ordered()
            .into_iter()
            .filter_map(|role| {
                self.role_load.get(&role).map(|load| RoleLoadEntry {
                    role,
                    role_label: role.label(),
                    records: load.records,
                    learners: load.learners,
                    completions: load.completions,
                })
            })
            .collect();

        let top_skills = top_n_by(&self.skill_volume, TOP_SKILL_COUNT, |entry| {
            entry.learners as f64
        })
        .into_iter()
        .map(|entry| SkillVolumeEntry {
            skill: entry.skill.clone(),
            learners: entry.learners,
            completions: entry.completions,
        })
        .collect();

        let critical_gaps = top_gaps_by_role(&self.gaps)
            .iter()
            .map(SkillGapView::from_gap)
            .collect();

        let decay_alerts = self.alerts.iter().map(DecayAlertView::from_alert).collect();

        DashboardSummary {
            granularity_label: self.granularity.label(),
            matched_records: self.matched_records,
            total_records: self.total_records,
            activity_by_period,
            role_load,
            top_skills,
            critical_gaps,
            decay_alerts,
        }
    }
}

impl DashboardSummary {
    pub fn insights(&self, report: &DashboardReport) -> LearningInsights {
        super::insights::generate_insights(self, report)
    }
}
