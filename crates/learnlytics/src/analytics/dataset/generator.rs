use super::config::DatasetConfig;
use super::Dataset;
use crate::analytics::domain::{ContentType, Provider};
use crate::analytics::records::{
    AnalyticsRecord, DemandSignal, LearningActivity, RecordId, SkillRating, TrendingTopic,
};
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded synthetic data source.
///
/// Generation is deterministic in structure and stochastic only in magnitude:
/// the record *grid* is fixed by the config, while measures are drawn from the
/// injected RNG. The same seed therefore reproduces the dataset exactly.
///
/// Coverage strategy is two-tier: a primary matrix (role x content type x
/// provider, every month) cycles the remaining dimensions so every single
/// legal value is reachable, and a smaller secondary matrix layers curated
/// multi-role cohorts over only the leading content types and providers. That
/// keeps volume linear in distinct values rather than exponential in the full
/// cross-product.
#[derive(Debug)]
pub struct DatasetGenerator {
    config: DatasetConfig,
    rng: StdRng,
    sequence: u32,
}

impl DatasetGenerator {
    pub fn new(config: DatasetConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            sequence: 0,
        }
    }

    pub fn generate(mut self) -> Dataset {
        let mut records = Vec::new();
        self.primary_activities(&mut records);
        self.secondary_activities(&mut records);
        self.skill_ratings(&mut records);
        self.trending_topics(&mut records);
        self.demand_signals(&mut records);
        Dataset::new(records)
    }

    fn next_id(&mut self, prefix: &str) -> RecordId {
        self.sequence += 1;
        RecordId(format!("{prefix}-{:05}", self.sequence))
    }

    /// A date inside the given month; months in the horizon all have >= 28
    /// days, so the draw can never leave the month.
    fn date_in_month(&mut self, month_start: NaiveDate) -> NaiveDate {
        month_start + Duration::days(self.rng.random_range(0..28))
    }

    fn activity_measures(
        &mut self,
        content_type: ContentType,
        provider: Provider,
        engagement_boost: f32,
    ) -> (u32, u32, f32, u32, f32, f32) {
        let (min, max) = self.config.learners_range;
        let base = self.rng.random_range(min as f32..max.max(min + 1) as f32);
        let learners = ((base * provider.volume_bias() * content_type.volume_bias()).round()
            as u32)
            .max(1);
        let completions = ((f64::from(learners) * self.rng.random_range(0.60..0.95)).round()
            as u32)
            .clamp(1, learners);
        let hours = learners as f32 * self.rng.random_range(0.4..2.5);
        // Re-engagement can mildly exceed the raw learner count, never more.
        let active_users = ((f64::from(learners) * self.rng.random_range(0.70..1.10)).round()
            as u32)
            .max(1);
        let engagement_rate = (self.rng.random_range(0.35..0.90) * engagement_boost).min(0.98);
        let avg_rating = self.rng.random_range(3.0..4.9);
        (
            learners,
            completions,
            hours,
            active_users,
            engagement_rate,
            avg_rating,
        )
    }

    /// Primary matrix: every (role, content type, provider) for every month.
    /// Skills, groups, regions, and attributes are assigned by cycling so each
    /// catalog value is guaranteed to appear, with a second random skill mixed
    /// in for texture.
    fn primary_activities(&mut self, records: &mut Vec<AnalyticsRecord>) {
        let months = self.config.horizon().months();
        let mut cycle = 0usize;

        for month_start in months {
            for role_idx in 0..self.config.roles.len() {
                for ct_idx in 0..self.config.content_types.len() {
                    for provider_idx in 0..self.config.providers.len() {
                        let role = self.config.roles[role_idx];
                        let content_type = self.config.content_types[ct_idx];
                        let provider = self.config.providers[provider_idx];
                        let region = self.config.regions[cycle % self.config.regions.len()];
                        let group = self.config.groups[cycle % self.config.groups.len()];
                        let attribute = self.config.custom_attributes
                            [cycle % self.config.custom_attributes.len()];

                        let primary_skill = self.config.skills[cycle % self.config.skills.len()];
                        let mut skills = vec![primary_skill.to_string()];
                        if self.rng.random_bool(0.5) {
                            let extra = self.config.skills
                                [self.rng.random_range(0..self.config.skills.len())];
                            if extra != primary_skill {
                                skills.push(extra.to_string());
                            }
                        }

                        let (learners, completions, hours, active_users, engagement_rate, avg_rating) =
                            self.activity_measures(content_type, provider, 1.0);

                        records.push(AnalyticsRecord::Activity(LearningActivity {
                            id: self.next_id("act"),
                            date: self.date_in_month(month_start),
                            content_type,
                            provider,
                            region,
                            roles: vec![role],
                            skills,
                            groups: vec![group.to_string()],
                            custom_attributes: vec![attribute.to_string()],
                            learners,
                            completions,
                            hours,
                            active_users,
                            engagement_rate,
                            avg_rating,
                        }));
                        cycle += 1;
                    }
                }
            }
        }
    }

    /// Secondary matrix: curated multi-role cohorts restricted to the top-N
    /// content types and providers, one record per quarter, with boosted
    /// engagement. Adds multi-valued-role coverage without multiplying
    /// through every axis.
    fn secondary_activities(&mut self, records: &mut Vec<AnalyticsRecord>) {
        let quarters = self.config.horizon().quarters();
        let top_n = self
            .config
            .secondary_top_n
            .min(self.config.content_types.len())
            .min(self.config.providers.len());
        let mut cycle = 0usize;

        for grouping_idx in 0..self.config.multi_role_groupings.len() {
            for ct_idx in 0..top_n {
                for provider_idx in 0..top_n {
                    for &quarter_start in &quarters {
                        let roles = self.config.multi_role_groupings[grouping_idx].clone();
                        let content_type = self.config.content_types[ct_idx];
                        let provider = self.config.providers[provider_idx];
                        let region = self.config.regions[cycle % self.config.regions.len()];
                        let group = self.config.groups[cycle % self.config.groups.len()];
                        let attribute = self.config.custom_attributes
                            [cycle % self.config.custom_attributes.len()];

                        let first = self.config.skills[cycle % self.config.skills.len()];
                        let second = self.config.skills[(cycle + 1) % self.config.skills.len()];
                        let boost = self.config.secondary_boost;

                        let (learners, completions, hours, active_users, engagement_rate, avg_rating) =
                            self.activity_measures(content_type, provider, boost);

                        records.push(AnalyticsRecord::Activity(LearningActivity {
                            id: self.next_id("act"),
                            date: self.date_in_month(quarter_start),
                            content_type,
                            provider,
                            region,
                            roles,
                            skills: vec![first.to_string(), second.to_string()],
                            groups: vec![group.to_string()],
                            custom_attributes: vec![attribute.to_string()],
                            learners,
                            completions,
                            hours,
                            active_users,
                            engagement_rate,
                            avg_rating,
                        }));
                        cycle += 1;
                    }
                }
            }
        }
    }

    /// One rating per (skill, role, quarter) so rating coverage holds per
    /// skill and per role independently.
    fn skill_ratings(&mut self, records: &mut Vec<AnalyticsRecord>) {
        let quarters = self.config.horizon().quarters();
        let mut cycle = 0usize;

        for skill_idx in 0..self.config.skills.len() {
            for role_idx in 0..self.config.roles.len() {
                for &quarter_start in &quarters {
                    let skill = self.config.skills[skill_idx];
                    let role = self.config.roles[role_idx];
                    let region = self.config.regions[cycle % self.config.regions.len()];
                    let group = self.config.groups[cycle % self.config.groups.len()];

                    let current_rating = self.rng.random_range(2.0..4.5_f32);
                    let target_rating =
                        (current_rating + self.rng.random_range(0.5..1.5_f32)).min(5.0);

                    records.push(AnalyticsRecord::Rating(SkillRating {
                        id: self.next_id("rate"),
                        date: self.date_in_month(quarter_start),
                        skill: skill.to_string(),
                        roles: vec![role],
                        region,
                        groups: vec![group.to_string()],
                        current_rating,
                        target_rating,
                        raters: self.rng.random_range(5..80),
                    }));
                    cycle += 1;
                }
            }
        }
    }

    fn trending_topics(&mut self, records: &mut Vec<AnalyticsRecord>) {
        let quarters = self.config.horizon().quarters();
        let mut cycle = 0usize;

        for skill_idx in 0..self.config.skills.len() {
            for &quarter_start in &quarters {
                let topic = self.config.skills[skill_idx];
                let role = self.config.roles[skill_idx % self.config.roles.len()];
                let region = self.config.regions[cycle % self.config.regions.len()];

                let mentions = self.rng.random_range(40..400_u32);
                let endorsements =
                    (f64::from(mentions) * self.rng.random_range(0.10..0.60)).round() as u32;

                records.push(AnalyticsRecord::Topic(TrendingTopic {
                    id: self.next_id("topic"),
                    date: self.date_in_month(quarter_start),
                    topic: topic.to_string(),
                    roles: vec![role],
                    region,
                    mentions,
                    endorsements,
                    growth_rate: self.rng.random_range(-0.20..0.80),
                }));
                cycle += 1;
            }
        }
    }

    fn demand_signals(&mut self, records: &mut Vec<AnalyticsRecord>) {
        let quarters = self.config.horizon().quarters();
        let mut cycle = 0usize;

        for skill_idx in 0..self.config.skills.len() {
            for &quarter_start in &quarters {
                let skill = self.config.skills[skill_idx];
                let role = self.config.roles[(skill_idx + cycle) % self.config.roles.len()];
                let region = self.config.regions[cycle % self.config.regions.len()];

                records.push(AnalyticsRecord::Demand(DemandSignal {
                    id: self.next_id("demand"),
                    date: self.date_in_month(quarter_start),
                    skill: skill.to_string(),
                    roles: vec![role],
                    region,
                    opportunities: self.rng.random_range(10..250),
                }));
                cycle += 1;
            }
        }
    }
}
