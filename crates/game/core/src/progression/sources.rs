//! Experience rewards by source: defeated enemies, tasks and exploration.

use std::collections::BTreeMap;

use tracing::warn;

/// Where an experience grant comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExperienceSource {
    Enemy { level: u32 },
    Task(String),
    Explore(String),
}

/// Base experience scaled by a difficulty coefficient.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaledReward {
    pub base_exp: u64,
    #[cfg_attr(feature = "serde", serde(default = "ScaledReward::unit_multiplier"))]
    pub multiplier: f64,
}

impl ScaledReward {
    pub const fn new(base_exp: u64, multiplier: f64) -> Self {
        Self {
            base_exp,
            multiplier,
        }
    }

    pub fn amount(&self) -> u64 {
        (self.base_exp as f64 * self.multiplier.max(0.0)).round() as u64
    }

    #[cfg(feature = "serde")]
    fn unit_multiplier() -> f64 {
        1.0
    }
}

/// Experience reward tables.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExperienceTable {
    /// Keyed by enemy level.
    pub enemies: BTreeMap<u32, ScaledReward>,
    /// Keyed by task id.
    pub tasks: BTreeMap<String, ScaledReward>,
    /// Flat rewards keyed by exploration area id.
    pub explore: BTreeMap<String, u64>,
}

impl ExperienceTable {
    #[must_use]
    pub fn with_enemy(mut self, level: u32, reward: ScaledReward) -> Self {
        self.enemies.insert(level, reward);
        self
    }

    #[must_use]
    pub fn with_task(mut self, id: impl Into<String>, reward: ScaledReward) -> Self {
        self.tasks.insert(id.into(), reward);
        self
    }

    #[must_use]
    pub fn with_explore(mut self, id: impl Into<String>, exp: u64) -> Self {
        self.explore.insert(id.into(), exp);
        self
    }

    /// Experience granted by `source`, or `None` if the table has no entry.
    pub fn resolve(&self, source: &ExperienceSource) -> Option<u64> {
        let amount = match source {
            ExperienceSource::Enemy { level } => self.enemies.get(level).map(ScaledReward::amount),
            ExperienceSource::Task(id) => self.tasks.get(id).map(ScaledReward::amount),
            ExperienceSource::Explore(id) => self.explore.get(id).copied(),
        };
        if amount.is_none() {
            warn!(?source, "no experience entry for source");
        }
        amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ExperienceTable {
        ExperienceTable::default()
            .with_enemy(1, ScaledReward::new(20, 1.0))
            .with_enemy(5, ScaledReward::new(60, 1.5))
            .with_task("first_steps", ScaledReward::new(100, 1.2))
            .with_explore("bamboo_forest", 35)
    }

    #[test]
    fn resolves_each_source() {
        let table = table();
        assert_eq!(table.resolve(&ExperienceSource::Enemy { level: 1 }), Some(20));
        assert_eq!(table.resolve(&ExperienceSource::Enemy { level: 5 }), Some(90));
        assert_eq!(
            table.resolve(&ExperienceSource::Task("first_steps".into())),
            Some(120)
        );
        assert_eq!(
            table.resolve(&ExperienceSource::Explore("bamboo_forest".into())),
            Some(35)
        );
    }

    #[test]
    fn unknown_source_is_none() {
        let table = table();
        assert_eq!(table.resolve(&ExperienceSource::Enemy { level: 9 }), None);
        assert_eq!(table.resolve(&ExperienceSource::Task("nope".into())), None);
    }

    #[test]
    fn negative_multiplier_grants_nothing() {
        assert_eq!(ScaledReward::new(50, -2.0).amount(), 0);
    }
}
