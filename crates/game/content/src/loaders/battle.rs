//! Battle roster loader.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use xiuxian_core::{Participant, ParticipantSpec};

use crate::loaders::{LoadResult, read_file};

/// Battle setup structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleSetup {
    pub participants: Vec<ParticipantSpec>,
}

impl BattleSetup {
    /// Fresh participants with ready cooldowns, in file order.
    pub fn build(&self) -> Vec<Participant> {
        self.participants.iter().map(ParticipantSpec::build).collect()
    }
}

/// Loader for battle rosters from RON files.
pub struct BattleLoader;

impl BattleLoader {
    /// Load a battle setup from a RON file.
    ///
    /// Requires at least one player, at least one enemy, and unique ids.
    pub fn load(path: &Path) -> LoadResult<BattleSetup> {
        let content = read_file(path)?;
        let setup = Self::parse(&content)?;
        debug!(path = %path.display(), participants = setup.participants.len(), "battle setup loaded");
        Ok(setup)
    }

    pub fn parse(content: &str) -> LoadResult<BattleSetup> {
        let setup: BattleSetup = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse battle setup RON: {}", e))?;

        let mut ids = BTreeSet::new();
        for spec in &setup.participants {
            if !ids.insert(spec.id.as_str()) {
                anyhow::bail!("Duplicate participant id `{}`", spec.id);
            }
            if let Some(skill) = spec.skills.iter().find(|skill| !skill.is_consistent()) {
                anyhow::bail!(
                    "Participant `{}` declares a {} skill that only deals damage",
                    spec.id,
                    skill.kind()
                );
            }
        }
        if !setup.participants.iter().any(|p| p.is_player) {
            anyhow::bail!("Battle setup has no player");
        }
        if setup.participants.iter().all(|p| p.is_player) {
            anyhow::bail!("Battle setup has no enemy");
        }
        Ok(setup)
    }
}
