//! Game configuration loader.

use std::path::Path;

use tracing::debug;
use xiuxian_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing sections and fields keep their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)?;
        Self::validate(&config)
            .map_err(|e| anyhow::anyhow!("Invalid config in {}: {}", path.display(), e))?;
        debug!(path = %path.display(), "game config loaded");
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot drive a battle.
    pub fn validate(config: &GameConfig) -> LoadResult<()> {
        config
            .progression
            .curve
            .build()
            .map_err(|e| anyhow::anyhow!("invalid curve: {}", e))?;

        let battle = &config.battle;
        let durations = [
            ("battle.preparation_time", battle.preparation_time),
            ("battle.result_display_time", battle.result_display_time),
            ("battle.ai.min_decision_interval", battle.ai.min_decision_interval),
            ("battle.ai.max_decision_interval", battle.ai.max_decision_interval),
            ("battle.ai.difficulty", battle.ai.difficulty),
        ];
        for (field, value) in durations {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("`{}` must be a finite, non-negative number (got {})", field, value);
            }
        }
        Ok(())
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}
