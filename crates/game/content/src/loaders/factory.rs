//! Content factory for loading every content file from a data directory.

use std::path::{Path, PathBuf};

use xiuxian_core::{AttributeDefinition, ExperienceTable, GameConfig};

use crate::loaders::{
    AttributeLoader, BattleLoader, BattleSetup, ConfigLoader, ExperienceLoader, LoadResult,
};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── attributes.ron
/// ├── experience.ron
/// └── battle.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const ATTRIBUTES_FILE: &'static str = "attributes.ron";
    pub const EXPERIENCE_FILE: &'static str = "experience.ron";
    pub const BATTLE_FILE: &'static str = "battle.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, or defaults if the file
    /// does not exist.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load attribute definitions from `attributes.ron`.
    pub fn load_attributes(&self) -> LoadResult<Vec<AttributeDefinition>> {
        AttributeLoader::load(&self.data_dir.join(Self::ATTRIBUTES_FILE))
    }

    /// Load experience rewards from `experience.ron`.
    pub fn load_experience(&self) -> LoadResult<ExperienceTable> {
        ExperienceLoader::load(&self.data_dir.join(Self::EXPERIENCE_FILE))
    }

    /// Load the battle roster from `battle.ron`.
    pub fn load_battle(&self) -> LoadResult<BattleSetup> {
        BattleLoader::load(&self.data_dir.join(Self::BATTLE_FILE))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::write_fixture;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
        assert!(factory.load_attributes().is_err());
    }

    #[test]
    fn loads_from_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(&dir, "config.toml", "[battle]\nseed = 9\n");
        write_fixture(
            &dir,
            "attributes.ron",
            r#"(attributes: [(id: "hp", name: "Health", base_value: 100)])"#,
        );
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap().battle.seed, Some(9));
        assert_eq!(factory.load_attributes().unwrap()[0].id, "hp");
    }
}
