//! Content loaders for reading game data from files.
//!
//! Catalogs are RON, configuration is TOML. Every loader returns
//! [`LoadResult`] with the offending path in the error message.

pub mod attributes;
pub mod battle;
pub mod config;
pub mod experience;
pub mod factory;

pub use attributes::{AttributeCatalog, AttributeLoader};
pub use battle::{BattleLoader, BattleSetup};
pub use config::ConfigLoader;
pub use experience::ExperienceLoader;
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

#[cfg(test)]
pub(crate) fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}
