//! Experience reward table loader.

use std::path::Path;

use tracing::debug;
use xiuxian_core::ExperienceTable;

use crate::loaders::{LoadResult, read_file};

/// Loader for experience rewards from RON files.
pub struct ExperienceLoader;

impl ExperienceLoader {
    pub fn load(path: &Path) -> LoadResult<ExperienceTable> {
        let content = read_file(path)?;
        let table: ExperienceTable = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse experience table RON: {}", e))?;
        debug!(
            path = %path.display(),
            enemies = table.enemies.len(),
            tasks = table.tasks.len(),
            areas = table.explore.len(),
            "experience table loaded"
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::write_fixture;
    use xiuxian_core::ExperienceSource;

    #[test]
    fn resolves_loaded_rewards() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "experience.ron",
            r#"(
                enemies: {
                    1: (base_exp: 50),
                    5: (base_exp: 80, multiplier: 1.5),
                },
                tasks: {
                    "first_breakthrough": (base_exp: 200, multiplier: 2.0),
                },
                explore: {
                    "misty_valley": 30,
                },
            )"#,
        );
        let table = ExperienceLoader::load(&path).unwrap();

        assert_eq!(table.resolve(&ExperienceSource::Enemy { level: 1 }), Some(50));
        assert_eq!(table.resolve(&ExperienceSource::Enemy { level: 5 }), Some(120));
        assert_eq!(
            table.resolve(&ExperienceSource::Task("first_breakthrough".into())),
            Some(400)
        );
        assert_eq!(
            table.resolve(&ExperienceSource::Explore("misty_valley".into())),
            Some(30)
        );
        assert_eq!(table.resolve(&ExperienceSource::Enemy { level: 2 }), None);
    }

    #[test]
    fn empty_sections_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "experience.ron", "(explore: { \"cave\": 10 })");
        let table = ExperienceLoader::load(&path).unwrap();
        assert!(table.enemies.is_empty());
        assert_eq!(table.explore.len(), 1);
    }
}
