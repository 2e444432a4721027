//! Attribute catalog loader.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use xiuxian_core::{AttributeDefinition, AttributeKey};

use crate::loaders::{LoadResult, read_file};

/// Attribute catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeCatalog {
    pub attributes: Vec<AttributeDefinition>,
}

/// Loader for attribute definitions from RON files.
pub struct AttributeLoader;

impl AttributeLoader {
    /// Load attribute definitions from a RON file.
    ///
    /// Rejects empty catalogs and repeated `(id, type)` pairs.
    pub fn load(path: &Path) -> LoadResult<Vec<AttributeDefinition>> {
        let content = read_file(path)?;
        let definitions = Self::parse(&content)?;
        debug!(path = %path.display(), count = definitions.len(), "attribute catalog loaded");
        Ok(definitions)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<AttributeDefinition>> {
        let catalog: AttributeCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse attribute catalog RON: {}", e))?;

        if catalog.attributes.is_empty() {
            anyhow::bail!("Attribute catalog is empty");
        }
        let mut seen = BTreeSet::<AttributeKey>::new();
        for definition in &catalog.attributes {
            if !seen.insert(definition.key()) {
                anyhow::bail!("Duplicate attribute definition `{}`", definition.key());
            }
        }
        Ok(catalog.attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::write_fixture;
    use xiuxian_core::{AttributeKind, AttributeValue};

    const CATALOG: &str = r#"
        (
            attributes: [
                (
                    id: "hp",
                    name: "Health",
                    base_value: 100,
                    growth_rate: Some(20.0),
                ),
                (
                    id: "crit",
                    name: "Critical Chance",
                    type: Combat,
                    base_value: 0.05,
                    sort_order: 5,
                ),
            ],
        )
    "#;

    #[test]
    fn loads_catalog_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "attributes.ron", CATALOG);
        let definitions = AttributeLoader::load(&path).unwrap();

        assert_eq!(definitions.len(), 2);
        let hp = &definitions[0];
        assert_eq!(hp.kind, AttributeKind::Base);
        assert_eq!(hp.base_value, AttributeValue::Int(100));
        assert_eq!(hp.growth_rate, Some(20.0));

        let crit = &definitions[1];
        assert_eq!(crit.kind, AttributeKind::Combat);
        assert_eq!(crit.base_value, AttributeValue::Float(0.05));
        assert_eq!(crit.growth_rate, None);
        assert_eq!(crit.sort_order, 5);
    }

    #[test]
    fn rejects_duplicates() {
        let err = AttributeLoader::parse(
            r#"(attributes: [
                (id: "hp", name: "Health", base_value: 1),
                (id: "hp", name: "Health again", base_value: 2),
            ])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }

    #[test]
    fn same_id_different_type_is_allowed() {
        let definitions = AttributeLoader::parse(
            r#"(attributes: [
                (id: "speed", name: "Speed", base_value: 5),
                (id: "speed", name: "Cast Speed", type: Special, base_value: 1.0),
            ])"#,
        )
        .unwrap();
        assert_eq!(definitions.len(), 2);
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(AttributeLoader::parse("(attributes: [])").is_err());
    }
}
