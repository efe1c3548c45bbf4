//! Item catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, CatalogEntry};
use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<CatalogEntry>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Parse an item catalog from RON text.
    ///
    /// Duplicate names and zero-sized footprints are rejected.
    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;
        let catalog = Catalog::from_entries(catalog.items)
            .map_err(|e| anyhow::anyhow!("Invalid item catalog: {}", e))?;

        debug!(items = catalog.len(), "item catalog parsed");
        Ok(catalog)
    }

    /// Load item catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing ItemCatalog
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use inventory_core::{ItemCategory, Rarity};

    use super::*;

    const CATALOG: &str = r#"
        (
            items: [
                (
                    descriptor: (
                        name: "spark plug",
                        category: part,
                        rarity: uncommon,
                        value: 4,
                        weight: 1,
                        stackable: true,
                        max_stack: 8,
                    ),
                    width: 1,
                    height: 1,
                ),
                (
                    descriptor: (name: "thermos", weight: 2),
                    width: 1,
                    height: 2,
                ),
            ],
        )
    "#;

    #[test]
    fn parses_entries_with_defaults() {
        let catalog = ItemLoader::parse(CATALOG).unwrap();
        assert_eq!(catalog.len(), 2);

        let plug = catalog.get("spark plug").unwrap();
        assert_eq!(plug.descriptor.category, ItemCategory::Part);
        assert_eq!(plug.descriptor.rarity, Rarity::Uncommon);
        assert_eq!(plug.descriptor.stack_limit(), 8);

        let thermos = catalog.get("thermos").unwrap();
        assert_eq!(thermos.descriptor.category, ItemCategory::Misc);
        assert!(!thermos.descriptor.stackable);
        assert_eq!((thermos.width, thermos.height), (1, 2));
    }

    #[test]
    fn rejects_duplicate_entries() {
        let content = r#"(items: [
            (descriptor: (name: "a", weight: 1), width: 1, height: 1),
            (descriptor: (name: "a", weight: 2), width: 1, height: 1),
        ])"#;
        let error = ItemLoader::parse(content).unwrap_err();
        assert!(error.to_string().contains("duplicate"));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let catalog = ItemLoader::load(file.path()).unwrap();
        assert!(catalog.get("thermos").is_some());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = ItemLoader::load(&dir.path().join("items.ron"));
        assert!(result.is_err());
    }
}
