//! Content factory for building inventories from data files.

use std::path::PathBuf;

use inventory_core::{GridInventory, InventoryConfig};

use crate::catalog::Catalog;
use crate::loaders::{ConfigLoader, ItemLoader, LoadResult};

/// Content factory that loads inventory content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── inventory.toml
/// └── items.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory for the data files bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
    }

    /// Load inventory configuration from `inventory.toml`.
    pub fn load_config(&self) -> LoadResult<InventoryConfig> {
        ConfigLoader::load(&self.data_dir.join("inventory.toml"))
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Catalog> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Builds an empty inventory from `inventory.toml`.
    pub fn build_inventory(&self) -> LoadResult<GridInventory> {
        Ok(GridInventory::with_config(self.load_config()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_loads() {
        let factory = ContentFactory::bundled();
        let catalog = factory.load_items().unwrap();
        let mut inventory = factory.build_inventory().unwrap();

        assert_eq!(inventory.width(), 6);
        assert_eq!(inventory.height(), 4);
        assert!(!catalog.is_empty());

        let id = catalog.stock(&mut inventory, "jerry can", 1).unwrap();
        assert_eq!(inventory.item_by_id(id).unwrap().anchor(), inventory_core::CellPosition::ORIGIN);
        assert_eq!(inventory.verify_invariants(), Ok(()));
    }

    #[test]
    fn missing_directory_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let factory = ContentFactory::new(dir.path().join("nope"));
        assert!(factory.load_config().is_err());
        assert!(factory.load_items().is_err());
    }
}
