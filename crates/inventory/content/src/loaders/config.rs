//! Inventory configuration loader.

use std::path::Path;

use inventory_core::InventoryConfig;
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Loader for inventory configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parse config data from TOML text, rejecting zero-sized grids.
    pub fn parse(content: &str) -> LoadResult<InventoryConfig> {
        let config: InventoryConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        if !config.validate() {
            anyhow::bail!(
                "Invalid inventory grid {}x{}: both dimensions must be positive",
                config.width,
                config.height
            );
        }

        debug!(
            width = config.width,
            height = config.height,
            max_weight = config.max_weight,
            "inventory config parsed"
        );
        Ok(config)
    }

    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing InventoryConfig
    pub fn load(path: &Path) -> LoadResult<InventoryConfig> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
    }
}
