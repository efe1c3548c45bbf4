/// Inventory configuration: grid dimensions and carry-weight ceiling.
///
/// Dimensions are fixed for the lifetime of a [`GridInventory`](crate::GridInventory);
/// the weight ceiling can be changed later through
/// [`GridInventory::set_max_weight`](crate::GridInventory::set_max_weight).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryConfig {
    /// Number of cell columns.
    pub width: u32,
    /// Number of cell rows.
    pub height: u32,
    /// Maximum sum of `weight * stack_count` over all placed items.
    pub max_weight: u32,
}

impl InventoryConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WIDTH: u32 = 6;
    pub const DEFAULT_HEIGHT: u32 = 4;
    pub const DEFAULT_MAX_WEIGHT: u32 = 64;

    pub const fn new(width: u32, height: u32, max_weight: u32) -> Self {
        Self {
            width,
            height,
            max_weight,
        }
    }

    pub const fn with_max_weight(mut self, max_weight: u32) -> Self {
        self.max_weight = max_weight;
        self
    }

    /// Number of cells in the grid.
    pub const fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns true if the grid has at least one cell.
    pub const fn validate(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_WIDTH,
            Self::DEFAULT_HEIGHT,
            Self::DEFAULT_MAX_WEIGHT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_trunk_grid() {
        let config = InventoryConfig::default();
        assert_eq!(config.width, 6);
        assert_eq!(config.height, 4);
        assert_eq!(config.max_weight, 64);
        assert_eq!(config.cell_count(), 24);
    }

    #[test]
    fn zero_sized_grid_is_invalid() {
        assert!(!InventoryConfig::new(0, 4, 10).validate());
        assert!(!InventoryConfig::new(4, 0, 10).validate());
        assert!(InventoryConfig::new(1, 1, 0).validate());
    }
}
