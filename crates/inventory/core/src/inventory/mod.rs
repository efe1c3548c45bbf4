//! Grid inventory: placed items on top of the cell grid.
//!
//! [`GridInventory`] is the single owner of both the cell occupancy map and
//! the item records. Operations are grouped by concern:
//!
//! - `placement`: collision checks, auto-placement, add/move/rotate
//! - `lifecycle`: removal, clearing, weight ceiling
//! - `stacking`: stack counts on existing placements
//! - `queries`: read-only lookups and aggregates
//! - `audit`: invariant verification used by tests and debug tooling
//!
//! Every mutating operation is all-or-nothing: validation happens before the
//! first write, so an `Err` means the inventory is exactly as it was.
mod audit;
mod error;
mod lifecycle;
mod placement;
mod queries;
mod stacking;

use std::collections::BTreeMap;
use std::fmt;

use crate::config::InventoryConfig;
use crate::grid::{CellPosition, Footprint, Grid};
use crate::item::ItemDescriptor;

pub use audit::InvariantViolation;
pub use error::InventoryError;

/// Identifier of a placed item, unique for the lifetime of its inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemInstanceId(pub u64);

impl fmt::Display for ItemInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An item instance occupying a rectangle of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedItem {
    pub(crate) id: ItemInstanceId,
    pub(crate) descriptor: ItemDescriptor,
    pub(crate) anchor: CellPosition,
    pub(crate) footprint: Footprint,
    pub(crate) rotated: bool,
    pub(crate) stack_count: u32,
}

impl PlacedItem {
    pub fn id(&self) -> ItemInstanceId {
        self.id
    }

    pub fn descriptor(&self) -> &ItemDescriptor {
        &self.descriptor
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// Top-left occupied cell.
    pub fn anchor(&self) -> CellPosition {
        self.anchor
    }

    /// Unrotated extents as supplied when the item was added.
    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    /// Extents currently occupied, honouring rotation.
    pub fn effective_footprint(&self) -> Footprint {
        self.footprint.effective(self.rotated)
    }

    pub fn is_rotated(&self) -> bool {
        self.rotated
    }

    pub fn stack_count(&self) -> u32 {
        self.stack_count
    }

    /// `descriptor.weight * stack_count`.
    pub fn weight(&self) -> u64 {
        self.descriptor.weight_of(self.stack_count)
    }

    /// Cells currently occupied, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellPosition> {
        self.effective_footprint().cells_at(self.anchor)
    }

    pub fn covers(&self, position: CellPosition) -> bool {
        self.effective_footprint().covers(self.anchor, position)
    }
}

/// Fixed-size spatial inventory enforcing non-overlap, bounds and weight.
///
/// Owned by exactly one scene at a time and handed over explicitly; there is
/// no shared global instance.
#[derive(Clone, Debug)]
pub struct GridInventory {
    config: InventoryConfig,
    grid: Grid,
    items: BTreeMap<ItemInstanceId, PlacedItem>,
    next_id: u64,
}

impl GridInventory {
    /// Creates an empty inventory of `width` x `height` cells.
    pub fn new(width: u32, height: u32, max_weight: u32) -> Self {
        Self::with_config(InventoryConfig::new(width, height, max_weight))
    }

    pub fn with_config(config: InventoryConfig) -> Self {
        Self {
            config,
            grid: Grid::new(config.width, config.height),
            items: BTreeMap::new(),
            next_id: 0,
        }
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> u32 {
        self.config.width
    }

    pub fn height(&self) -> u32 {
        self.config.height
    }

    pub fn max_weight(&self) -> u32 {
        self.config.max_weight
    }

    fn allocate_id(&mut self) -> ItemInstanceId {
        let id = ItemInstanceId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Exact sum of item weights, `None` if it does not fit in `u64`.
    fn load(&self) -> Option<u64> {
        self.items
            .values()
            .try_fold(0u64, |total, item| total.checked_add(item.weight()))
    }

    /// Fails with `CapacityExceeded` if `additional` weight does not fit.
    fn ensure_capacity(&self, additional: u64) -> Result<(), InventoryError> {
        let available = self.remaining_capacity();
        if additional > available {
            return Err(InventoryError::CapacityExceeded {
                required: additional,
                available,
            });
        }
        Ok(())
    }

    fn live_item(&self, id: ItemInstanceId) -> Result<&PlacedItem, InventoryError> {
        self.items.get(&id).ok_or(InventoryError::NotFound { id })
    }
}

impl Default for GridInventory {
    fn default() -> Self {
        Self::with_config(InventoryConfig::default())
    }
}
