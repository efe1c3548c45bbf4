use crate::grid::CellPosition;

use super::{GridInventory, ItemInstanceId, PlacedItem};

impl GridInventory {
    /// Live item covering `position`, if any. Out-of-grid positions yield `None`.
    pub fn item_at_cell(&self, position: CellPosition) -> Option<&PlacedItem> {
        self.grid
            .occupant(position)
            .and_then(|id| self.items.get(&id))
    }

    pub fn item_by_id(&self, id: ItemInstanceId) -> Option<&PlacedItem> {
        self.items.get(&id)
    }

    /// Live items in id order.
    pub fn items(&self) -> impl Iterator<Item = &PlacedItem> + '_ {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of `weight * stack_count` over all live items.
    ///
    /// Live loads never exceed `max_weight`, so the sum is exact; only a
    /// state that [`GridInventory::verify_invariants`] rejects reports `u64::MAX`.
    pub fn total_weight(&self) -> u64 {
        self.load().unwrap_or(u64::MAX)
    }

    /// Weight that can still be added before hitting the ceiling.
    pub fn remaining_capacity(&self) -> u64 {
        u64::from(self.config.max_weight).saturating_sub(self.total_weight())
    }

    pub fn free_cell_count(&self) -> usize {
        self.grid.free_cell_count()
    }

    /// Total stack count of items whose descriptor name equals `name` exactly.
    pub fn count_by_name(&self, name: &str) -> u32 {
        self.items
            .values()
            .filter(|item| item.descriptor.name == name)
            .fold(0u32, |total, item| total.saturating_add(item.stack_count))
    }

    /// True if at least `min_count` units named `name` are carried.
    pub fn has_item(&self, name: &str, min_count: u32) -> bool {
        self.count_by_name(name) >= min_count
    }
}
