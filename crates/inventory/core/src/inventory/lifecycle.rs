use super::{GridInventory, InventoryError, ItemInstanceId, PlacedItem};

impl GridInventory {
    /// Removes a live item, frees its cells and returns its record.
    pub fn remove_item(&mut self, id: ItemInstanceId) -> Result<PlacedItem, InventoryError> {
        let item = self
            .items
            .remove(&id)
            .ok_or(InventoryError::NotFound { id })?;
        self.grid.release(item.anchor, item.effective_footprint(), id);
        Ok(item)
    }

    /// Same as [`GridInventory::remove_item`]; what happens to the item
    /// afterwards (left at the roadside, handed to an NPC) is up to the caller.
    pub fn drop_item(&mut self, id: ItemInstanceId) -> Result<PlacedItem, InventoryError> {
        self.remove_item(id)
    }

    /// Removes every item. Dimensions, weight ceiling and the id counter are kept.
    pub fn clear(&mut self) {
        self.items.clear();
        self.grid.release_all();
    }

    /// Changes the carry-weight ceiling.
    ///
    /// A ceiling below the current total weight is rejected so the loaded
    /// items never exceed it.
    pub fn set_max_weight(&mut self, max_weight: u32) -> Result<(), InventoryError> {
        let total = self.total_weight();
        if total > u64::from(max_weight) {
            return Err(InventoryError::CapacityExceeded {
                required: total,
                available: u64::from(max_weight),
            });
        }
        self.config.max_weight = max_weight;
        Ok(())
    }
}
