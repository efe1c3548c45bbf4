//! Stack counts on existing placements.
//!
//! Deciding whether two pickups should merge is the caller's business. These
//! operations never grow a stack past `stack_limit` and keep the total weight
//! under the ceiling. A stack added above its limit may still shrink.

use crate::item::ItemDescriptor;

use super::{GridInventory, InventoryError, ItemInstanceId, PlacedItem};

impl GridInventory {
    /// Sets the stack count of a live item.
    ///
    /// Growing checks the stack limit and the weight ceiling; shrinking only
    /// requires a non-zero count.
    pub fn set_stack_count(&mut self, id: ItemInstanceId, count: u32) -> Result<(), InventoryError> {
        let item = self.live_item(id)?;
        if count == 0 {
            return Err(InventoryError::InvalidQuantity { count });
        }
        if count > item.stack_count {
            let max_stack = item.descriptor.stack_limit();
            if count > max_stack {
                return Err(InventoryError::StackLimitExceeded {
                    requested: count,
                    max_stack,
                });
            }
            let added = item.descriptor.weight_of(count - item.stack_count);
            self.ensure_capacity(added)?;
        }

        if let Some(item) = self.items.get_mut(&id) {
            item.stack_count = count;
        }
        Ok(())
    }

    /// Adds `amount` units to a live stack.
    ///
    /// An amount that would push the count past `u32::MAX` is an
    /// `InvalidQuantity`.
    pub fn increase_stack(&mut self, id: ItemInstanceId, amount: u32) -> Result<u32, InventoryError> {
        if amount == 0 {
            return Err(InventoryError::InvalidQuantity { count: amount });
        }
        let current = self.live_item(id)?.stack_count;
        let count = current
            .checked_add(amount)
            .ok_or(InventoryError::InvalidQuantity { count: amount })?;
        self.set_stack_count(id, count)?;
        Ok(count)
    }

    /// Takes `amount` units from a live stack.
    ///
    /// Taking the whole stack removes the placement and returns it; taking
    /// more than the stack holds fails without change.
    pub fn decrease_stack(
        &mut self,
        id: ItemInstanceId,
        amount: u32,
    ) -> Result<Option<PlacedItem>, InventoryError> {
        if amount == 0 {
            return Err(InventoryError::InvalidQuantity { count: amount });
        }
        let current = self.live_item(id)?.stack_count;
        match current.checked_sub(amount) {
            None => Err(InventoryError::InvalidQuantity { count: amount }),
            Some(0) => self.remove_item(id).map(Some),
            Some(remaining) => {
                self.set_stack_count(id, remaining)?;
                Ok(None)
            }
        }
    }

    /// Lowest-id live stack with the same descriptor and room for one more unit.
    pub fn find_stack(&self, descriptor: &ItemDescriptor) -> Option<ItemInstanceId> {
        self.items
            .values()
            .find(|item| {
                item.descriptor == *descriptor && item.stack_count < descriptor.stack_limit()
            })
            .map(PlacedItem::id)
    }
}
