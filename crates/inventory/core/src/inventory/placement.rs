//! Collision checks, auto-placement and the add/move/rotate operations.

use crate::grid::{CellPosition, Footprint};
use crate::item::ItemDescriptor;

use super::{GridInventory, InventoryError, ItemInstanceId, PlacedItem};

impl GridInventory {
    /// Returns true if a `width` x `height` rectangle anchored at `position`
    /// lies inside the grid and every covered cell is free or owned by `ignore`.
    pub fn can_place_item(
        &self,
        position: CellPosition,
        width: u32,
        height: u32,
        ignore: Option<ItemInstanceId>,
    ) -> bool {
        self.grid
            .is_free(position, Footprint::new(width, height), ignore)
    }

    /// First free anchor for a `width` x `height` footprint.
    ///
    /// Scans rows top to bottom and, within a row, columns left to right, so
    /// the same occupancy always yields the same anchor.
    pub fn find_available_position(&self, width: u32, height: u32) -> Option<CellPosition> {
        let footprint = Footprint::new(width, height);
        if !footprint.is_valid() || width > self.grid.width() || height > self.grid.height() {
            return None;
        }

        let max_x = self.grid.width() - width;
        let max_y = self.grid.height() - height;
        (0..=max_y)
            .flat_map(|y| (0..=max_x).map(move |x| CellPosition::new(x as i32, y as i32)))
            .find(|&anchor| self.grid.is_free(anchor, footprint, None))
    }

    /// Adds `count` units of `descriptor` as a single placement.
    ///
    /// With `position == None` the item is auto-placed at the first free
    /// anchor. The weight ceiling is checked before any spatial test. Stack
    /// limits are not applied here: whoever hands over the pickup decides
    /// how many units one placement holds.
    ///
    /// # Errors
    ///
    /// - `InvalidDimensions` / `InvalidQuantity` for zero extents or count
    /// - `CapacityExceeded` if the added weight does not fit
    /// - `InvalidPlacement` if the explicit position is occupied or out of bounds
    /// - `NoSpaceAvailable` if auto-placement finds no anchor
    pub fn add_item(
        &mut self,
        descriptor: ItemDescriptor,
        width: u32,
        height: u32,
        position: Option<CellPosition>,
        count: u32,
    ) -> Result<ItemInstanceId, InventoryError> {
        let footprint = Footprint::new(width, height);
        if !footprint.is_valid() {
            return Err(InventoryError::InvalidDimensions { width, height });
        }
        if count == 0 {
            return Err(InventoryError::InvalidQuantity { count });
        }

        self.ensure_capacity(descriptor.weight_of(count))?;

        let anchor = match position {
            Some(position) => {
                if !self.grid.is_free(position, footprint, None) {
                    return Err(InventoryError::InvalidPlacement {
                        position,
                        width,
                        height,
                    });
                }
                position
            }
            None => self
                .find_available_position(width, height)
                .ok_or(InventoryError::NoSpaceAvailable { width, height })?,
        };

        let id = self.allocate_id();
        self.grid.claim(anchor, footprint, id);
        self.items.insert(
            id,
            PlacedItem {
                id,
                descriptor,
                anchor,
                footprint,
                rotated: false,
                stack_count: count,
            },
        );
        Ok(id)
    }

    /// Adds a single unit at the first free anchor.
    pub fn add_item_auto(
        &mut self,
        descriptor: ItemDescriptor,
        width: u32,
        height: u32,
    ) -> Result<ItemInstanceId, InventoryError> {
        self.add_item(descriptor, width, height, None, 1)
    }

    /// Adds a single unit at an explicit anchor.
    pub fn add_item_at(
        &mut self,
        descriptor: ItemDescriptor,
        width: u32,
        height: u32,
        position: CellPosition,
    ) -> Result<ItemInstanceId, InventoryError> {
        self.add_item(descriptor, width, height, Some(position), 1)
    }

    /// Moves a live item so its anchor becomes `position`.
    ///
    /// The item's own cells do not block the move, so shifting by one cell
    /// into space it already covers is allowed.
    pub fn place_item(
        &mut self,
        id: ItemInstanceId,
        position: CellPosition,
    ) -> Result<(), InventoryError> {
        let item = self.live_item(id)?;
        let footprint = item.effective_footprint();
        let previous = item.anchor;

        if !self.grid.is_free(position, footprint, Some(id)) {
            return Err(InventoryError::InvalidPlacement {
                position,
                width: footprint.width,
                height: footprint.height,
            });
        }

        self.grid.release(previous, footprint, id);
        self.grid.claim(position, footprint, id);
        if let Some(item) = self.items.get_mut(&id) {
            item.anchor = position;
        }
        Ok(())
    }

    /// Rotates a live item by 90 degrees around its anchor.
    ///
    /// If the swapped footprint does not fit at the same anchor the item keeps
    /// its current orientation and cells.
    pub fn rotate_item(&mut self, id: ItemInstanceId) -> Result<(), InventoryError> {
        let item = self.live_item(id)?;
        let anchor = item.anchor;
        let current = item.effective_footprint();
        let rotated = !item.rotated;
        let candidate = item.footprint.effective(rotated);

        if !self.grid.is_free(anchor, candidate, Some(id)) {
            return Err(InventoryError::InvalidPlacement {
                position: anchor,
                width: candidate.width,
                height: candidate.height,
            });
        }

        self.grid.release(anchor, current, id);
        self.grid.claim(anchor, candidate, id);
        if let Some(item) = self.items.get_mut(&id) {
            item.rotated = rotated;
        }
        Ok(())
    }
}
