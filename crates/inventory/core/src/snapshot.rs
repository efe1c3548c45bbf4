//! Read-only views handed to the renderer once per frame.
//!
//! Snapshots are detached copies: the renderer can keep one across frames
//! without holding a borrow on the inventory.

use crate::grid::CellPosition;
use crate::inventory::{GridInventory, ItemInstanceId, PlacedItem};
use crate::item::{ItemCategory, Rarity};

/// Render-facing summary of one placed item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemView {
    pub id: ItemInstanceId,
    pub name: String,
    pub category: ItemCategory,
    pub rarity: Rarity,
    pub anchor: CellPosition,
    /// Occupied width, rotation applied.
    pub width: u32,
    /// Occupied height, rotation applied.
    pub height: u32,
    pub rotated: bool,
    pub stack_count: u32,
    pub weight: u64,
}

impl From<&PlacedItem> for ItemView {
    fn from(item: &PlacedItem) -> Self {
        let footprint = item.effective_footprint();
        Self {
            id: item.id(),
            name: item.name().to_owned(),
            category: item.descriptor().category,
            rarity: item.descriptor().rarity,
            anchor: item.anchor(),
            width: footprint.width,
            height: footprint.height,
            rotated: item.is_rotated(),
            stack_count: item.stack_count(),
            weight: item.weight(),
        }
    }
}

/// Full inventory state at one point in time.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventorySnapshot {
    pub width: u32,
    pub height: u32,
    pub total_weight: u64,
    pub max_weight: u32,
    pub items: Vec<ItemView>,
    /// Row-major occupant ids, `width * height` entries.
    pub cells: Vec<Option<ItemInstanceId>>,
}

impl InventorySnapshot {
    pub fn occupant(&self, position: CellPosition) -> Option<ItemInstanceId> {
        if position.x < 0
            || position.y < 0
            || position.x as u32 >= self.width
            || position.y as u32 >= self.height
        {
            return None;
        }
        let index = position.y as usize * self.width as usize + position.x as usize;
        self.cells.get(index).copied().flatten()
    }

    /// Cell rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<ItemInstanceId>]> + '_ {
        self.cells.chunks(self.width.max(1) as usize)
    }

    pub fn item(&self, id: ItemInstanceId) -> Option<&ItemView> {
        self.items.iter().find(|view| view.id == id)
    }
}

impl GridInventory {
    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            width: self.width(),
            height: self.height(),
            total_weight: self.total_weight(),
            max_weight: self.max_weight(),
            items: self.items().map(ItemView::from).collect(),
            cells: self.grid().cells().iter().map(|cell| cell.occupant()).collect(),
        }
    }
}
