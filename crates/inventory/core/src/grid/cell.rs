use std::fmt;

use crate::inventory::ItemInstanceId;

/// Grid coordinate expressed in cells, origin at the top-left.
///
/// Coordinates are signed so callers can pass whatever their pointer
/// conversion produced; anything outside the grid is rejected by bounds checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPosition {
    pub x: i32,
    pub y: i32,
}

impl CellPosition {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for CellPosition {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One unit of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    occupant: Option<ItemInstanceId>,
}

impl Cell {
    pub const EMPTY: Self = Self { occupant: None };

    pub fn occupant(&self) -> Option<ItemInstanceId> {
        self.occupant
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// True if the cell is free or already belongs to `ignore`.
    pub fn is_available_for(&self, ignore: Option<ItemInstanceId>) -> bool {
        match self.occupant {
            None => true,
            Some(occupant) => Some(occupant) == ignore,
        }
    }

    pub(crate) fn claim(&mut self, id: ItemInstanceId) {
        self.occupant = Some(id);
    }

    pub(crate) fn release(&mut self) {
        self.occupant = None;
    }
}
