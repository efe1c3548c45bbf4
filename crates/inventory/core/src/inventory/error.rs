//! Inventory operation errors.

use crate::error::{ClassifiedError, ErrorSeverity};
use crate::grid::CellPosition;

use super::ItemInstanceId;

/// Errors returned by [`GridInventory`](super::GridInventory) operations.
///
/// All variants are ordinary outcomes; none of them leaves the inventory in a
/// modified state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    /// Target rectangle collides with another item or leaves the grid.
    #[error("cannot place {width}x{height} item at {position}")]
    InvalidPlacement {
        position: CellPosition,
        width: u32,
        height: u32,
    },

    /// Carry weight ceiling would be exceeded.
    #[error("carry weight exceeded (required: {required}, available: {available})")]
    CapacityExceeded {
        /// Weight the operation needs room for.
        required: u64,
        /// Weight still available under the ceiling.
        available: u64,
    },

    /// Auto-placement found no free anchor.
    #[error("no free {width}x{height} area left in the grid")]
    NoSpaceAvailable { width: u32, height: u32 },

    /// Item id is not live.
    #[error("item {id} not found")]
    NotFound { id: ItemInstanceId },

    /// Footprint has a zero extent.
    #[error("invalid footprint {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Stack count or amount of zero, or an amount the stack cannot hold.
    #[error("invalid quantity {count}")]
    InvalidQuantity { count: u32 },

    /// Stack count above the descriptor's stack limit.
    #[error("stack of {requested} exceeds limit {max_stack}")]
    StackLimitExceeded { requested: u32, max_stack: u32 },
}

impl ClassifiedError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        use InventoryError::*;
        match self {
            InvalidPlacement { .. } | CapacityExceeded { .. } | NoSpaceAvailable { .. } => {
                ErrorSeverity::Recoverable
            }

            NotFound { .. }
            | InvalidDimensions { .. }
            | InvalidQuantity { .. }
            | StackLimitExceeded { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use InventoryError::*;
        match self {
            InvalidPlacement { .. } => "INVENTORY_INVALID_PLACEMENT",
            CapacityExceeded { .. } => "INVENTORY_CAPACITY_EXCEEDED",
            NoSpaceAvailable { .. } => "INVENTORY_NO_SPACE_AVAILABLE",
            NotFound { .. } => "INVENTORY_NOT_FOUND",
            InvalidDimensions { .. } => "INVENTORY_INVALID_DIMENSIONS",
            InvalidQuantity { .. } => "INVENTORY_INVALID_QUANTITY",
            StackLimitExceeded { .. } => "INVENTORY_STACK_LIMIT_EXCEEDED",
        }
    }
}
