//! Invariant verification.
//!
//! Rebuilds the expected occupancy from the item records and compares it with
//! the cell grid. Operations never need this; tests and debug overlays do.

use std::collections::BTreeMap;

use crate::grid::CellPosition;

use super::{GridInventory, ItemInstanceId};

/// A broken inventory invariant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("item {id} extends outside the grid")]
    OutOfBounds { id: ItemInstanceId },

    #[error("items {first} and {second} both cover {position}")]
    Overlap {
        position: CellPosition,
        first: ItemInstanceId,
        second: ItemInstanceId,
    },

    #[error("cell {position} records {recorded:?} but item records say {expected:?}")]
    OccupancyMismatch {
        position: CellPosition,
        recorded: Option<ItemInstanceId>,
        expected: Option<ItemInstanceId>,
    },

    #[error("total weight {total} exceeds ceiling {max_weight}")]
    OverWeight { total: u64, max_weight: u32 },

    #[error("total weight does not fit in 64 bits")]
    WeightOverflow,

    #[error("item {id} has invalid stack count {count}")]
    InvalidStack { id: ItemInstanceId, count: u32 },

    #[error("item {id} is not below the id counter {next_id}")]
    StaleCounter { id: ItemInstanceId, next_id: u64 },
}

impl GridInventory {
    /// Checks every structural invariant and reports the first violation.
    pub fn verify_invariants(&self) -> Result<(), InvariantViolation> {
        let mut expected: BTreeMap<CellPosition, ItemInstanceId> = BTreeMap::new();

        for (&id, item) in &self.items {
            if id.0 >= self.next_id {
                return Err(InvariantViolation::StaleCounter {
                    id,
                    next_id: self.next_id,
                });
            }
            if item.stack_count == 0 {
                return Err(InvariantViolation::InvalidStack {
                    id,
                    count: item.stack_count,
                });
            }
            if !self.grid.fits(item.anchor, item.effective_footprint()) {
                return Err(InvariantViolation::OutOfBounds { id });
            }
            for position in item.cells() {
                if let Some(first) = expected.insert(position, id) {
                    return Err(InvariantViolation::Overlap {
                        position,
                        first,
                        second: id,
                    });
                }
            }
        }

        for (position, cell) in self.grid.iter() {
            let recorded = cell.occupant();
            let expected = expected.get(&position).copied();
            if recorded != expected {
                return Err(InvariantViolation::OccupancyMismatch {
                    position,
                    recorded,
                    expected,
                });
            }
        }

        let total = self.load().ok_or(InvariantViolation::WeightOverflow)?;
        if total > u64::from(self.config.max_weight) {
            return Err(InvariantViolation::OverWeight {
                total,
                max_weight: self.config.max_weight,
            });
        }

        Ok(())
    }
}
