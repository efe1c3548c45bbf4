//! Spatial grid inventory shared by the road-trip scenes.
//!
//! `inventory-core` owns a fixed-size grid of cells and the items placed on
//! it. Every mutation flows through [`GridInventory`], which keeps occupancy,
//! bounds and carry-weight consistent: a failed call never leaves partial
//! state behind. Rendering, input and item content live in collaborators that
//! only see the operations and snapshots re-exported here.
pub mod config;
pub mod error;
pub mod grid;
pub mod inventory;
pub mod item;
pub mod snapshot;

pub use config::InventoryConfig;
pub use error::{ClassifiedError, ErrorSeverity};
pub use grid::{Cell, CellPosition, Footprint, Grid};
pub use inventory::{GridInventory, InvariantViolation, InventoryError, ItemInstanceId, PlacedItem};
pub use item::{ItemCategory, ItemDescriptor, Rarity};
pub use snapshot::{InventorySnapshot, ItemView};
