//! Cell storage and rectangle geometry.
//!
//! The grid knows nothing about items beyond the id stamped into each claimed
//! cell; [`GridInventory`](crate::GridInventory) decides what may be claimed.
mod cell;
mod footprint;
mod storage;

pub use cell::{Cell, CellPosition};
pub use footprint::Footprint;
pub use storage::Grid;
