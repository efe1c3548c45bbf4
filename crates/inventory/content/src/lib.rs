//! Data-driven item catalog and inventory configuration.
//!
//! This crate is the item-catalog collaborator of `inventory-core`:
//! - Item catalogs (data-driven via RON): descriptor plus natural footprint
//! - Inventory configuration (data-driven via TOML): grid size and weight ceiling
//!
//! Content is handed to the core by value and never referenced afterwards.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{Catalog, CatalogEntry, CatalogError};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemLoader};
