//! Named item catalog.

use std::collections::BTreeMap;

use inventory_core::{GridInventory, InventoryError, ItemDescriptor, ItemInstanceId};
use tracing::{debug, trace};

/// Catalog entry: the descriptor plus the footprint the item takes in a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogEntry {
    pub descriptor: ItemDescriptor,
    pub width: u32,
    pub height: u32,
}

impl CatalogEntry {
    pub fn new(descriptor: ItemDescriptor, width: u32, height: u32) -> Self {
        Self {
            descriptor,
            width,
            height,
        }
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown item '{0}'")]
    UnknownItem(String),

    #[error("duplicate catalog entry '{0}'")]
    DuplicateItem(String),

    #[error("catalog entry '{name}' has invalid footprint {width}x{height}")]
    InvalidFootprint {
        name: String,
        width: u32,
        height: u32,
    },

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

/// Item entries indexed by exact name.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog, rejecting duplicate names and zero-sized footprints.
    pub fn from_entries(
        entries: impl IntoIterator<Item = CatalogEntry>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.insert(entry)?;
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, entry: CatalogEntry) -> Result<(), CatalogError> {
        if entry.width == 0 || entry.height == 0 {
            return Err(CatalogError::InvalidFootprint {
                name: entry.descriptor.name,
                width: entry.width,
                height: entry.height,
            });
        }
        if self.entries.contains_key(entry.name()) {
            return Err(CatalogError::DuplicateItem(entry.descriptor.name));
        }
        self.entries.insert(entry.descriptor.name.clone(), entry);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    /// Entry names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds `count` units of a catalog item, merging into an existing stack
    /// when one has room, otherwise auto-placing a new one.
    ///
    /// A single call never creates a stack above the entry's stack limit.
    pub fn stock(
        &self,
        inventory: &mut GridInventory,
        name: &str,
        count: u32,
    ) -> Result<ItemInstanceId, CatalogError> {
        let entry = self
            .get(name)
            .ok_or_else(|| CatalogError::UnknownItem(name.to_owned()))?;
        let max_stack = entry.descriptor.stack_limit();
        if count > max_stack {
            return Err(InventoryError::StackLimitExceeded {
                requested: count,
                max_stack,
            }
            .into());
        }

        if let Some(id) = inventory.find_stack(&entry.descriptor) {
            let room = inventory
                .item_by_id(id)
                .map(|item| max_stack.saturating_sub(item.stack_count()))
                .unwrap_or(0);
            if count <= room {
                let total = inventory.increase_stack(id, count).inspect_err(
                    |error| trace!(item = name, count, %error, "stock merge rejected"),
                )?;
                debug!(%id, item = name, count = total, "stock merged into stack");
                return Ok(id);
            }
        }

        let id = inventory
            .add_item(
                entry.descriptor.clone(),
                entry.width,
                entry.height,
                None,
                count,
            )
            .inspect_err(|error| trace!(item = name, count, %error, "stock rejected"))?;
        debug!(%id, item = name, count, "stock placed");
        Ok(id)
    }
}
