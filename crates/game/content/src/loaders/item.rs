//! Item catalog loader.

use std::path::Path;

use duel_core::{Item, ItemSpec};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemSpec>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing ItemCatalog
    ///
    /// # Returns
    ///
    /// Returns the built items, in file order. Items from data files carry
    /// the standard behavior.
    pub fn load(path: &Path) -> LoadResult<Vec<Item>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an item catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<Item>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let items = catalog
            .items
            .into_iter()
            .map(|spec| {
                let name = spec.descriptor.name.clone();
                Item::from_spec(spec)
                    .map_err(|e| anyhow::anyhow!("Invalid item `{}`: {}", name, e))
            })
            .collect::<LoadResult<Vec<_>>>()?;

        tracing::debug!(count = items.len(), "item catalog loaded");
        Ok(items)
    }
}
