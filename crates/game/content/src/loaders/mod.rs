//! Content loaders for reading battle data from files.
//!
//! Item catalogs and actor rosters are RON; the battle configuration is TOML.
//! Every loader reports failures as [`anyhow::Error`] carrying the file and
//! the underlying cause.

pub mod actors;
pub mod config;
pub mod item;

pub use actors::{ActorLoader, ActorRoster, ActorSpec};
pub use config::ConfigLoader;
pub use item::{ItemCatalog, ItemLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
