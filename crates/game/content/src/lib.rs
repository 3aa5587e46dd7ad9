//! Concrete battle content and loaders.
//!
//! This crate houses the built-in item catalog and provides loaders for
//! RON/TOML data files:
//! - Swords, armor and potions (code-defined, see [`catalog`])
//! - Status afflictions with per-turn effects
//! - Item catalogs (data-driven via RON)
//! - Actor rosters (data-driven via RON)
//! - Battle configuration (data-driven via TOML)
//!
//! Items with custom behavior are code-defined; data files either describe
//! plain items or refer to catalog entries by name.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{NAMES, by_name};

#[cfg(feature = "loaders")]
pub use loaders::{ActorLoader, ActorRoster, ActorSpec, ConfigLoader, ItemCatalog, ItemLoader};
