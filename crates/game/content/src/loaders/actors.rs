//! Actor roster loader.
//!
//! A roster lists characters by descriptor and base stat, plus the catalog
//! names of what they start with equipped and afflicted by.

use std::path::Path;

use duel_core::{BattleConfig, Character, CharacterSpec, Descriptor, Item, Stat};
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::loaders::{LoadResult, read_file};

/// One character entry in a roster file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorSpec {
    pub descriptor: Descriptor,
    pub stat: Stat,
    /// Catalog names, equipped in order.
    pub equipment: Vec<String>,
    /// Catalog names, applied in order after equipping.
    pub statuses: Vec<String>,
}

/// Roster structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActorRoster {
    pub actors: Vec<ActorSpec>,
}

/// Loader for character rosters from RON files.
pub struct ActorLoader;

impl ActorLoader {
    /// Load a roster from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing ActorRoster
    /// * `config` - Capacities every character is built with
    ///
    /// # Returns
    ///
    /// Returns the characters, fully equipped, in file order.
    pub fn load(path: &Path, config: &BattleConfig) -> LoadResult<Vec<Character>> {
        let content = read_file(path)?;
        Self::parse(&content, config)
    }

    /// Parse a roster from RON text.
    pub fn parse(content: &str, config: &BattleConfig) -> LoadResult<Vec<Character>> {
        let roster: ActorRoster = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse actor roster RON: {}", e))?;

        let actors = roster
            .actors
            .into_iter()
            .map(|spec| Self::build(spec, config))
            .collect::<LoadResult<Vec<_>>>()?;

        tracing::debug!(count = actors.len(), "actor roster loaded");
        Ok(actors)
    }

    fn build(spec: ActorSpec, config: &BattleConfig) -> LoadResult<Character> {
        let ActorSpec {
            descriptor,
            stat,
            equipment,
            statuses,
        } = spec;
        let mut actor = Character::from_spec(CharacterSpec { descriptor, stat }, config)
            .map_err(|e| anyhow::anyhow!("Invalid battle config: {}", e))?;

        let who = actor.name().to_owned();
        for name in &equipment {
            let item = Self::resolve(&who, name)?;
            actor
                .equip(item)
                .map_err(|e| anyhow::anyhow!("Actor `{}` cannot equip {}", who, e))?;
        }
        for name in &statuses {
            let item = Self::resolve(&who, name)?;
            actor
                .apply(item)
                .map_err(|e| anyhow::anyhow!("Actor `{}` cannot apply {}", who, e))?;
        }
        Ok(actor)
    }

    fn resolve(actor: &str, name: &str) -> LoadResult<Item> {
        catalog::by_name(name)
            .ok_or_else(|| anyhow::anyhow!("Actor `{}` references unknown item `{}`", actor, name))
    }
}
