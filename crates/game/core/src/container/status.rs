use crate::config::BattleConfig;
use crate::error::{ConfigError, RejectReason, Rejected};
use crate::item::Item;

use super::Container;

/// Status effects on a character.
///
/// In stacking mode, adding a name that is already present merges the
/// newcomer's own stat into the existing entry instead of failing.
#[derive(Clone, Debug)]
pub struct Statuses {
    items: Container,
    stacking: bool,
}

impl Statuses {
    pub fn with_capacity(capacity: usize, stacking: bool) -> Result<Self, ConfigError> {
        Ok(Self {
            items: Container::with_capacity("status", capacity)?,
            stacking,
        })
    }

    pub fn is_stacking(&self) -> bool {
        self.stacking
    }

    /// True when adding an item named `name` would merge into an entry.
    pub fn stacks_onto(&self, name: &str) -> bool {
        self.stacking && self.items.contains(name)
    }

    /// True when an entry named `name` is held but has deactivated itself.
    pub fn is_expired(&self, name: &str) -> bool {
        self.items.get(name).is_some_and(|item| !item.is_active())
    }

    pub fn check_add(&self, name: &str) -> Result<(), RejectReason> {
        if self.stacks_onto(name) {
            return Ok(());
        }
        self.items.check_add(name)
    }

    /// Adds or merges `item`, returning the stored entry.
    pub fn add(&mut self, item: Item) -> Result<&mut Item, Rejected> {
        if self.stacking
            && let Some(index) = self.items.position(item.name())
        {
            let existing = &mut self.items.entries[index];
            existing.core.stat += item.core.stat;
            tracing::debug!(
                status = %existing.name(),
                health = existing.core.stat.health,
                "status stacked"
            );
            return Ok(existing);
        }
        self.items.add(item)
    }

    pub fn remove(&mut self, name: &str) -> Option<Item> {
        self.items.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.items.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Item> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Statuses {
    fn default() -> Self {
        Self {
            items: Container::bounded(BattleConfig::DEFAULT_STATUS_CAPACITY),
            stacking: false,
        }
    }
}
