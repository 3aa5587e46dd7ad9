//! Item containers.
//!
//! - [`Container`]: insertion-ordered, name-keyed, bounded collection
//! - [`Equipment`]: a container plus a slot map
//! - [`Statuses`]: a container for status effects, optionally stacking

mod equipment;
mod slot;
mod status;

pub use equipment::Equipment;
pub use slot::{EquipSlot, EquipSlots};
pub use status::Statuses;

use crate::error::{ConfigError, RejectReason, Rejected};
use crate::item::Item;

/// Name-keyed items in insertion order, bounded by a capacity.
///
/// A name occupies at most one entry.
#[derive(Clone, Debug)]
pub struct Container {
    entries: Vec<Item>,
    capacity: usize,
}

impl Container {
    /// Creates an empty container.
    ///
    /// `label` names the container in the error when `capacity` is zero.
    pub fn with_capacity(label: &'static str, capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity { container: label });
        }
        Ok(Self::bounded(capacity))
    }

    fn bounded(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Checks whether an item named `name` could be added.
    pub fn check_add(&self, name: &str) -> Result<(), RejectReason> {
        if self.contains(name) {
            return Err(RejectReason::NameTaken);
        }
        if self.is_full() {
            return Err(RejectReason::ContainerFull);
        }
        Ok(())
    }

    /// Adds `item`, returning the stored entry; on failure the item is handed
    /// back untouched.
    pub fn add(&mut self, item: Item) -> Result<&mut Item, Rejected> {
        if let Err(reason) = self.check_add(item.name()) {
            return Err(Rejected::new(item, reason));
        }
        let index = self.entries.len();
        self.entries.push(item);
        Ok(&mut self.entries[index])
    }

    /// Removes and returns the entry named `name`, keeping the order of the
    /// rest.
    pub fn remove(&mut self, name: &str) -> Option<Item> {
        let index = self.position(name)?;
        Some(self.entries.remove(index))
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.entries.iter().find(|item| item.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.entries.iter_mut().find(|item| item.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Item> {
        self.entries.iter_mut()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Item::name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|item| item.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ConsumeCapability;

    fn potion(name: &str) -> Item {
        Item::builder(name)
            .consume(ConsumeCapability::default())
            .build()
    }

    #[test]
    fn zero_capacity_is_a_config_error() {
        assert_eq!(
            Container::with_capacity("bag", 0).unwrap_err(),
            ConfigError::ZeroCapacity { container: "bag" }
        );
    }

    #[test]
    fn names_are_unique_and_capacity_is_enforced() {
        let mut bag = Container::with_capacity("bag", 2).unwrap();
        bag.add(potion("a")).unwrap();

        let dup = bag.add(potion("a")).unwrap_err();
        assert_eq!(dup.reason, RejectReason::NameTaken);
        assert_eq!(dup.into_item().name(), "a");

        bag.add(potion("b")).unwrap();
        let full = bag.add(potion("c")).unwrap_err();
        assert_eq!(full.reason, RejectReason::ContainerFull);
        assert_eq!(bag.len(), 2);
    }

    #[test]
    fn remove_preserves_order() {
        let mut bag = Container::with_capacity("bag", 4).unwrap();
        for name in ["a", "b", "c"] {
            bag.add(potion(name)).unwrap();
        }
        assert_eq!(bag.remove("b").map(|item| item.name().to_owned()), Some("b".into()));
        assert!(bag.remove("b").is_none());
        assert_eq!(bag.names().collect::<Vec<_>>(), ["a", "c"]);
    }
}
