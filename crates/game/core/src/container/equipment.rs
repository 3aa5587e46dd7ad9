use strum::EnumCount;

use crate::config::BattleConfig;
use crate::error::{ConfigError, RejectReason, Rejected};
use crate::item::{Capabilities, Item};

use super::{Container, EquipSlot};

/// Equipped items plus the slot each one occupies.
///
/// An item is in the container iff it occupies exactly one of its allowed
/// slots; both maps change together or not at all.
#[derive(Clone, Debug)]
pub struct Equipment {
    items: Container,
    slots: [Option<String>; EquipSlot::COUNT],
}

impl Equipment {
    pub fn with_capacity(capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            items: Container::with_capacity("equipment", capacity)?,
            slots: std::array::from_fn(|_| None),
        })
    }

    /// Checks whether `item` could be equipped and picks its slot: the first
    /// free one among its allowed slots, in slot order.
    pub fn check_add(&self, item: &Item) -> Result<EquipSlot, RejectReason> {
        let cap = item
            .core()
            .equip()
            .ok_or(RejectReason::MissingCapability(Capabilities::EQUIP))?;
        if cap.slots.is_empty() {
            return Err(RejectReason::NoSlotDeclared);
        }
        self.items.check_add(item.name())?;
        cap.slots
            .slots()
            .find(|slot| self.slots[slot.index()].is_none())
            .ok_or(RejectReason::SlotOccupied)
    }

    /// Stores `item` in its slot, returning the stored entry.
    pub fn add(&mut self, item: Item) -> Result<&mut Item, Rejected> {
        let slot = match self.check_add(&item) {
            Ok(slot) => slot,
            Err(reason) => return Err(Rejected::new(item, reason)),
        };
        let name = item.name().to_owned();
        let stored = self.items.add(item)?;
        tracing::trace!(item = %name, %slot, "slot filled");
        self.slots[slot.index()] = Some(name);
        Ok(stored)
    }

    /// Removes the item named `name` and frees its slot.
    pub fn remove(&mut self, name: &str) -> Option<Item> {
        let item = self.items.remove(name)?;
        if let Some(slot) = self.slot_of(name) {
            self.slots[slot.index()] = None;
        }
        Some(item)
    }

    /// Slot held by the item named `name`.
    pub fn slot_of(&self, name: &str) -> Option<EquipSlot> {
        use strum::IntoEnumIterator;
        EquipSlot::iter().find(|slot| self.slots[slot.index()].as_deref() == Some(name))
    }

    /// Name of the item in `slot`.
    pub fn occupant(&self, slot: EquipSlot) -> Option<&str> {
        self.slots[slot.index()].as_deref()
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

    /// Names in equip order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.names()
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

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }
}

impl Default for Equipment {
    fn default() -> Self {
        Self {
            items: Container::bounded(BattleConfig::DEFAULT_EQUIPMENT_CAPACITY),
            slots: std::array::from_fn(|_| None),
        }
    }
}
