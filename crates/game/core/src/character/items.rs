//! Equip, consume and status operations.
//!
//! Every operation re-runs its check first and mutates nothing on failure.
//! Owned inputs come back inside [`Rejected`].

use crate::descriptor::Descriptor;
use crate::error::{RejectReason, Rejected};
use crate::item::{Capabilities, Item};
use crate::stats::Stat;

use super::Character;

impl Character {
    // ========================================================================
    // Equipment
    // ========================================================================

    pub fn check_equip(&self, item: &Item) -> Result<(), RejectReason> {
        if !item.has(Capabilities::EQUIP) {
            return Err(RejectReason::MissingCapability(Capabilities::EQUIP));
        }
        if !item.behavior.can_equip(&item.core, &self.stat) {
            return Err(RejectReason::Ineligible);
        }
        self.equipment.check_add(item).map(|_| ())
    }

    pub fn can_equip(&self, item: &Item) -> bool {
        self.check_equip(item).is_ok()
    }

    /// Equips `item`: stores it in a free allowed slot, runs its behavior's
    /// `on_equip` (by default adding the on-equip delta) and binds it.
    pub fn equip(&mut self, item: Item) -> Result<&mut Item, Rejected> {
        if let Err(reason) = self.check_equip(&item) {
            tracing::debug!(holder = %self.name(), item = %item.name(), %reason, "equip rejected");
            return Err(Rejected::new(item, reason));
        }
        let stored = self.equipment.add(item)?;
        stored.behavior.on_equip(&mut stored.core, &mut self.stat);
        stored.core.bind(&self.descriptor.name);
        tracing::debug!(holder = %self.descriptor.name, item = %stored.name(), "equipped");
        Ok(stored)
    }

    pub fn check_unequip(&self, name: &str) -> Result<(), RejectReason> {
        let item = self.equipment.get(name).ok_or(RejectReason::NotPresent)?;
        if !item.behavior.can_unequip(&item.core, &self.stat) {
            return Err(RejectReason::CannotRemove);
        }
        Ok(())
    }

    pub fn can_unequip(&self, name: &str) -> bool {
        self.check_unequip(name).is_ok()
    }

    /// Unequips the item named `name` and runs its behavior's `on_unequip`,
    /// which by default reverses the on-equip delta.
    pub fn unequip(&mut self, name: &str) -> Result<Item, RejectReason> {
        self.check_unequip(name)?;
        let mut item = self
            .equipment
            .remove(name)
            .ok_or(RejectReason::NotPresent)?;
        item.behavior.on_unequip(&mut item.core, &mut self.stat);
        item.core.unbind();
        tracing::debug!(holder = %self.name(), item = %name, "unequipped");
        Ok(item)
    }

    // ========================================================================
    // Consumables
    // ========================================================================

    pub fn check_consume(&self, item: &Item) -> Result<(), RejectReason> {
        if !item.has(Capabilities::CONSUME) {
            return Err(RejectReason::MissingCapability(Capabilities::CONSUME));
        }
        if !item.behavior.can_consume(&item.core, &self.stat) {
            return Err(RejectReason::Ineligible);
        }
        Ok(())
    }

    pub fn can_consume(&self, item: &Item) -> bool {
        self.check_consume(item).is_ok()
    }

    /// Consumes `item` through its behavior's `on_consume`, which by default
    /// adds the on-consume delta. The spent item is returned and never stored.
    pub fn consume(&mut self, mut item: Item) -> Result<Item, Rejected> {
        if let Err(reason) = self.check_consume(&item) {
            return Err(Rejected::new(item, reason));
        }
        item.behavior.on_consume(&mut item.core, &mut self.stat);
        tracing::debug!(holder = %self.name(), item = %item.name(), "consumed");
        Ok(item)
    }

    // ========================================================================
    // Status effects
    // ========================================================================

    pub fn check_apply(&self, item: &Item) -> Result<(), RejectReason> {
        if !item.has(Capabilities::STATUS) {
            return Err(RejectReason::MissingCapability(Capabilities::STATUS));
        }
        if !item.behavior.can_apply(&item.core, &self.stat) {
            return Err(RejectReason::Ineligible);
        }
        if self.replaces_expired(item.name()) {
            return Ok(());
        }
        self.statuses.check_add(item.name())
    }

    /// A fresh effect takes the place of an expired one with the same name
    /// unless statuses stack.
    fn replaces_expired(&self, name: &str) -> bool {
        !self.statuses.is_stacking() && self.statuses.is_expired(name)
    }

    pub fn can_apply(&self, item: &Item) -> bool {
        self.check_apply(item).is_ok()
    }

    /// Applies a status effect.
    ///
    /// A fresh effect is bound, activated, gets its on-apply delta added to
    /// the holder once and then runs its behavior's `on_apply`. When stacking
    /// onto an existing effect only the effect's own stat is merged. An
    /// expired effect of the same name is released and replaced.
    pub fn apply(&mut self, item: Item) -> Result<&mut Item, Rejected> {
        if let Err(reason) = self.check_apply(&item) {
            tracing::debug!(holder = %self.name(), status = %item.name(), %reason, "apply rejected");
            return Err(Rejected::new(item, reason));
        }
        if self.statuses.stacks_onto(item.name()) {
            return self.statuses.add(item);
        }
        if self.replaces_expired(item.name())
            && let Some(stale) = self.statuses.remove(item.name())
        {
            self.release_status(stale);
        }

        let delta = item.core.status().map_or(Stat::ZERO, |cap| cap.stat_on_apply);
        let stored = self.statuses.add(item)?;
        stored.core.bind(&self.descriptor.name);
        stored.core.active = true;
        self.stat += delta;
        stored.behavior.on_apply(&mut stored.core, &mut self.stat);
        tracing::debug!(holder = %self.descriptor.name, status = %stored.name(), "status applied");
        Ok(stored)
    }

    pub fn check_unapply(&self, name: &str) -> Result<(), RejectReason> {
        let item = self.statuses.get(name).ok_or(RejectReason::NotPresent)?;
        if !item.behavior.can_remove(&item.core, &self.stat) {
            return Err(RejectReason::CannotRemove);
        }
        Ok(())
    }

    pub fn can_unapply(&self, name: &str) -> bool {
        self.check_unapply(name).is_ok()
    }

    /// Removes the status named `name`, running its behavior's `on_unapply`
    /// before unbinding it.
    pub fn unapply(&mut self, name: &str) -> Result<Item, RejectReason> {
        self.check_unapply(name)?;
        let item = self.statuses.remove(name).ok_or(RejectReason::NotPresent)?;
        Ok(self.release_status(item))
    }

    /// Removes every status that has deactivated itself.
    pub fn clear_expired(&mut self) -> Vec<Item> {
        let expired: Vec<String> = self
            .statuses
            .iter()
            .filter(|item| !item.is_active())
            .map(|item| item.name().to_owned())
            .collect();
        let mut released = Vec::with_capacity(expired.len());
        for name in &expired {
            if let Some(item) = self.statuses.remove(name) {
                released.push(self.release_status(item));
            }
        }
        released
    }

    fn release_status(&mut self, mut item: Item) -> Item {
        item.behavior.on_unapply(&mut item.core, &mut self.stat);
        item.core.unbind();
        item.core.active = false;
        tracing::debug!(holder = %self.name(), status = %item.name(), "status removed");
        item
    }

    // ========================================================================
    // Equipment queries
    // ========================================================================

    /// Sum of own defense over equipped defending items.
    pub fn defense_by_equipment(&self) -> i32 {
        self.equipment
            .iter()
            .map(Item::defense_contribution)
            .sum()
    }

    /// Sum of defend-scoped bonuses over equipped defending items that are
    /// not broken.
    pub fn defend_bonus(&self) -> Stat {
        self.equipment
            .iter()
            .filter(|item| item.can_guard())
            .fold(Stat::ZERO, |acc, item| acc + item.stat_on_defend())
    }

    /// Own attack the equipped item `name` adds against `opponent`.
    pub fn item_attack(&self, name: &str, opponent: &Descriptor) -> i32 {
        self.equipment
            .get(name)
            .map_or(0, |item| item.attack_contribution(opponent))
    }

    /// Own defense the equipped item `name` puts up.
    pub fn item_defend(&self, name: &str) -> i32 {
        self.equipment
            .get(name)
            .map_or(0, Item::defense_contribution)
    }

    /// Wears every working defending item after absorbing a strike.
    pub(crate) fn wear_defenders(&mut self) {
        for item in self.equipment.iter_mut() {
            if item.can_guard() {
                item.wear_out();
            }
        }
    }
}
