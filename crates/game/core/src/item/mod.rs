//! Items and their capabilities.
//!
//! An [`Item`] is the union of the capabilities it holds (equip, attack,
//! defend, consume, status). Capability data lives in [`ItemCore`] and is
//! fixed once the item is built; overridable behavior comes from a shared
//! [`ItemBehavior`] trait object.
//!
//! # Module Structure
//!
//! - `capability`: capability data and the [`Capabilities`] flag set
//! - `behavior`: [`ItemBehavior`] hooks and their defaults
//! - `builder`: [`ItemBuilder`] and [`ItemSpec`] construction

mod behavior;
mod builder;
mod capability;

pub use behavior::{AttackContext, ItemBehavior, StandardBehavior};
pub use builder::{EquipSpec, ItemBuilder, ItemSpec};
pub use capability::{
    AttackCapability, Capabilities, ConsumeCapability, DefendCapability, EquipCapability,
    StatusCapability,
};

use std::sync::Arc;

use crate::action::{ActionContext, ActionRegistry};
use crate::descriptor::Descriptor;
use crate::engine::Phase;
use crate::stats::Stat;

/// The state of an item that behaviors may read and mutate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemCore {
    pub descriptor: Descriptor,
    /// The item's own vitality: durability for gear, remaining duration for
    /// statuses.
    pub stat: Stat,
    /// Status effects clear this when they expire.
    pub active: bool,
    /// Scratch space for values an effect overrides on its holder and
    /// restores later.
    pub saved: Stat,
    equipped_by: Option<String>,
    equip: Option<EquipCapability>,
    consume: Option<ConsumeCapability>,
    attack: Option<AttackCapability>,
    defend: Option<DefendCapability>,
    status: Option<StatusCapability>,
}

impl ItemCore {
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    pub fn capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::empty();
        caps.set(Capabilities::EQUIP, self.equip.is_some());
        caps.set(Capabilities::ATTACK, self.attack.is_some());
        caps.set(Capabilities::DEFEND, self.defend.is_some());
        caps.set(Capabilities::CONSUME, self.consume.is_some());
        caps.set(Capabilities::STATUS, self.status.is_some());
        caps
    }

    pub fn equip(&self) -> Option<&EquipCapability> {
        self.equip.as_ref()
    }

    pub fn consume(&self) -> Option<&ConsumeCapability> {
        self.consume.as_ref()
    }

    pub fn attack(&self) -> Option<&AttackCapability> {
        self.attack.as_ref()
    }

    pub fn defend(&self) -> Option<&DefendCapability> {
        self.defend.as_ref()
    }

    pub fn status(&self) -> Option<&StatusCapability> {
        self.status.as_ref()
    }

    /// Name of the character currently holding the item, if bound.
    ///
    /// A lookup key only; the holder's container owns the item.
    pub fn equipped_by(&self) -> Option<&str> {
        self.equipped_by.as_deref()
    }

    pub fn is_equipped(&self) -> bool {
        self.equipped_by.is_some()
    }

    pub(crate) fn bind(&mut self, holder: &str) {
        self.equipped_by = Some(holder.to_owned());
    }

    pub(crate) fn unbind(&mut self) {
        self.equipped_by = None;
    }
}

/// A named item with capabilities, actions and behavior.
#[derive(Clone, Debug)]
pub struct Item {
    pub(crate) core: ItemCore,
    pub(crate) actions: ActionRegistry,
    pub(crate) behavior: Arc<dyn ItemBehavior>,
}

impl Item {
    pub fn builder(name: impl Into<String>) -> ItemBuilder {
        ItemBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        self.core.name()
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.core.descriptor
    }

    pub fn stat(&self) -> &Stat {
        &self.core.stat
    }

    pub fn stat_mut(&mut self) -> &mut Stat {
        &mut self.core.stat
    }

    pub fn core(&self) -> &ItemCore {
        &self.core
    }

    pub fn capabilities(&self) -> Capabilities {
        self.core.capabilities()
    }

    pub fn has(&self, capability: Capabilities) -> bool {
        self.capabilities().contains(capability)
    }

    pub fn is_active(&self) -> bool {
        self.core.active
    }

    pub fn equipped_by(&self) -> Option<&str> {
        self.core.equipped_by()
    }

    pub fn is_equipped(&self) -> bool {
        self.core.is_equipped()
    }

    pub fn behavior(&self) -> &dyn ItemBehavior {
        self.behavior.as_ref()
    }

    pub fn actions(&self) -> &ActionRegistry {
        &self.actions
    }

    /// Registers an item-scoped action, available to the holder while the
    /// item is equipped.
    ///
    /// # Panics
    ///
    /// Panics if `phases` is empty.
    pub fn register_action<F>(&mut self, name: impl Into<String>, phases: &[Phase], handler: F)
    where
        F: Fn(&mut ActionContext<'_>) -> i32 + Send + Sync + 'static,
    {
        self.actions.register(name, phases, handler);
    }

    /// Worn out: the item's own health is no longer positive.
    ///
    /// Broken gear stays equipped but takes no part in strikes.
    pub fn is_broken(&self) -> bool {
        !self.core.stat.is_alive()
    }

    /// Equipped, able to attack and not broken.
    pub fn can_strike(&self) -> bool {
        self.core.attack.is_some() && self.is_equipped() && !self.is_broken()
    }

    /// Equipped, able to defend and not broken.
    pub fn can_guard(&self) -> bool {
        self.core.defend.is_some() && self.is_equipped() && !self.is_broken()
    }

    /// Own attack this item adds to a strike against `opponent`.
    ///
    /// Zero unless the item can strike (see [`Item::can_strike`]) and has
    /// positive attack; doubled when the behavior scores a critical against
    /// `opponent`.
    pub fn attack_contribution(&self, opponent: &Descriptor) -> i32 {
        if !self.can_strike() || self.core.stat.attack <= 0 {
            return 0;
        }
        if self.behavior.can_crit(&self.core, opponent) {
            self.core.stat.attack * 2
        } else {
            self.core.stat.attack
        }
    }

    /// Own defense this item puts up against a strike.
    ///
    /// Zero unless the item can guard (see [`Item::can_guard`]) and has
    /// positive defense.
    pub fn defense_contribution(&self) -> i32 {
        if !self.can_guard() || self.core.stat.defense <= 0 {
            return 0;
        }
        self.core.stat.defense
    }

    /// Attack-scoped bonus, or zero when the item cannot attack.
    pub fn stat_on_attack(&self) -> Stat {
        self.core.attack.map_or(Stat::ZERO, |cap| cap.stat_on_attack)
    }

    /// Defend-scoped bonus, or zero when the item cannot defend.
    pub fn stat_on_defend(&self) -> Stat {
        self.core.defend.map_or(Stat::ZERO, |cap| cap.stat_on_defend)
    }

    pub(crate) fn wear_out(&mut self) {
        self.behavior.wear_out(&mut self.core);
        tracing::trace!(item = %self.name(), health = self.core.stat.health, "wear-out");
    }
}
