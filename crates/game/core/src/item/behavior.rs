//! Overridable item hooks.
//!
//! Capability data decides *what* an item can do; an [`ItemBehavior`] decides
//! *how*, and lets catalogs intercept eligibility checks, combat sub-steps and
//! phase transitions without the engine knowing concrete item types. Every
//! method has a default, so a catalog overrides only what it needs.

use crate::character::Character;
use crate::descriptor::Descriptor;
use crate::engine::HookContext;
use crate::rng::RandomSource;
use crate::stats::Stat;

use super::ItemCore;

/// Borrowed view handed to [`ItemBehavior::after_attack`].
pub struct AttackContext<'a> {
    /// Live stat of the attacking character.
    pub holder: &'a mut Stat,
    pub holder_descriptor: &'a Descriptor,
    /// The character that was attacked.
    pub opponent: &'a mut Character,
    pub rng: &'a mut dyn RandomSource,
    /// Damage this item dealt (may be zero or negative).
    pub damage: i32,
}

/// Hooks shared by every instance of an item kind.
pub trait ItemBehavior: core::fmt::Debug + Send + Sync {
    /// Holder must dominate the equip threshold.
    fn can_equip(&self, item: &ItemCore, holder: &Stat) -> bool {
        item.equip()
            .is_some_and(|cap| holder.dominates(&cap.stat_to_equip))
    }

    fn can_unequip(&self, _item: &ItemCore, _holder: &Stat) -> bool {
        true
    }

    /// Holder must dominate the consume threshold.
    fn can_consume(&self, item: &ItemCore, holder: &Stat) -> bool {
        item.consume()
            .is_some_and(|cap| holder.dominates(&cap.stat_to_consume))
    }

    /// Holder must dominate the apply threshold.
    fn can_apply(&self, item: &ItemCore, holder: &Stat) -> bool {
        item.status()
            .is_some_and(|cap| holder.dominates(&cap.stat_to_apply))
    }

    /// Whether an applied status may be taken off.
    fn can_remove(&self, _item: &ItemCore, _holder: &Stat) -> bool {
        true
    }

    /// Doubles the item's own attack against `opponent` when true.
    fn can_crit(&self, _item: &ItemCore, _opponent: &Descriptor) -> bool {
        false
    }

    /// Wear taken each time the item is used to attack or to absorb an attack.
    fn wear_out(&self, item: &mut ItemCore) {
        item.stat.health -= 1;
    }

    /// Adds the on-equip delta to the holder once the item is stored.
    fn on_equip(&self, item: &mut ItemCore, holder: &mut Stat) {
        if let Some(cap) = item.equip() {
            *holder += cap.stat_on_equip;
        }
    }

    /// Takes the on-equip delta back off once the item has left its slot.
    fn on_unequip(&self, item: &mut ItemCore, holder: &mut Stat) {
        if let Some(cap) = item.equip() {
            *holder -= cap.stat_on_equip;
        }
    }

    /// Adds the on-consume delta to the consumer.
    fn on_consume(&self, item: &mut ItemCore, holder: &mut Stat) {
        if let Some(cap) = item.consume() {
            *holder += cap.stat_on_consume;
        }
    }

    /// Runs after the item has been bound and `stat_on_apply` added.
    fn on_apply(&self, _item: &mut ItemCore, _holder: &mut Stat) {}

    /// Runs before the item is unbound.
    fn on_unapply(&self, _item: &mut ItemCore, _holder: &mut Stat) {}

    /// Follow-up after the item's damage has been dealt and wear applied.
    fn after_attack(&self, _item: &mut ItemCore, _ctx: &mut AttackContext<'_>) {}

    /// Called on every phase transition while the item is equipped or applied.
    fn on_phase(&self, _item: &mut ItemCore, _ctx: &mut HookContext<'_>) {}
}

/// Behavior with every hook left at its default.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardBehavior;

impl ItemBehavior for StandardBehavior {}
