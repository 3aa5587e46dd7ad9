//! Status afflictions.
//!
//! Each affliction counts its remaining turns in its own `stat.health` and
//! ticks on the holder's `TURN_START`.

use duel_core::{HookContext, Item, ItemBehavior, ItemCore, Phase, Stat, StatusCapability};

pub const CATEGORY: &str = "AFFLICTION";

fn affliction(name: &str, description: &str, turns: i32) -> duel_core::ItemBuilder {
    Item::builder(name)
        .description(description)
        .category(CATEGORY)
        .stat(Stat::ZERO.with_health(turns))
}

/// Drains one health per turn, forever.
#[derive(Debug)]
pub struct Poison;

impl ItemBehavior for Poison {
    fn on_phase(&self, item: &mut ItemCore, ctx: &mut HookContext<'_>) {
        if ctx.phase == Phase::TurnStart && item.active {
            ctx.holder.health -= 1;
        }
    }
}

pub fn poisoned() -> Item {
    affliction("Poisoned", "Slowly drains health every turn", 1)
        .status(StatusCapability::default())
        .behavior(Poison)
        .build()
}

/// Scorches on apply, then burns health and defense each turn until it
/// burns out.
#[derive(Debug)]
pub struct Burn;

impl Burn {
    pub const HEALTH_PER_TURN: i32 = 2;
    pub const DEFENSE_PER_TURN: i32 = 1;
}

impl ItemBehavior for Burn {
    fn on_phase(&self, item: &mut ItemCore, ctx: &mut HookContext<'_>) {
        if ctx.phase != Phase::TurnStart || !item.active {
            return;
        }
        ctx.holder.defense -= Self::DEFENSE_PER_TURN;
        ctx.holder.health -= Self::HEALTH_PER_TURN;
        item.stat.health -= 1;
        if item.stat.health <= 0 {
            item.active = false;
        }
    }
}

pub fn burning() -> Item {
    affliction("Burning", "Flames sear the skin and weaken armor", 2)
        .status(StatusCapability {
            stat_on_apply: Stat::ZERO.with_health(-5),
            ..Default::default()
        })
        .behavior(Burn)
        .build()
}

/// Pins the holder's agility to zero until it thaws.
#[derive(Debug)]
pub struct Frost;

impl ItemBehavior for Frost {
    fn on_apply(&self, item: &mut ItemCore, holder: &mut Stat) {
        item.saved.agility = holder.agility;
        holder.agility = 0;
    }

    fn on_unapply(&self, item: &mut ItemCore, holder: &mut Stat) {
        if item.active {
            holder.agility = item.saved.agility;
        }
    }

    fn on_phase(&self, item: &mut ItemCore, ctx: &mut HookContext<'_>) {
        if ctx.phase != Phase::TurnStart || !item.active {
            return;
        }
        item.stat.health -= 1;
        if item.stat.health <= 0 {
            ctx.holder.agility = item.saved.agility;
            item.active = false;
        }
    }
}

pub fn freeze() -> Item {
    affliction("Freeze", "Frozen solid and unable to dodge or strike", 3)
        .status(StatusCapability::default())
        .behavior(Frost)
        .build()
}
