//! Shields and helmets.

use duel_core::{DefendCapability, EquipCapability, EquipSlots, Item, Stat};

pub const CATEGORY: &str = "ARMOR";

pub fn wooden_shield() -> Item {
    Item::builder("WoodenShield")
        .description("A simple shield made of sturdy wood")
        .category(CATEGORY)
        .sub_category("SHIELD")
        .stat(Stat::ZERO.with_health(10).with_defense(4))
        .equip(EquipCapability {
            stat_on_equip: Stat::ZERO.with_defense(3),
            slots: EquipSlots::HAND_LEFT,
            ..Default::default()
        })
        .defend(DefendCapability::default())
        .build()
}

/// Adds one point of defense against every strike it absorbs.
pub fn iron_helmet() -> Item {
    Item::builder("IronHelmet")
        .description("A solid helmet forged from iron")
        .category(CATEGORY)
        .sub_category("HELMET")
        .stat(Stat::ZERO.with_health(20).with_defense(2))
        .equip(EquipCapability {
            stat_to_equip: Stat::ZERO.with_strength(10),
            slots: EquipSlots::HEAD,
            ..Default::default()
        })
        .defend(DefendCapability {
            stat_on_defend: Stat::ZERO.with_defense(1),
        })
        .build()
}
