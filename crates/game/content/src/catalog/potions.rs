//! Single-use potions.

use duel_core::{ConsumeCapability, Item, Stat};

pub const CATEGORY: &str = "POTION";

fn potion(name: &str, description: &str, effect: Stat) -> Item {
    Item::builder(name)
        .description(description)
        .category(CATEGORY)
        .consume(ConsumeCapability {
            stat_on_consume: effect,
            ..Default::default()
        })
        .build()
}

pub fn health_potion() -> Item {
    potion(
        "HealthPotion",
        "Restores a modest amount of health",
        Stat::ZERO.with_health(10),
    )
}

pub fn mana_potion() -> Item {
    potion(
        "ManaPotion",
        "Restores a modest amount of mana",
        Stat::ZERO.with_mana(15),
    )
}
