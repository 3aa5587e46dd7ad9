//! Built-in item catalog.
//!
//! Every entry is a constructor returning a fresh [`Item`]. [`by_name`]
//! resolves the catalog names data files refer to.

pub mod afflictions;
pub mod armor;
pub mod potions;
pub mod swords;

use duel_core::Item;

/// Every name [`by_name`] resolves.
pub const NAMES: [&str; 12] = [
    "RustedSword",
    "IronSword",
    "SilverSword",
    "FlameSword",
    "FrostSword",
    "WoodenShield",
    "IronHelmet",
    "HealthPotion",
    "ManaPotion",
    "Poisoned",
    "Burning",
    "Freeze",
];

/// Builds the catalog item called `name`, case-sensitively.
pub fn by_name(name: &str) -> Option<Item> {
    let item = match name {
        "RustedSword" => swords::rusted_sword(),
        "IronSword" => swords::iron_sword(),
        "SilverSword" => swords::silver_sword(),
        "FlameSword" => swords::flame_sword(),
        "FrostSword" => swords::frost_sword(),
        "WoodenShield" => armor::wooden_shield(),
        "IronHelmet" => armor::iron_helmet(),
        "HealthPotion" => potions::health_potion(),
        "ManaPotion" => potions::mana_potion(),
        "Poisoned" => afflictions::poisoned(),
        "Burning" => afflictions::burning(),
        "Freeze" => afflictions::freeze(),
        _ => return None,
    };
    Some(item)
}

/// Every catalog item, in [`NAMES`] order.
pub fn all() -> impl Iterator<Item = Item> {
    NAMES.into_iter().filter_map(by_name)
}
