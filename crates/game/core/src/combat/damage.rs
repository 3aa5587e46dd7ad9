//! Damage calculation.

use crate::character::Character;
use crate::item::Item;
use crate::stats::Stat;

/// Calculate the damage one attacking item deals.
///
/// # Formula
///
/// ```text
/// damage = item_attack(defender)
///        + (attacker.attack + stat_on_attack.attack)
///        - defense_by_equipment(defender)
///        - (defender.defense + sum(stat_on_defend.defense))
/// ```
///
/// `item_attack` is the weapon's own attack (doubled on a critical), and the
/// sum runs over the defender's equipped defending items. Nothing is floored:
/// a negative result heals the defender when applied.
///
/// # Arguments
///
/// * `weapon` - The equipped attacking item
/// * `attacker` - Live stat of the attacking character
/// * `defender` - The character being attacked
///
/// # Returns
///
/// Raw damage, possibly zero or negative.
pub fn strike_damage(weapon: &Item, attacker: &Stat, defender: &Character) -> i32 {
    let offense = weapon.attack_contribution(&defender.descriptor)
        + attacker.attack
        + weapon.stat_on_attack().attack;
    let defense = defender.defense_by_equipment()
        + defender.stat.defense
        + defender.defend_bonus().defense;
    offense - defense
}
