//! Attack resolution.
//!
//! An attack first passes the luck-biased check (see [`hit::luck_check`]);
//! on failure it deals nothing and changes nothing. Otherwise every equipped
//! attacking item that is not broken strikes independently, in equipment
//! order:
//!
//! 1. compute damage ([`damage::strike_damage`]) and apply it raw to the
//!    defender
//! 2. wear the attacking item, then every working defending item of the
//!    defender
//! 3. run the item's `after_attack` follow-up
//!
//! The damage of all strikes is summed; with no attacking item it is zero.

pub mod damage;
pub mod hit;

pub use damage::strike_damage;
pub use hit::{luck_check, luck_upper_bound, percent_chance};

use crate::character::Character;
use crate::descriptor::Descriptor;
use crate::item::{AttackContext, Capabilities, Item};
use crate::rng::RandomSource;
use crate::stats::Stat;

impl Character {
    /// Attacks `opponent` with every equipped attacking item.
    ///
    /// Returns the total damage dealt, zero when the luck check fails.
    pub fn attack(&mut self, opponent: &mut Character, rng: &mut dyn RandomSource) -> i32 {
        if !luck_check(&self.stat, &mut *rng) {
            tracing::debug!(attacker = %self.name(), defender = %opponent.name(), "attack missed");
            return 0;
        }

        let Character {
            descriptor,
            stat,
            equipment,
            ..
        } = self;
        let mut total = 0;
        for item in equipment.iter_mut() {
            if item.can_strike() {
                total += strike(item, stat, descriptor, opponent, &mut *rng);
            } else if item.has(Capabilities::ATTACK) && item.is_broken() {
                tracing::trace!(item = %item.name(), "broken, skipped");
            }
        }

        tracing::debug!(
            attacker = %descriptor.name,
            defender = %opponent.name(),
            damage = total,
            defender_health = opponent.stat.health,
            "attack resolved"
        );
        total
    }
}

fn strike(
    item: &mut Item,
    holder: &mut Stat,
    holder_descriptor: &Descriptor,
    opponent: &mut Character,
    rng: &mut dyn RandomSource,
) -> i32 {
    let damage = strike_damage(item, holder, opponent);
    opponent.defend(damage);
    item.wear_out();
    opponent.wear_defenders();
    tracing::trace!(item = %item.name(), damage, "strike");

    let mut ctx = AttackContext {
        holder,
        holder_descriptor,
        opponent,
        rng,
        damage,
    };
    item.behavior.after_attack(&mut item.core, &mut ctx);
    damage
}
