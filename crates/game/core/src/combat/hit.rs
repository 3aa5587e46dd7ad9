//! Hit chance checks.
//!
//! Two draw conventions coexist and are kept distinct: the luck-biased check
//! gating whole attacks, and a flat percentage roll catalogs use for side
//! effects such as inflicting a status.

use crate::rng::RandomSource;
use crate::stats::Stat;

/// Upper bound of the luck-biased draw.
///
/// # Formula
///
/// ```text
/// upper = max(100 - luck, 1)
/// ```
///
/// Luck of 99 or more collapses the range to `[1, 1]`.
pub fn luck_upper_bound(luck: i32) -> i32 {
    100i32.saturating_sub(luck).max(1)
}

/// Luck-biased attack check.
///
/// Draws a uniform integer in `[1, 100 - luck]` (see [`luck_upper_bound`]) and
/// succeeds iff the attacker's agility is strictly greater than the draw.
///
/// # Arguments
///
/// * `attacker` - Live stat of the attacking character
/// * `rng` - Injected random source
///
/// # Returns
///
/// `true` if the attack goes through.
pub fn luck_check(attacker: &Stat, rng: &mut (impl RandomSource + ?Sized)) -> bool {
    let draw = rng.draw(1, luck_upper_bound(attacker.luck));
    let hit = attacker.agility > draw;
    tracing::trace!(
        agility = attacker.agility,
        luck = attacker.luck,
        draw,
        hit,
        "luck check"
    );
    hit
}

/// Flat percentage check: succeeds iff `draw(1, 100) < probability`.
///
/// A probability of 1 or less never succeeds; 101 or more always does.
pub fn percent_chance(probability: i32, rng: &mut (impl RandomSource + ?Sized)) -> bool {
    rng.draw(1, 100) < probability
}
