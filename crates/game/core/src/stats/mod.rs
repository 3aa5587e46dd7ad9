//! Stat algebra.
//!
//! A [`Stat`] is a fixed nine-field integer vector shared by characters and
//! items. Characters use it as their live attributes; items use it both as
//! their own vitality (wear-out, status durations) and, through capabilities,
//! as thresholds and deltas applied to their holder.
//!
//! # Principles
//!
//! 1. **Component-wise**: `+` and `-` act field by field, nothing else
//! 2. **Unclamped**: no floor at zero, no saturation; health may go negative
//!    and arithmetic wraps on overflow instead of panicking
//! 3. **Partial order**: [`Stat::dominates`] is `>=` on every field, so two
//!    stats may be incomparable

use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Nine named integer attributes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Stat {
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
    pub strength: i32,
    pub intelligence: i32,
    pub fatigue: i32,
    pub mana: i32,
    pub agility: i32,
    pub luck: i32,
}

impl Stat {
    /// Number of attributes in a stat vector.
    pub const FIELDS: usize = 9;

    /// All attributes zero.
    pub const ZERO: Self = Self::from_array([0; Self::FIELDS]);

    /// Builds a stat from its fields in declaration order.
    pub const fn from_array(values: [i32; Self::FIELDS]) -> Self {
        let [
            health,
            attack,
            defense,
            strength,
            intelligence,
            fatigue,
            mana,
            agility,
            luck,
        ] = values;
        Self {
            health,
            attack,
            defense,
            strength,
            intelligence,
            fatigue,
            mana,
            agility,
            luck,
        }
    }

    /// Returns the fields in declaration order.
    pub const fn to_array(self) -> [i32; Self::FIELDS] {
        [
            self.health,
            self.attack,
            self.defense,
            self.strength,
            self.intelligence,
            self.fatigue,
            self.mana,
            self.agility,
            self.luck,
        ]
    }

    /// A character (or item) with positive health is alive.
    #[inline]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// True iff every field of `self` is `>=` the matching field of `other`.
    ///
    /// Used to gate equip, consume and apply eligibility against a threshold.
    pub fn dominates(&self, other: &Stat) -> bool {
        self.to_array()
            .into_iter()
            .zip(other.to_array())
            .all(|(mine, theirs)| mine >= theirs)
    }

    fn zip_with(self, other: Stat, op: impl Fn(i32, i32) -> i32) -> Stat {
        let mut out = self.to_array();
        for (slot, rhs) in out.iter_mut().zip(other.to_array()) {
            *slot = op(*slot, rhs);
        }
        Stat::from_array(out)
    }

    pub const fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    pub const fn with_attack(mut self, attack: i32) -> Self {
        self.attack = attack;
        self
    }

    pub const fn with_defense(mut self, defense: i32) -> Self {
        self.defense = defense;
        self
    }

    pub const fn with_strength(mut self, strength: i32) -> Self {
        self.strength = strength;
        self
    }

    pub const fn with_intelligence(mut self, intelligence: i32) -> Self {
        self.intelligence = intelligence;
        self
    }

    pub const fn with_fatigue(mut self, fatigue: i32) -> Self {
        self.fatigue = fatigue;
        self
    }

    pub const fn with_mana(mut self, mana: i32) -> Self {
        self.mana = mana;
        self
    }

    pub const fn with_agility(mut self, agility: i32) -> Self {
        self.agility = agility;
        self
    }

    pub const fn with_luck(mut self, luck: i32) -> Self {
        self.luck = luck;
        self
    }
}

impl Add for Stat {
    type Output = Stat;

    fn add(self, rhs: Stat) -> Stat {
        self.zip_with(rhs, i32::wrapping_add)
    }
}

impl Sub for Stat {
    type Output = Stat;

    fn sub(self, rhs: Stat) -> Stat {
        self.zip_with(rhs, i32::wrapping_sub)
    }
}

impl Neg for Stat {
    type Output = Stat;

    fn neg(self) -> Stat {
        Stat::ZERO - self
    }
}

impl AddAssign for Stat {
    fn add_assign(&mut self, rhs: Stat) {
        *self = *self + rhs;
    }
}

impl SubAssign for Stat {
    fn sub_assign(&mut self, rhs: Stat) {
        *self = *self - rhs;
    }
}
