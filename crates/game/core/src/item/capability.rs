//! Capability data carried by items.
//!
//! Each struct holds the thresholds and deltas of one capability. An item's
//! capability set is fixed when it is built and reported through
//! [`Capabilities`].

use bitflags::bitflags;

use crate::container::EquipSlots;
use crate::stats::Stat;

bitflags! {
    /// Which capabilities an item holds.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u8 {
        const EQUIP   = 1 << 0;
        const ATTACK  = 1 << 1;
        const DEFEND  = 1 << 2;
        const CONSUME = 1 << 3;
        const STATUS  = 1 << 4;
    }
}

/// Can be worn in one of `slots`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EquipCapability {
    /// Holder must dominate this to equip.
    pub stat_to_equip: Stat,
    /// Added to the holder on equip, subtracted on unequip.
    pub stat_on_equip: Stat,
    pub slots: EquipSlots,
}

/// Used up on the spot; never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConsumeCapability {
    pub stat_to_consume: Stat,
    pub stat_on_consume: Stat,
}

/// Deals damage while equipped.
///
/// `stat_on_attack` only counts inside the damage computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttackCapability {
    pub stat_on_attack: Stat,
}

/// Absorbs damage while equipped.
///
/// `stat_on_defend` only counts inside the damage computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DefendCapability {
    pub stat_on_defend: Stat,
}

/// A timed effect living in the holder's status container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatusCapability {
    pub stat_to_apply: Stat,
    /// Added to the holder once, when applied.
    pub stat_on_apply: Stat,
}
