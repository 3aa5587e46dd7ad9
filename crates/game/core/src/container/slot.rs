//! Equipment slots.

use bitflags::bitflags;
use strum::IntoEnumIterator;

use crate::error::ConfigError;

/// A body location an equipped item occupies.
///
/// Declaration order is the order slots are tried when an item allows more
/// than one.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipSlot {
    Head,
    Neck,
    Body,
    Legs,
    Feet,
    HandLeft,
    HandRight,
    FingerLeft,
    FingerRight,
}

impl EquipSlot {
    /// Index into a per-slot table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The single-bit set for this slot.
    pub const fn flag(self) -> EquipSlots {
        EquipSlots::from_bits_retain(1 << self as u16)
    }
}

bitflags! {
    /// Set of slots an item may be equipped into.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct EquipSlots: u16 {
        const HEAD         = 1 << 0;
        const NECK         = 1 << 1;
        const BODY         = 1 << 2;
        const LEGS         = 1 << 3;
        const FEET         = 1 << 4;
        const HAND_LEFT    = 1 << 5;
        const HAND_RIGHT   = 1 << 6;
        const FINGER_LEFT  = 1 << 7;
        const FINGER_RIGHT = 1 << 8;

        const HANDS   = Self::HAND_LEFT.bits() | Self::HAND_RIGHT.bits();
        const FINGERS = Self::FINGER_LEFT.bits() | Self::FINGER_RIGHT.bits();
    }
}

impl EquipSlots {
    /// Allowed slots in declaration order.
    pub fn slots(self) -> impl Iterator<Item = EquipSlot> {
        EquipSlot::iter().filter(move |slot| self.contains(slot.flag()))
    }

    /// Parses snake_case slot identifiers into a set.
    ///
    /// Unknown identifiers are rejected rather than ignored.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, ConfigError> {
        names.iter().try_fold(Self::empty(), |set, name| {
            let name = name.as_ref();
            name.parse::<EquipSlot>()
                .map(|slot| set | slot.flag())
                .map_err(|_| ConfigError::UnknownSlot(name.to_owned()))
        })
    }
}

impl From<EquipSlot> for EquipSlots {
    fn from(slot: EquipSlot) -> Self {
        slot.flag()
    }
}
