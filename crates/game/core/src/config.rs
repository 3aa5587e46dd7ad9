use strum::EnumCount;

use crate::container::EquipSlot;
use crate::error::ConfigError;

/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Maximum number of items a character can have equipped.
    pub equipment_capacity: usize,

    /// Maximum number of distinct status effects on a character.
    pub status_capacity: usize,

    /// When set, re-applying a status with a name already present merges its
    /// stat into the existing entry instead of being rejected.
    pub status_stacking: bool,
}

impl BattleConfig {
    // ===== runtime-tunable defaults =====
    /// One item per equipment slot.
    pub const DEFAULT_EQUIPMENT_CAPACITY: usize = EquipSlot::COUNT;
    pub const DEFAULT_STATUS_CAPACITY: usize = 8;

    pub fn new() -> Self {
        Self {
            equipment_capacity: Self::DEFAULT_EQUIPMENT_CAPACITY,
            status_capacity: Self::DEFAULT_STATUS_CAPACITY,
            status_stacking: false,
        }
    }

    pub fn with_status_stacking(mut self, stacking: bool) -> Self {
        self.status_stacking = stacking;
        self
    }

    pub fn with_capacities(mut self, equipment: usize, status: usize) -> Self {
        self.equipment_capacity = equipment;
        self.status_capacity = status;
        self
    }

    /// Rejects capacities that would make a container unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.equipment_capacity == 0 {
            return Err(ConfigError::ZeroCapacity {
                container: "equipment",
            });
        }
        if self.status_capacity == 0 {
            return Err(ConfigError::ZeroCapacity {
                container: "status",
            });
        }
        Ok(())
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
