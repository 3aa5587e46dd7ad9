//! Common error infrastructure for duel-core.
//!
//! Negative outcomes of equip/consume/apply attempts are ordinary results, not
//! faults: they come back as [`RejectReason`] (or [`Rejected`], which also
//! hands the refused item back to the caller). Malformed configuration is
//! caught at construction time as [`ConfigError`]. Structural misuse of the
//! engine by a catalog or driver panics instead.

use crate::item::{Capabilities, Item};

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Expected outcome; the caller may try something else.
    ///
    /// Examples: slot occupied, threshold not met
    Recoverable,

    /// Invalid input that should be fixed before retrying.
    ///
    /// Examples: zero capacity, unknown slot identifier
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all duel-core errors.
///
/// - All error types implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant, for logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Why a character refused an item operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RejectReason {
    #[error("item lacks the {0:?} capability")]
    MissingCapability(Capabilities),

    #[error("holder does not meet the item's requirements")]
    Ineligible,

    #[error("an item with the same name is already held")]
    NameTaken,

    #[error("container is at capacity")]
    ContainerFull,

    #[error("item declares no equipment slot")]
    NoSlotDeclared,

    #[error("every slot the item allows is occupied")]
    SlotOccupied,

    #[error("item is not held")]
    NotPresent,

    #[error("item refuses to be removed")]
    CannotRemove,
}

impl GameError for RejectReason {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingCapability(_) | Self::NoSlotDeclared => ErrorSeverity::Validation,
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCapability(_) => "MISSING_CAPABILITY",
            Self::Ineligible => "INELIGIBLE",
            Self::NameTaken => "NAME_TAKEN",
            Self::ContainerFull => "CONTAINER_FULL",
            Self::NoSlotDeclared => "NO_SLOT_DECLARED",
            Self::SlotOccupied => "SLOT_OCCUPIED",
            Self::NotPresent => "NOT_PRESENT",
            Self::CannotRemove => "CANNOT_REMOVE",
        }
    }
}

/// A refused item, handed back unchanged together with the reason.
#[derive(Debug, thiserror::Error)]
#[error("`{}` rejected: {reason}", .item.name())]
pub struct Rejected {
    pub item: Item,
    pub reason: RejectReason,
}

impl Rejected {
    pub fn new(item: Item, reason: RejectReason) -> Self {
        Self { item, reason }
    }

    /// Recovers ownership of the refused item.
    pub fn into_item(self) -> Item {
        self.item
    }
}

impl GameError for Rejected {
    fn severity(&self) -> ErrorSeverity {
        self.reason.severity()
    }

    fn error_code(&self) -> &'static str {
        self.reason.error_code()
    }
}

/// Construction-time configuration errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{container} capacity must be at least 1")]
    ZeroCapacity { container: &'static str },

    #[error("item `{0}` declares no capability")]
    NoCapability(String),

    #[error("equippable item `{0}` declares no equipment slot")]
    NoSlotDeclared(String),

    #[error("unknown equipment slot `{0}`")]
    UnknownSlot(String),
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroCapacity { .. } => "ZERO_CAPACITY",
            Self::NoCapability(_) => "NO_CAPABILITY",
            Self::NoSlotDeclared(_) => "NO_SLOT_DECLARED",
            Self::UnknownSlot(_) => "UNKNOWN_SLOT",
        }
    }
}
