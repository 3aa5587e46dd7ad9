//! Deterministic turn-based duel rules.
//!
//! `duel-core` resolves combat between two [`Character`]s: stat algebra,
//! capability-based items, slot-constrained equipment and status containers,
//! the phase cycle driven by [`Battle`], named custom actions, and the chance
//! model. The only source of nondeterminism is the injected
//! [`RandomSource`]. Concrete item catalogs live outside this crate and plug
//! in through [`ItemBehavior`].
pub mod action;
pub mod character;
pub mod combat;
pub mod config;
pub mod container;
pub mod descriptor;
pub mod engine;
pub mod error;
pub mod item;
pub mod rng;
pub mod stats;

pub use action::{ATTACK_ACTION, ActionContext, ActionEntry, ActionHandler, ActionRegistry};
pub use character::{Character, CharacterSpec};
pub use combat::{luck_check, percent_chance, strike_damage};
pub use config::BattleConfig;
pub use container::{Container, EquipSlot, EquipSlots, Equipment, Statuses};
pub use descriptor::Descriptor;
pub use engine::{Battle, BattleContext, HookContext, Phase, PhaseHook, Side};
pub use error::{ConfigError, ErrorSeverity, GameError, RejectReason, Rejected};
pub use item::{
    AttackCapability, AttackContext, Capabilities, ConsumeCapability, DefendCapability,
    EquipCapability, EquipSpec, Item, ItemBehavior, ItemBuilder, ItemCore, ItemSpec,
    StandardBehavior, StatusCapability,
};
pub use rng::{PcgRandom, RandomSource, ScriptedRandom};
pub use stats::Stat;
