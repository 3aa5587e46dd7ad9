//! Named custom actions.
//!
//! Characters and items register actions under a name with the phases they
//! may run in. A battle driver lists what is available right now with
//! [`Character::available_actions`] and runs one with
//! [`Battle::perform`](crate::engine::Battle::perform).

mod registry;

pub use registry::{ActionEntry, ActionRegistry};

use std::sync::Arc;

use crate::character::Character;
use crate::engine::Phase;
use crate::rng::RandomSource;

/// Name of the action every character is created with.
pub const ATTACK_ACTION: &str = "attack";

/// Shared action body. Returns an action-defined amount (damage for attacks).
pub type ActionHandler = Arc<dyn Fn(&mut ActionContext<'_>) -> i32 + Send + Sync>;

/// Everything an action handler may touch.
pub struct ActionContext<'a> {
    /// Phase as seen by the acting character.
    pub phase: Phase,
    pub turn: u32,
    pub actor: &'a mut Character,
    pub opponent: &'a mut Character,
    pub rng: &'a mut dyn RandomSource,
    /// Name of the equipped item that registered the action, if any.
    pub source: Option<String>,
}
