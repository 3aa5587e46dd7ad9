//! Phase hooks.
//!
//! On every phase transition the battle visits each side in turn and hands a
//! [`HookContext`] first to the character's own hooks, then to each equipped
//! item and finally to each status item (see
//! [`ItemBehavior::on_phase`](crate::item::ItemBehavior::on_phase)).

use std::sync::Arc;

use crate::descriptor::Descriptor;
use crate::rng::RandomSource;
use crate::stats::Stat;

use super::Phase;

/// What a phase hook sees. `phase` is already mirrored for the holder's side.
pub struct HookContext<'a> {
    pub phase: Phase,
    pub turn: u32,
    pub holder: &'a mut Stat,
    pub holder_descriptor: &'a Descriptor,
    pub opponent: &'a mut Stat,
    pub opponent_descriptor: &'a Descriptor,
    pub rng: &'a mut dyn RandomSource,
}

/// Body of an actor-level phase hook.
pub type HookFn = Arc<dyn Fn(&mut HookContext<'_>) + Send + Sync>;

/// An actor-level hook bound to one local phase.
#[derive(Clone)]
pub struct PhaseHook {
    phase: Phase,
    handler: HookFn,
}

impl PhaseHook {
    pub fn new<F>(phase: Phase, handler: F) -> Self
    where
        F: Fn(&mut HookContext<'_>) + Send + Sync + 'static,
    {
        Self {
            phase,
            handler: Arc::new(handler),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Runs the hook if `ctx.phase` is the one it is bound to.
    pub fn fire(&self, ctx: &mut HookContext<'_>) -> bool {
        if ctx.phase != self.phase {
            return false;
        }
        (self.handler)(ctx);
        true
    }
}

impl core::fmt::Debug for PhaseHook {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PhaseHook")
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
