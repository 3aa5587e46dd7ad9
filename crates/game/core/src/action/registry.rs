use std::collections::BTreeMap;
use std::sync::Arc;

use arrayvec::ArrayVec;
use strum::EnumCount;

use crate::engine::Phase;

use super::{ActionContext, ActionHandler};

/// A registered action: the phases it may run in and what it does.
#[derive(Clone)]
pub struct ActionEntry {
    phases: ArrayVec<Phase, { Phase::COUNT }>,
    handler: ActionHandler,
}

impl ActionEntry {
    /// Phases (from the owner's point of view) in which the action is allowed.
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn allows(&self, phase: Phase) -> bool {
        self.phases.contains(&phase)
    }

    pub fn handler(&self) -> ActionHandler {
        Arc::clone(&self.handler)
    }
}

impl core::fmt::Debug for ActionEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ActionEntry")
            .field("phases", &self.phases)
            .finish_non_exhaustive()
    }
}

/// Named actions keyed by name, each gated by a phase whitelist.
///
/// Phases are stored as the owner sees them (`PLAYER_*` means "my attack");
/// callers translate the global phase with [`Phase::local_to`] before asking.
#[derive(Clone, Debug, Default)]
pub struct ActionRegistry {
    entries: BTreeMap<String, ActionEntry>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) an action.
    ///
    /// # Panics
    ///
    /// Panics if `phases` is empty: an action that can never run is a
    /// catalog bug.
    pub fn register<F>(&mut self, name: impl Into<String>, phases: &[Phase], handler: F)
    where
        F: Fn(&mut ActionContext<'_>) -> i32 + Send + Sync + 'static,
    {
        let name = name.into();
        assert!(
            !phases.is_empty(),
            "action `{name}` registered without any allowed phase"
        );

        let mut allowed = ArrayVec::new();
        for &phase in phases {
            if !allowed.contains(&phase) {
                allowed.push(phase);
            }
        }

        tracing::trace!(action = %name, phases = ?allowed, "registered action");
        self.entries.insert(
            name,
            ActionEntry {
                phases: allowed,
                handler: Arc::new(handler),
            },
        );
    }

    /// Removes an action, returning whether it existed.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&ActionEntry> {
        self.entries.get(name)
    }

    /// True when `name` is registered and allowed in the local `phase`.
    pub fn allows(&self, name: &str, phase: Phase) -> bool {
        self.entries.get(name).is_some_and(|entry| entry.allows(phase))
    }

    /// Names of actions allowed in the local `phase`, in name order.
    pub fn available(&self, phase: Phase) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .filter(move |(_, entry)| entry.allows(phase))
            .map(|(name, _)| name.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
