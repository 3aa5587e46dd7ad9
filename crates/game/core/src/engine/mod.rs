//! Phase engine.
//!
//! A [`Battle`] borrows two characters for its lifetime, binds them to the
//! player and opponent sides, and drives the phase cycle. Every transition
//! updates the [`BattleContext`] and then dispatches the phase to the player
//! and to the opponent (mirrored), in that order. Expired statuses are swept
//! at the end of every turn. Dropping the battle releases both characters.

mod hook;
mod phase;
mod turns;

pub use hook::{HookContext, HookFn, PhaseHook};
pub use phase::{Phase, Side};
pub use turns::BattleContext;

use crate::action::{ATTACK_ACTION, ActionContext};
use crate::character::Character;
use crate::rng::RandomSource;

/// One encounter between two characters.
pub struct Battle<'a> {
    player: &'a mut Character,
    opponent: &'a mut Character,
    context: BattleContext,
    rng: Box<dyn RandomSource + 'a>,
}

impl<'a> Battle<'a> {
    /// Binds `player` and `opponent` to their sides.
    ///
    /// # Panics
    ///
    /// Panics if either character is already bound to another battle.
    pub fn new(
        player: &'a mut Character,
        opponent: &'a mut Character,
        rng: impl RandomSource + 'a,
    ) -> Self {
        player.bind(Side::Player);
        opponent.bind(Side::Opponent);
        tracing::debug!(player = %player.name(), opponent = %opponent.name(), "battle created");
        Self {
            player,
            opponent,
            context: BattleContext::new(),
            rng: Box::new(rng),
        }
    }

    pub fn context(&self) -> &BattleContext {
        &self.context
    }

    pub fn current_phase(&self) -> Phase {
        self.context.current_phase()
    }

    pub fn current_turn(&self) -> u32 {
        self.context.current_turn()
    }

    pub fn character(&self, side: Side) -> &Character {
        match side {
            Side::Player => &*self.player,
            Side::Opponent => &*self.opponent,
        }
    }

    pub fn character_mut(&mut self, side: Side) -> &mut Character {
        match side {
            Side::Player => &mut *self.player,
            Side::Opponent => &mut *self.opponent,
        }
    }

    pub fn player(&self) -> &Character {
        &*self.player
    }

    pub fn opponent(&self) -> &Character {
        &*self.opponent
    }

    pub fn rng_mut(&mut self) -> &mut dyn RandomSource {
        &mut *self.rng
    }

    /// Moves to `phase` and dispatches it to both sides.
    ///
    /// Nothing is dispatched for `BATTLE_NOT_STARTED`. `BATTLE_END` does not
    /// stop further transitions. After `TURN_END` has been dispatched, every
    /// status that is no longer active is removed from both sides.
    pub fn switch_to(&mut self, phase: Phase) {
        self.context.enter(phase);
        let turn = self.context.current_turn();
        tracing::debug!(%phase, turn, "phase switched");
        if phase == Phase::BattleNotStarted {
            return;
        }

        self.player.dispatch_phase(
            phase.local_to(Side::Player),
            turn,
            &mut *self.opponent,
            &mut *self.rng,
        );
        self.opponent.dispatch_phase(
            phase.local_to(Side::Opponent),
            turn,
            &mut *self.player,
            &mut *self.rng,
        );

        if phase == Phase::TurnEnd {
            self.sweep_expired();
        }
    }

    /// Drops statuses that deactivated themselves, so a fresh application of
    /// the same effect is accepted next turn.
    fn sweep_expired(&mut self) {
        for side in [Side::Player, Side::Opponent] {
            let released = self.character_mut(side).clear_expired();
            if !released.is_empty() {
                tracing::debug!(%side, count = released.len(), "expired statuses cleared");
            }
        }
    }

    /// Switches to the successor of the current phase and returns it.
    pub fn advance(&mut self) -> Phase {
        let next = self.context.current_phase().next();
        self.switch_to(next);
        next
    }

    /// Names of the actions `side` may perform right now.
    pub fn available_actions(&self, side: Side) -> Vec<&str> {
        self.character(side)
            .available_actions(self.context.current_phase())
    }

    /// Runs the action `name` for `side` if it is available in the current
    /// phase; otherwise does nothing and returns `None`.
    pub fn perform(&mut self, side: Side, name: &str) -> Option<i32> {
        let phase = self.context.current_phase();
        let turn = self.context.current_turn();
        let (actor, opponent, rng) = self.parts(side);
        let Some((handler, source)) = actor.resolve_action(phase, name) else {
            tracing::debug!(%side, action = name, %phase, "action not available");
            return None;
        };

        tracing::debug!(%side, action = name, source = ?source, %phase, "performing action");
        let mut ctx = ActionContext {
            phase: phase.local_to(side),
            turn,
            actor,
            opponent,
            rng,
            source,
        };
        Some(handler(&mut ctx))
    }

    /// Performs the built-in attack for `side` if the phase allows it.
    pub fn attack(&mut self, side: Side) -> Option<i32> {
        self.perform(side, ATTACK_ACTION)
    }

    /// The surviving side once exactly one character is dead.
    pub fn winner(&self) -> Option<Side> {
        match (self.player.is_alive(), self.opponent.is_alive()) {
            (true, false) => Some(Side::Player),
            (false, true) => Some(Side::Opponent),
            _ => None,
        }
    }

    /// Splits the battle into acting side, other side and random source.
    fn parts(&mut self, side: Side) -> (&mut Character, &mut Character, &mut dyn RandomSource) {
        let rng: &mut dyn RandomSource = &mut *self.rng;
        match side {
            Side::Player => (&mut *self.player, &mut *self.opponent, rng),
            Side::Opponent => (&mut *self.opponent, &mut *self.player, rng),
        }
    }
}

impl Drop for Battle<'_> {
    fn drop(&mut self) {
        self.player.unbind();
        self.opponent.unbind();
        tracing::debug!(turn = self.context.current_turn(), "battle released");
    }
}

impl core::fmt::Debug for Battle<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Battle")
            .field("player", &self.player.name())
            .field("opponent", &self.opponent.name())
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
