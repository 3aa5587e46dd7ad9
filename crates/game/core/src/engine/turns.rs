use super::Phase;

/// Turn counter and current phase of one battle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleContext {
    current_turn: u32,
    current_phase: Phase,
}

impl BattleContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero before the first `TURN_START`.
    pub fn current_turn(&self) -> u32 {
        self.current_turn
    }

    pub fn current_phase(&self) -> Phase {
        self.current_phase
    }

    /// Moves to `phase` and updates the turn counter.
    ///
    /// The first `TURN_START` sets the counter to 1; every `TURN_END` adds 1.
    pub(crate) fn enter(&mut self, phase: Phase) {
        match phase {
            Phase::TurnStart if self.current_turn == 0 => self.current_turn = 1,
            Phase::TurnEnd => self.current_turn += 1,
            _ => {}
        }
        self.current_phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_counter_follows_turn_boundaries() {
        let mut ctx = BattleContext::new();
        ctx.enter(Phase::BattleStart);
        assert_eq!(ctx.current_turn(), 0);

        ctx.enter(Phase::TurnStart);
        assert_eq!(ctx.current_turn(), 1);

        ctx.enter(Phase::TurnEnd);
        ctx.enter(Phase::TurnStart);
        assert_eq!(ctx.current_turn(), 2);
        assert_eq!(ctx.current_phase(), Phase::TurnStart);
    }
}
