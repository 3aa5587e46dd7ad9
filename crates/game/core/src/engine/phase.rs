/// Which end of a battle a character is bound to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Side {
    /// The initiating side; its attack phases are `PLAYER_*`.
    Player,
    Opponent,
}

impl Side {
    pub const fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Battle phase.
///
/// Steady-state cycle:
///
/// ```text
/// TURN_START -> PLAYER_ATTACK_START -> PLAYER_ATTACK_END
///   -> OPPONENT_ATTACK_START -> OPPONENT_ATTACK_END -> TURN_END -> TURN_START
/// ```
///
/// bracketed by `BATTLE_START` and `BATTLE_END`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Phase {
    #[default]
    BattleNotStarted,
    BattleStart,
    BattleEnd,
    TurnStart,
    TurnEnd,
    PlayerAttackStart,
    PlayerAttackEnd,
    OpponentAttackStart,
    OpponentAttackEnd,
}

impl Phase {
    /// Swaps `PLAYER_*` and `OPPONENT_*`; every other phase maps to itself.
    pub const fn mirrored(self) -> Phase {
        match self {
            Phase::PlayerAttackStart => Phase::OpponentAttackStart,
            Phase::PlayerAttackEnd => Phase::OpponentAttackEnd,
            Phase::OpponentAttackStart => Phase::PlayerAttackStart,
            Phase::OpponentAttackEnd => Phase::PlayerAttackEnd,
            other => other,
        }
    }

    /// The phase as seen by a character on `side`.
    pub const fn local_to(self, side: Side) -> Phase {
        match side {
            Side::Player => self,
            Side::Opponent => self.mirrored(),
        }
    }

    /// Successor in the phase cycle. `BATTLE_END` is its own successor.
    pub const fn next(self) -> Phase {
        match self {
            Phase::BattleNotStarted => Phase::BattleStart,
            Phase::BattleStart => Phase::TurnStart,
            Phase::TurnStart => Phase::PlayerAttackStart,
            Phase::PlayerAttackStart => Phase::PlayerAttackEnd,
            Phase::PlayerAttackEnd => Phase::OpponentAttackStart,
            Phase::OpponentAttackStart => Phase::OpponentAttackEnd,
            Phase::OpponentAttackEnd => Phase::TurnEnd,
            Phase::TurnEnd => Phase::TurnStart,
            Phase::BattleEnd => Phase::BattleEnd,
        }
    }

    pub const fn is_attack_phase(self) -> bool {
        matches!(
            self,
            Phase::PlayerAttackStart
                | Phase::PlayerAttackEnd
                | Phase::OpponentAttackStart
                | Phase::OpponentAttackEnd
        )
    }
}
