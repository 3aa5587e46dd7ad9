//! Battle participants.
//!
//! A [`Character`] owns its stat, its equipment and status containers, an
//! action registry and actor-level phase hooks. It is built standalone and
//! bound to a side only while a [`Battle`](crate::engine::Battle) borrows it.

mod items;

use crate::action::{ATTACK_ACTION, ActionContext, ActionHandler, ActionRegistry};
use crate::config::BattleConfig;
use crate::container::{Equipment, Statuses};
use crate::descriptor::Descriptor;
use crate::engine::{HookContext, Phase, PhaseHook, Side};
use crate::error::ConfigError;
use crate::rng::RandomSource;
use crate::stats::Stat;

/// Data form of a character, as read from content files.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CharacterSpec {
    pub descriptor: Descriptor,
    pub stat: Stat,
}

/// A combatant.
#[derive(Clone, Debug)]
pub struct Character {
    pub descriptor: Descriptor,
    pub stat: Stat,
    pub(crate) equipment: Equipment,
    pub(crate) statuses: Statuses,
    side: Option<Side>,
    actions: ActionRegistry,
    hooks: Vec<PhaseHook>,
}

impl Character {
    /// Creates a character with zero stat and default capacities.
    pub fn new(name: impl Into<String>) -> Self {
        Self::assemble(
            Descriptor::named(name),
            Stat::ZERO,
            Equipment::default(),
            Statuses::default(),
        )
    }

    /// Creates a character with capacities taken from `config`.
    pub fn with_config(
        descriptor: Descriptor,
        stat: Stat,
        config: &BattleConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::assemble(
            descriptor,
            stat,
            Equipment::with_capacity(config.equipment_capacity)?,
            Statuses::with_capacity(config.status_capacity, config.status_stacking)?,
        ))
    }

    pub fn from_spec(spec: CharacterSpec, config: &BattleConfig) -> Result<Self, ConfigError> {
        Self::with_config(spec.descriptor, spec.stat, config)
    }

    fn assemble(
        descriptor: Descriptor,
        stat: Stat,
        equipment: Equipment,
        statuses: Statuses,
    ) -> Self {
        let mut actions = ActionRegistry::new();
        actions.register(ATTACK_ACTION, &[Phase::PlayerAttackStart], |ctx| {
            ctx.actor.attack(ctx.opponent, &mut *ctx.rng)
        });
        Self {
            descriptor,
            stat,
            equipment,
            statuses,
            side: None,
            actions,
            hooks: Vec::new(),
        }
    }

    pub fn with_stat(mut self, stat: Stat) -> Self {
        self.stat = stat;
        self
    }

    pub fn with_descriptor(mut self, descriptor: Descriptor) -> Self {
        self.descriptor = descriptor;
        self
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    pub fn is_alive(&self) -> bool {
        self.stat.is_alive()
    }

    /// Side this character is bound to, `None` outside a battle.
    pub fn side(&self) -> Option<Side> {
        self.side
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub fn statuses(&self) -> &Statuses {
        &self.statuses
    }

    // ========================================================================
    // Health
    // ========================================================================

    /// Restores `amount` health. No-op unless `amount` is positive.
    pub fn heal(&mut self, amount: i32) {
        if amount > 0 {
            self.stat.health += amount;
        }
    }

    /// Removes `amount` health, unclamped. No-op unless `amount` is positive.
    pub fn take_damage(&mut self, amount: i32) {
        if amount > 0 {
            self.stat.health -= amount;
        }
    }

    /// Applies raw incoming damage from an opponent's strike.
    ///
    /// Not floored: negative damage heals.
    pub(crate) fn defend(&mut self, incoming: i32) {
        self.stat.health -= incoming;
    }

    // ========================================================================
    // Actions
    // ========================================================================

    pub fn actions(&self) -> &ActionRegistry {
        &self.actions
    }

    /// Registers a character-level action.
    ///
    /// # Panics
    ///
    /// Panics if `phases` is empty.
    pub fn register_action<F>(&mut self, name: impl Into<String>, phases: &[Phase], handler: F)
    where
        F: Fn(&mut ActionContext<'_>) -> i32 + Send + Sync + 'static,
    {
        self.actions.register(name, phases, handler);
    }

    pub fn unregister_action(&mut self, name: &str) -> bool {
        self.actions.unregister(name)
    }

    /// Translates a battle phase into this character's point of view.
    pub fn local_phase(&self, phase: Phase) -> Phase {
        match self.side {
            Some(side) => phase.local_to(side),
            None => phase,
        }
    }

    /// Actions runnable in the battle phase `phase`: the character's own,
    /// then those of its equipped items, without duplicates.
    pub fn available_actions(&self, phase: Phase) -> Vec<&str> {
        let local = self.local_phase(phase);
        let mut names: Vec<&str> = self.actions.available(local).collect();
        for item in self.equipment.iter() {
            for name in item.actions().available(local) {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Finds the handler for `name` in the battle phase `phase`, with the name
    /// of the item that registered it.
    pub fn resolve_action(
        &self,
        phase: Phase,
        name: &str,
    ) -> Option<(ActionHandler, Option<String>)> {
        let local = self.local_phase(phase);
        if self.actions.allows(name, local) {
            return self.actions.get(name).map(|entry| (entry.handler(), None));
        }
        self.equipment.iter().find_map(|item| {
            item.actions()
                .get(name)
                .filter(|entry| entry.allows(local))
                .map(|entry| (entry.handler(), Some(item.name().to_owned())))
        })
    }

    // ========================================================================
    // Phase hooks
    // ========================================================================

    /// Adds an actor-level hook run whenever this character enters `phase`
    /// (local point of view).
    pub fn on_phase<F>(&mut self, phase: Phase, handler: F)
    where
        F: Fn(&mut HookContext<'_>) + Send + Sync + 'static,
    {
        self.hooks.push(PhaseHook::new(phase, handler));
    }

    pub fn hooks(&self) -> &[PhaseHook] {
        &self.hooks
    }

    /// Runs this character's side of a phase transition: own hooks, then each
    /// equipped item, then each status item.
    pub(crate) fn dispatch_phase(
        &mut self,
        phase: Phase,
        turn: u32,
        opponent: &mut Character,
        rng: &mut dyn RandomSource,
    ) {
        let Character {
            descriptor,
            stat,
            equipment,
            statuses,
            hooks,
            ..
        } = self;
        let mut ctx = HookContext {
            phase,
            turn,
            holder: stat,
            holder_descriptor: descriptor,
            opponent: &mut opponent.stat,
            opponent_descriptor: &opponent.descriptor,
            rng,
        };

        for hook in hooks.iter() {
            hook.fire(&mut ctx);
        }
        for item in equipment.iter_mut() {
            item.behavior.on_phase(&mut item.core, &mut ctx);
        }
        for item in statuses.iter_mut() {
            let was_active = item.core.active;
            item.behavior.on_phase(&mut item.core, &mut ctx);
            if was_active && !item.core.active {
                tracing::debug!(
                    holder = %ctx.holder_descriptor.name,
                    status = %item.name(),
                    %phase,
                    "status expired"
                );
            }
        }
    }

    // ========================================================================
    // Battle binding
    // ========================================================================

    /// # Panics
    ///
    /// Panics if the character is already bound to a battle.
    pub(crate) fn bind(&mut self, side: Side) {
        assert!(
            self.side.is_none(),
            "character `{}` is already bound to a battle",
            self.descriptor.name
        );
        self.side = Some(side);
    }

    pub(crate) fn unbind(&mut self) {
        self.side = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_characters_know_how_to_attack() {
        let hero = Character::new("Hero");
        assert_eq!(hero.available_actions(Phase::PlayerAttackStart), [ATTACK_ACTION]);
        assert!(hero.available_actions(Phase::OpponentAttackStart).is_empty());
        assert!(hero.side().is_none());
    }

    #[test]
    fn heal_and_damage_ignore_non_positive_amounts() {
        let mut hero = Character::new("Hero").with_stat(Stat::ZERO.with_health(10));
        hero.heal(0);
        hero.heal(-4);
        hero.take_damage(-4);
        assert_eq!(hero.stat.health, 10);

        hero.take_damage(15);
        assert_eq!(hero.stat.health, -5);
        assert!(!hero.is_alive());
        hero.heal(6);
        assert_eq!(hero.stat.health, 1);
    }

    #[test]
    fn raw_defense_is_not_floored() {
        let mut hero = Character::new("Hero").with_stat(Stat::ZERO.with_health(10));
        hero.defend(-9);
        assert_eq!(hero.stat.health, 19);
    }

    #[test]
    fn zero_capacity_config_is_rejected() {
        let config = BattleConfig::new().with_capacities(0, 4);
        let err = Character::with_config(Descriptor::default(), Stat::ZERO, &config).unwrap_err();
        assert_eq!(
            err,
            ConfigError::ZeroCapacity {
                container: "equipment"
            }
        );
    }

    #[test]
    #[should_panic(expected = "already bound")]
    fn binding_twice_panics() {
        let mut hero = Character::new("Hero");
        hero.bind(Side::Player);
        hero.bind(Side::Opponent);
    }

    #[test]
    fn opponent_side_sees_mirrored_phases() {
        let mut villain = Character::new("Villain");
        villain.bind(Side::Opponent);
        assert_eq!(
            villain.available_actions(Phase::OpponentAttackStart),
            [ATTACK_ACTION]
        );
        assert!(villain.available_actions(Phase::PlayerAttackStart).is_empty());
    }
}
