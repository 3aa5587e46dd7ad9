use std::sync::{Arc, Mutex};

use duel_core::{
    ATTACK_ACTION, AttackCapability, Battle, BattleConfig, Character, ConsumeCapability,
    DefendCapability, Descriptor, EquipCapability, EquipSlots, HookContext, Item, ItemBehavior,
    ItemCore, Phase, RejectReason, ScriptedRandom, Side, Stat, StatusCapability,
};

const PLAYER: Stat = Stat::from_array([10, 20, 30, 40, 50, 60, 70, 100, 0]);
const ON_EQUIP: Stat = Stat::from_array([1, 2, 3, 4, 5, 6, 7, 8, 9]);

fn trinket(name: &str, stat_to_equip: Stat) -> Item {
    Item::builder(name)
        .equip(EquipCapability {
            stat_to_equip,
            stat_on_equip: ON_EQUIP,
            slots: EquipSlots::HANDS,
        })
        .build()
}

fn tonic(name: &str, stat_to_consume: Stat) -> Item {
    Item::builder(name)
        .consume(ConsumeCapability {
            stat_to_consume,
            stat_on_consume: Stat::from_array([0, 1, 2, 3, 4, 5, 6, 7, 8]),
        })
        .build()
}

#[test]
fn equip_and_unequip_track_stat_deltas() {
    let mut player = Character::new("Player").with_stat(PLAYER);

    let too_demanding = trinket("trinket3", PLAYER.with_strength(41));
    assert_eq!(
        player.equip(too_demanding).unwrap_err().reason,
        RejectReason::Ineligible
    );
    player.equip(trinket("trinket", PLAYER)).unwrap();
    assert_eq!(
        player.equip(trinket("trinket", PLAYER)).unwrap_err().reason,
        RejectReason::NameTaken
    );
    player.equip(trinket("trinket2", PLAYER)).unwrap();
    assert_eq!(
        player.equip(tonic("tonic", Stat::ZERO)).unwrap_err().reason,
        RejectReason::MissingCapability(duel_core::Capabilities::EQUIP)
    );

    assert_eq!(
        player.stat.to_array(),
        [12, 24, 36, 48, 60, 72, 84, 116, 18]
    );

    player.unequip("trinket").unwrap();
    assert_eq!(player.unequip("trinket").unwrap_err(), RejectReason::NotPresent);
    assert_eq!(player.equipment().names().collect::<Vec<_>>(), ["trinket2"]);
    assert_eq!(
        player.stat.to_array(),
        [11, 22, 33, 44, 55, 66, 77, 108, 9]
    );

    player.unequip("trinket2").unwrap();
    assert_eq!(player.stat, PLAYER);
}

#[test]
fn consuming_accumulates_deltas() {
    let mut player = Character::new("Player").with_stat(PLAYER);

    let picky = tonic("tonic3", Stat::ZERO.with_intelligence(51));
    assert_eq!(
        player.consume(picky).unwrap_err().reason,
        RejectReason::Ineligible
    );
    player.consume(tonic("tonic", Stat::ZERO)).unwrap();
    player.consume(tonic("tonic2", Stat::ZERO)).unwrap();

    assert_eq!(
        player.stat.to_array(),
        [10, 22, 34, 46, 58, 70, 82, 114, 16]
    );
}

#[test]
fn turn_counter_starts_on_first_turn_start() {
    let mut player = Character::new("Player");
    let mut opponent = Character::new("Opponent");
    let mut battle = Battle::new(&mut player, &mut opponent, ScriptedRandom::constant(1));

    assert_eq!(battle.current_phase(), Phase::BattleNotStarted);
    assert_eq!(battle.advance(), Phase::BattleStart);
    assert_eq!(battle.current_turn(), 0);

    assert_eq!(battle.advance(), Phase::TurnStart);
    assert_eq!(battle.current_turn(), 1);

    for _ in 0..5 {
        battle.advance();
    }
    assert_eq!(battle.current_phase(), Phase::TurnEnd);
    assert_eq!(battle.current_turn(), 2);

    assert_eq!(battle.advance(), Phase::TurnStart);
    assert_eq!(battle.current_turn(), 2);

    battle.switch_to(Phase::BattleEnd);
    battle.switch_to(Phase::TurnStart);
    assert_eq!(battle.current_phase(), Phase::TurnStart);
}

#[test]
fn available_actions_are_mirrored_for_the_opponent() {
    let mut player = Character::new("Player");
    let mut opponent = Character::new("Opponent");
    let mut battle = Battle::new(&mut player, &mut opponent, ScriptedRandom::constant(1));

    battle.switch_to(Phase::PlayerAttackStart);
    assert_eq!(battle.available_actions(Side::Player), [ATTACK_ACTION]);
    assert!(battle.available_actions(Side::Opponent).is_empty());
    assert_eq!(battle.perform(Side::Opponent, ATTACK_ACTION), None);

    battle.switch_to(Phase::OpponentAttackStart);
    assert!(battle.available_actions(Side::Player).is_empty());
    assert_eq!(battle.available_actions(Side::Opponent), [ATTACK_ACTION]);
}

#[test]
fn battle_attack_runs_the_registered_action() {
    let mut player = Character::new("Player").with_stat(PLAYER);
    let mut opponent = Character::new("Opponent")
        .with_stat(Stat::from_array([9, 19, 29, 39, 49, 59, 69, 0, -1]));

    player
        .equip(
            Item::builder("weapon")
                .stat(Stat::ZERO.with_attack(8).with_health(5))
                .equip(EquipCapability {
                    slots: EquipSlots::HAND_RIGHT,
                    ..Default::default()
                })
                .attack(AttackCapability {
                    stat_on_attack: Stat::ZERO.with_attack(22),
                })
                .build(),
        )
        .unwrap();
    opponent
        .equip(
            Item::builder("shield")
                .stat(Stat::ZERO.with_defense(4).with_health(5))
                .equip(EquipCapability {
                    stat_to_equip: Stat::from_array([-99; Stat::FIELDS]),
                    stat_on_equip: Stat::ZERO.with_defense(3),
                    slots: EquipSlots::HAND_LEFT,
                })
                .defend(DefendCapability {
                    stat_on_defend: Stat::ZERO.with_defense(6),
                })
                .build(),
        )
        .unwrap();

    let mut battle = Battle::new(&mut player, &mut opponent, ScriptedRandom::constant(1));
    battle.switch_to(Phase::PlayerAttackStart);

    // 8 + 20 + 22 - 4 - (29 + 3 + 6)
    assert_eq!(battle.attack(Side::Player), Some(8));
    assert_eq!(battle.opponent().stat.health, 1);
    assert_eq!(battle.winner(), None);

    assert_eq!(battle.attack(Side::Player), Some(8));
    assert_eq!(battle.winner(), Some(Side::Player));
    let shield = battle.opponent().equipment().get("shield").unwrap();
    assert_eq!(shield.stat().health, 3);
}

#[test]
fn dropping_the_battle_releases_both_sides() {
    let mut player = Character::new("Player");
    let mut opponent = Character::new("Opponent");
    {
        let battle = Battle::new(&mut player, &mut opponent, ScriptedRandom::constant(1));
        assert_eq!(battle.player().side(), Some(Side::Player));
        assert_eq!(battle.opponent().side(), Some(Side::Opponent));
    }
    assert_eq!(player.side(), None);
    assert_eq!(opponent.side(), None);

    let rematch = Battle::new(&mut opponent, &mut player, ScriptedRandom::constant(1));
    assert_eq!(rematch.player().name(), "Opponent");
}

/// Sets holder agility to zero for three turns, then restores it.
#[derive(Debug)]
struct Stun;

impl ItemBehavior for Stun {
    fn on_apply(&self, item: &mut ItemCore, holder: &mut Stat) {
        item.saved.agility = holder.agility;
        holder.agility = 0;
    }

    fn on_phase(&self, item: &mut ItemCore, ctx: &mut HookContext<'_>) {
        if !item.active || ctx.phase != Phase::TurnStart {
            return;
        }
        item.stat.health -= 1;
        ctx.holder.health -= 1;
        if item.stat.health <= 0 {
            ctx.holder.agility = item.saved.agility;
            item.active = false;
        }
    }
}

fn stun() -> Item {
    Item::builder("Stun")
        .stat(Stat::ZERO.with_health(3))
        .status(StatusCapability::default())
        .behavior(Stun)
        .build()
}

#[test]
fn timed_status_stops_after_its_counter_runs_out() {
    let mut player = Character::new("Player").with_stat(PLAYER);
    let mut opponent = Character::new("Opponent").with_stat(Stat::ZERO.with_health(10));
    opponent.apply(stun()).unwrap();

    let mut battle = Battle::new(&mut player, &mut opponent, ScriptedRandom::constant(1));
    battle.switch_to(Phase::BattleStart);
    for _ in 0..2 {
        battle.switch_to(Phase::TurnStart);
        battle.switch_to(Phase::TurnEnd);
    }
    battle.switch_to(Phase::TurnStart);

    let status = battle.opponent().statuses().get("Stun").unwrap();
    assert!(!status.is_active());
    assert_eq!(status.stat().health, 0);

    // swept at the end of the turn it expired in
    battle.switch_to(Phase::TurnEnd);
    assert!(battle.opponent().statuses().is_empty());

    for _ in 0..2 {
        battle.switch_to(Phase::TurnStart);
        battle.switch_to(Phase::TurnEnd);
    }
    assert_eq!(battle.opponent().stat.health, 7);
}

#[test]
fn expired_status_can_be_applied_again_next_turn() {
    let mut player = Character::new("Player");
    let mut opponent =
        Character::new("Opponent").with_stat(Stat::ZERO.with_health(10).with_agility(30));
    opponent.apply(stun()).unwrap();

    let mut battle = Battle::new(&mut player, &mut opponent, ScriptedRandom::constant(1));
    for _ in 0..3 {
        battle.switch_to(Phase::TurnStart);
        battle.switch_to(Phase::TurnEnd);
    }
    assert_eq!(battle.opponent().stat.agility, 30);

    let target = battle.character_mut(Side::Opponent);
    target.apply(stun()).unwrap();
    assert_eq!(target.stat.agility, 0);
    assert!(target.statuses().get("Stun").unwrap().is_active());
}

#[test]
fn expired_override_is_restored_and_cleared() {
    let mut target = Character::new("Target").with_stat(Stat::ZERO.with_agility(40));
    target.apply(stun()).unwrap();
    assert_eq!(target.stat.agility, 0);

    let mut other = Character::new("Other");
    {
        let mut battle = Battle::new(&mut other, &mut target, ScriptedRandom::constant(1));
        for _ in 0..3 {
            battle.switch_to(Phase::TurnStart);
        }
    }
    assert_eq!(target.stat.agility, 40);
    assert_eq!(target.clear_expired().len(), 1);
    assert!(target.statuses().is_empty());
    assert_eq!(target.stat.agility, 40);
}

#[test]
fn stacking_statuses_merge_durations() {
    let config = BattleConfig::new().with_status_stacking(true);
    let mut target =
        Character::with_config(Descriptor::named("Target"), Stat::ZERO.with_agility(9), &config)
            .unwrap();

    target.apply(stun()).unwrap();
    let merged = target.apply(stun()).unwrap();
    assert_eq!(merged.stat().health, 6);
    assert_eq!(target.statuses().len(), 1);
    assert_eq!(target.stat.agility, 0);
}

#[derive(Debug)]
struct SmitesUndead;

impl ItemBehavior for SmitesUndead {
    fn can_crit(&self, _item: &ItemCore, opponent: &Descriptor) -> bool {
        opponent.is_a("UNDEAD")
    }
}

#[test]
fn crit_doubles_item_attack_against_designated_category() {
    let mace = || {
        Item::builder("Mace")
            .stat(Stat::ZERO.with_attack(10).with_health(20))
            .equip(EquipCapability {
                slots: EquipSlots::HAND_RIGHT,
                ..Default::default()
            })
            .attack(AttackCapability::default())
            .behavior(SmitesUndead)
            .build()
    };
    let mut cleric = Character::new("Cleric").with_stat(Stat::ZERO.with_agility(100));
    cleric.equip(mace()).unwrap();

    let mut ghoul = Character::new("Ghoul")
        .with_descriptor(Descriptor::named("Ghoul").with_sub_category("UNDEAD"))
        .with_stat(Stat::ZERO.with_health(50));
    let mut bandit = Character::new("Bandit").with_stat(Stat::ZERO.with_health(50));

    let mut rng = ScriptedRandom::constant(1);
    assert_eq!(cleric.attack(&mut ghoul, &mut rng), 20);
    assert_eq!(cleric.attack(&mut bandit, &mut rng), 10);
}

#[test]
fn hooks_run_actor_then_equipment_then_statuses() {
    #[derive(Debug)]
    struct Records(&'static str, Arc<Mutex<Vec<&'static str>>>);

    impl ItemBehavior for Records {
        fn on_phase(&self, _item: &mut ItemCore, ctx: &mut HookContext<'_>) {
            if ctx.phase == Phase::TurnStart {
                self.1.lock().unwrap().push(self.0);
            }
        }
    }

    let log = Arc::new(Mutex::new(Vec::new()));
    let mut player = Character::new("Player");
    let actor_log = Arc::clone(&log);
    player.on_phase(Phase::TurnStart, move |_| actor_log.lock().unwrap().push("actor"));
    player
        .apply(
            Item::builder("Aura")
                .status(StatusCapability::default())
                .behavior(Records("status", Arc::clone(&log)))
                .build(),
        )
        .unwrap();
    player
        .equip(
            Item::builder("Charm")
                .equip(EquipCapability {
                    slots: EquipSlots::NECK,
                    ..Default::default()
                })
                .behavior(Records("equipment", Arc::clone(&log)))
                .build(),
        )
        .unwrap();

    let mut opponent = Character::new("Opponent");
    let mut battle = Battle::new(&mut player, &mut opponent, ScriptedRandom::constant(1));
    battle.switch_to(Phase::BattleNotStarted);
    assert!(log.lock().unwrap().is_empty());

    battle.switch_to(Phase::TurnStart);
    assert_eq!(*log.lock().unwrap(), ["actor", "equipment", "status"]);
}

#[test]
fn item_actions_are_available_while_equipped() {
    let wand = Item::builder("Wand")
        .equip(EquipCapability {
            slots: EquipSlots::HAND_RIGHT,
            ..Default::default()
        })
        .action("zap", &[Phase::PlayerAttackStart], |ctx| {
            ctx.opponent.take_damage(3);
            assert_eq!(ctx.source.as_deref(), Some("Wand"));
            3
        })
        .build();

    let mut player = Character::new("Player");
    let mut opponent = Character::new("Opponent").with_stat(Stat::ZERO.with_health(10));
    player.equip(wand).unwrap();

    {
        let mut battle = Battle::new(&mut opponent, &mut player, ScriptedRandom::constant(1));
        battle.switch_to(Phase::OpponentAttackStart);
        assert_eq!(battle.available_actions(Side::Opponent), [ATTACK_ACTION, "zap"]);
        assert_eq!(battle.perform(Side::Opponent, "zap"), Some(3));
        assert_eq!(battle.player().stat.health, 7);
    }

    player.unequip("Wand").unwrap();
    assert_eq!(player.available_actions(Phase::PlayerAttackStart), [ATTACK_ACTION]);
}
