//! Swords.
//!
//! All swords fit either hand. A sword's own stat holds its durability and
//! its attack, so a crit doubles the blade's full damage.

use duel_core::{
    AttackCapability, AttackContext, Descriptor, EquipCapability, EquipSlots, Item, ItemBehavior,
    ItemBuilder, ItemCore, Phase, Stat, percent_chance,
};

use super::afflictions;

pub const CATEGORY: &str = "WEAPON";
pub const SUB_CATEGORY: &str = "SWORD";

/// Percent chance for an elemental sword to afflict its target on a strike.
pub const AFFLICT_CHANCE: i32 = 25;

pub const ICE_BOLT: &str = "ice_bolt";
pub const ICE_BOLT_MANA: i32 = 10;
pub const ICE_BOLT_DAMAGE: i32 = 6;

fn sword(name: &str, description: &str, durability: i32, requires: Stat, attack: i32) -> ItemBuilder {
    Item::builder(name)
        .description(description)
        .category(CATEGORY)
        .sub_category(SUB_CATEGORY)
        .stat(Stat::ZERO.with_health(durability).with_attack(attack))
        .equip(EquipCapability {
            stat_to_equip: requires,
            stat_on_equip: Stat::ZERO,
            slots: EquipSlots::HANDS,
        })
        .attack(AttackCapability::default())
}

pub fn rusted_sword() -> Item {
    sword(
        "RustedSword",
        "A worn-out and rusty sword with limited lifespan",
        5,
        Stat::ZERO.with_strength(13),
        8,
    )
    .build()
}

pub fn iron_sword() -> Item {
    sword(
        "IronSword",
        "A sturdy and reliable iron sword",
        25,
        Stat::ZERO.with_strength(15),
        12,
    )
    .build()
}

pub fn silver_sword() -> Item {
    sword(
        "SilverSword",
        "A finely crafted silver sword with a gleaming blade",
        25,
        Stat::ZERO.with_strength(18),
        18,
    )
    .build()
}

/// Crits against the undead and may set the target on fire.
#[derive(Debug)]
pub struct FlameBlade;

impl ItemBehavior for FlameBlade {
    fn can_crit(&self, _item: &ItemCore, opponent: &Descriptor) -> bool {
        opponent.is_a("UNDEAD")
    }

    fn after_attack(&self, item: &mut ItemCore, ctx: &mut AttackContext<'_>) {
        if percent_chance(AFFLICT_CHANCE, &mut *ctx.rng) {
            afflict(item, ctx, afflictions::burning());
        }
    }
}

pub fn flame_sword() -> Item {
    sword(
        "FlameSword",
        "A sword infused with the power of fire, emanating flames from its blade",
        15,
        Stat::ZERO.with_strength(15).with_intelligence(10),
        18,
    )
    .behavior(FlameBlade)
    .build()
}

/// May freeze the target on a strike.
#[derive(Debug)]
pub struct FrostBlade;

impl ItemBehavior for FrostBlade {
    fn after_attack(&self, item: &mut ItemCore, ctx: &mut AttackContext<'_>) {
        if percent_chance(AFFLICT_CHANCE, &mut *ctx.rng) {
            afflict(item, ctx, afflictions::freeze());
        }
    }
}

/// Also fires ice bolts: [`ICE_BOLT_MANA`] mana for [`ICE_BOLT_DAMAGE`]
/// damage, during the holder's attack.
pub fn frost_sword() -> Item {
    sword(
        "FrostSword",
        "A sword imbued with the chilling cold of ice, freezing enemies on impact",
        15,
        Stat::ZERO.with_strength(12).with_intelligence(8),
        14,
    )
    .behavior(FrostBlade)
    .action(ICE_BOLT, &[Phase::PlayerAttackStart], |ctx| {
        if ctx.actor.stat.mana < ICE_BOLT_MANA {
            tracing::debug!(caster = %ctx.actor.name(), mana = ctx.actor.stat.mana, "not enough mana");
            return 0;
        }
        ctx.actor.stat.mana -= ICE_BOLT_MANA;
        ctx.opponent.take_damage(ICE_BOLT_DAMAGE);
        ICE_BOLT_DAMAGE
    })
    .build()
}

fn afflict(item: &ItemCore, ctx: &mut AttackContext<'_>, status: Item) {
    match ctx.opponent.apply(status) {
        Ok(applied) => tracing::debug!(
            source = %item.name(),
            target = %applied.equipped_by().unwrap_or_default(),
            status = %applied.name(),
            "afflicted"
        ),
        Err(rejected) => tracing::debug!(source = %item.name(), %rejected, "affliction resisted"),
    }
}

#[cfg(test)]
mod tests {
    use duel_core::{Character, ScriptedRandom};

    use super::*;

    fn swordsman() -> Character {
        Character::new("Swordsman").with_stat(
            Stat::ZERO
                .with_strength(20)
                .with_intelligence(10)
                .with_agility(100)
                .with_mana(15),
        )
    }

    #[test]
    fn strength_gates_the_heavier_swords() {
        let novice = Character::new("Novice").with_stat(Stat::ZERO.with_strength(14));
        assert!(novice.can_equip(&rusted_sword()));
        assert!(!novice.can_equip(&iron_sword()));
        assert!(!novice.can_equip(&silver_sword()));
        assert!(!novice.can_equip(&flame_sword()));
    }

    #[test]
    fn two_swords_fill_both_hands() {
        let mut hero = swordsman();
        hero.equip(iron_sword()).unwrap();
        hero.equip(silver_sword()).unwrap();
        assert!(!hero.can_equip(&rusted_sword()));
    }

    #[test]
    fn flame_sword_sets_target_on_fire_on_low_roll() {
        let mut hero = swordsman();
        hero.equip(flame_sword()).unwrap();
        let mut target = Character::new("Target").with_stat(Stat::ZERO.with_health(50));

        // luck check draw, then affliction roll
        let damage = hero.attack(&mut target, &mut ScriptedRandom::new([1, 10]));
        assert_eq!(damage, 18);
        assert!(target.statuses().contains("Burning"));
        assert_eq!(target.stat.health, 50 - 18 - 5);
    }

    #[test]
    fn flame_sword_doubles_against_the_undead() {
        let mut hero = swordsman();
        hero.equip(flame_sword()).unwrap();
        let mut wight = Character::new("Wight")
            .with_descriptor(Descriptor::named("Wight").with_category("UNDEAD"))
            .with_stat(Stat::ZERO.with_health(50));

        assert_eq!(hero.item_attack("FlameSword", &wight.descriptor), 36);
        let damage = hero.attack(&mut wight, &mut ScriptedRandom::new([1, 90]));
        assert_eq!(damage, 36);
        assert_eq!(wight.stat.health, 14);
    }

    #[test]
    fn flame_sword_spares_target_on_high_roll() {
        let mut hero = swordsman();
        hero.equip(flame_sword()).unwrap();
        let mut target = Character::new("Target").with_stat(Stat::ZERO.with_health(50));

        hero.attack(&mut target, &mut ScriptedRandom::new([1, 90]));
        assert!(target.statuses().is_empty());
    }

    #[test]
    fn ice_bolt_spends_mana() {
        use duel_core::{Battle, Side};

        let mut hero = swordsman();
        hero.equip(frost_sword()).unwrap();
        let mut target = Character::new("Target").with_stat(Stat::ZERO.with_health(20));

        let mut battle = Battle::new(&mut hero, &mut target, ScriptedRandom::constant(1));
        battle.switch_to(Phase::PlayerAttackStart);
        assert_eq!(battle.perform(Side::Player, ICE_BOLT), Some(ICE_BOLT_DAMAGE));
        assert_eq!(battle.perform(Side::Player, ICE_BOLT), Some(0));
        assert_eq!(battle.player().stat.mana, 5);
        assert_eq!(battle.opponent().stat.health, 14);
    }
}
