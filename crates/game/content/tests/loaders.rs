use std::fs;
use std::path::PathBuf;

use duel_content::{ActorLoader, ConfigLoader, ItemLoader};
use duel_core::{BattleConfig, Capabilities, EquipSlot, Stat};
use tempfile::TempDir;

fn write(dir: &TempDir, file: &str, content: &str) -> PathBuf {
    let path = dir.path().join(file);
    fs::write(&path, content).unwrap();
    path
}

const ITEMS: &str = r#"(
    items: [
        (
            descriptor: (name: "Club", category: "WEAPON"),
            stat: (health: 8, attack: 3),
            equip: Some((stat_to_equip: (strength: 5), slots: ["hand_right"])),
            attack: Some((stat_on_attack: (attack: 2))),
        ),
        (
            descriptor: (name: "Bandage"),
            consume: Some((stat_on_consume: (health: 4))),
        ),
    ],
)"#;

#[test]
fn item_catalog_builds_items_in_order() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "items.ron", ITEMS);

    let items = ItemLoader::load(&path).unwrap();

    assert_eq!(items.len(), 2);
    let club = &items[0];
    assert_eq!(club.name(), "Club");
    assert_eq!(club.stat().attack, 3);
    assert_eq!(club.capabilities(), Capabilities::EQUIP | Capabilities::ATTACK);
    assert_eq!(
        club.core().equip().unwrap().stat_to_equip,
        Stat::ZERO.with_strength(5)
    );
    assert!(items[1].has(Capabilities::CONSUME));
}

#[test]
fn item_without_capability_is_reported_by_name() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "items.ron", r#"(items: [(descriptor: (name: "Pebble"))])"#);

    let err = ItemLoader::load(&path).unwrap_err().to_string();
    assert!(err.contains("Pebble"), "{err}");
}

#[test]
fn unknown_slot_is_rejected() {
    let err = ItemLoader::parse(
        r#"(items: [(descriptor: (name: "Tail"), equip: Some((slots: ["tail"])))])"#,
    )
    .unwrap_err()
    .to_string();
    assert!(err.contains("tail"), "{err}");
}

#[test]
fn missing_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.ron");
    let err = ItemLoader::load(&path).unwrap_err().to_string();
    assert!(err.contains("Failed to read file"), "{err}");
    assert!(err.contains("absent.ron"), "{err}");
}

#[test]
fn malformed_ron_is_a_parse_error() {
    let err = ItemLoader::parse("(items: [").unwrap_err().to_string();
    assert!(err.contains("Failed to parse item catalog RON"), "{err}");
}

const ROSTER: &str = r#"(
    actors: [
        (
            descriptor: (name: "Knight", category: "HUMAN"),
            stat: (health: 60, strength: 20, agility: 50),
            equipment: ["WoodenShield", "IronSword"],
            statuses: ["Poisoned"],
        ),
        (
            descriptor: (name: "Ghoul", category: "UNDEAD"),
            stat: (health: 40, strength: 16),
        ),
    ],
)"#;

#[test]
fn roster_equips_and_afflicts_from_the_catalog() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "actors.ron", ROSTER);

    let actors = ActorLoader::load(&path, &BattleConfig::default()).unwrap();

    assert_eq!(actors.len(), 2);
    let knight = &actors[0];
    assert_eq!(knight.stat.defense, 3);
    assert_eq!(
        knight.equipment().occupant(EquipSlot::HandLeft),
        Some("WoodenShield")
    );
    assert_eq!(
        knight.equipment().slot_of("IronSword"),
        Some(EquipSlot::HandRight)
    );
    assert!(knight.statuses().contains("Poisoned"));
    assert!(actors[1].descriptor.is_a("UNDEAD"));
}

#[test]
fn roster_rejects_unknown_items() {
    let err = ActorLoader::parse(
        r#"(actors: [(descriptor: (name: "Thief"), equipment: ["Dagger"])])"#,
        &BattleConfig::default(),
    )
    .unwrap_err()
    .to_string();
    assert!(err.contains("Dagger"), "{err}");
}

#[test]
fn roster_reports_ineligible_equipment() {
    let err = ActorLoader::parse(
        r#"(actors: [(descriptor: (name: "Child"), stat: (strength: 1), equipment: ["IronSword"])])"#,
        &BattleConfig::default(),
    )
    .unwrap_err()
    .to_string();
    assert!(err.contains("Child"), "{err}");
    assert!(err.contains("IronSword"), "{err}");
}

#[test]
fn roster_honors_configured_capacity() {
    let config = BattleConfig::new().with_capacities(1, 1);
    let err = ActorLoader::parse(
        r#"(actors: [(descriptor: (name: "Hoarder"), stat: (strength: 20), equipment: ["IronSword", "SilverSword"])])"#,
        &config,
    )
    .unwrap_err()
    .to_string();
    assert!(err.contains("capacity"), "{err}");
}

#[test]
fn config_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "battle.toml",
        "equipment_capacity = 4\nstatus_capacity = 2\nstatus_stacking = true\n",
    );

    let config = ConfigLoader::load(&path).unwrap();
    assert_eq!(config, BattleConfig::new().with_capacities(4, 2).with_status_stacking(true));
}
