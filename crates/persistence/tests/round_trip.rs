//! Black-box tests for the save/load round-trip law: saving an inventory and
//! loading it back reproduces the exact mapping, including fractional
//! quantities and insertion order.

use proptest::prelude::*;

use stockroom_inventory::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory};
use stockroom_persistence::{load, save};

fn scratch_path(dir: &tempfile::TempDir) -> std::path::PathBuf {
    dir.path().join("inventory.json")
}

#[test]
fn round_trip_preserves_integer_and_fractional_quantities() {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_path(&dir);

    let mut inv = Inventory::new();
    inv.add("apple", 10.0, None).unwrap();
    inv.add("flour", 1.75, None).unwrap();
    inv.add("banana", -2.0, None).unwrap();

    save(&inv, &path).unwrap();
    let reloaded = load(&path).unwrap();

    assert_eq!(reloaded, inv);
    assert_eq!(reloaded.quantity_of("flour"), 1.75);
}

#[test]
fn round_trip_preserves_mapping_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_path(&dir);

    let mut inv = Inventory::new();
    for name in ["zucchini", "apple", "melon", "banana"] {
        inv.add(name, 1.0, None).unwrap();
    }

    save(&inv, &path).unwrap();
    let reloaded = load(&path).unwrap();

    let order: Vec<&str> = reloaded.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(order, vec!["zucchini", "apple", "melon", "banana"]);
}

#[test]
fn empty_inventory_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_path(&dir);

    save(&Inventory::new(), &path).unwrap();
    let reloaded = load(&path).unwrap();

    assert!(reloaded.is_empty());
    assert!(reloaded.low_stock(DEFAULT_LOW_STOCK_THRESHOLD).is_empty());
}

#[test]
fn demo_flow_survives_a_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_path(&dir);

    let mut inv = Inventory::new();
    inv.add("apple", 10.0, None).unwrap();
    inv.add("banana", -2.0, None).unwrap();
    inv.remove("apple", 3.0);
    inv.remove("orange", 1.0);

    save(&inv, &path).unwrap();
    let reloaded = load(&path).unwrap();

    assert_eq!(reloaded.quantity_of("apple"), 7.0);
    let low: Vec<&str> = reloaded
        .low_stock(DEFAULT_LOW_STOCK_THRESHOLD)
        .iter()
        .map(|n| n.as_str())
        .collect();
    assert_eq!(low, vec!["banana"]);
    assert_eq!(reloaded.report(), "Items Report\napple -> 7\nbanana -> -2\n");
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        ..ProptestConfig::default()
    })]

    /// Property: save then load is the identity on inventories built from
    /// arbitrary names and quantities.
    #[test]
    fn save_then_load_is_identity(
        entries in prop::collection::vec(
            ("[a-z]{1,12}", -1_000_000i64..1_000_000),
            0..16,
        )
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = scratch_path(&dir);

        let mut inv = Inventory::new();
        for (name, quarter_qty) in &entries {
            // Quarter-unit steps exercise fractional quantities exactly.
            inv.add(name, *quarter_qty as f64 / 4.0, None).unwrap();
        }

        save(&inv, &path).unwrap();
        let reloaded = load(&path).unwrap();
        prop_assert_eq!(reloaded, inv);
    }
}
