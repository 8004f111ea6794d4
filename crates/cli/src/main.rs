//! `stockroom` binary: exercises the inventory store end to end against the
//! JSON file — add, remove, query, low stock, save, reload, report.

use anyhow::Context;

use stockroom_inventory::{AuditEntry, DEFAULT_LOW_STOCK_THRESHOLD, Inventory};
use stockroom_persistence as persistence;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let path = std::env::var("STOCKROOM_INVENTORY_PATH")
        .unwrap_or_else(|_| persistence::DEFAULT_INVENTORY_PATH.to_string());
    tracing::info!(path, "using inventory file");

    let mut inventory = Inventory::new();
    let mut audit: Vec<AuditEntry> = Vec::new();

    inventory.add("apple", 10.0, Some(&mut audit))?;
    inventory.add("banana", -2.0, Some(&mut audit))?;

    // A non-finite quantity is the one addition the store rejects.
    if let Err(err) = inventory.add("gadget", f64::NAN, Some(&mut audit)) {
        println!("Error: {err}");
    }

    inventory.remove("apple", 3.0);
    inventory.remove("orange", 1.0); // absent, silently ignored

    println!("Apple stock: {}", inventory.quantity_of("apple"));
    let low: Vec<&str> = inventory
        .low_stock(DEFAULT_LOW_STOCK_THRESHOLD)
        .iter()
        .map(|name| name.as_str())
        .collect();
    println!("Low items: {low:?}");

    persistence::save(&inventory, &path)
        .with_context(|| format!("failed to save inventory to {path}"))?;
    let inventory = persistence::load(&path)
        .with_context(|| format!("failed to load inventory from {path}"))?;

    print!("{}", inventory.report());

    for entry in &audit {
        tracing::debug!(audit = %entry, "recorded addition");
    }

    Ok(())
}
