//! Whole-inventory load/save against a single JSON file.

use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use stockroom_inventory::Inventory;

/// File name used when the caller does not supply a path.
pub const DEFAULT_INVENTORY_PATH: &str = "inventory.json";

/// Persistence failure.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("inventory file io: {0}")]
    Io(#[from] io::Error),

    #[error("inventory file parse: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load an inventory from the JSON file at `path`, replacing nothing in
/// place: the returned value is the whole mapping.
///
/// A missing file yields an empty inventory. Any other read failure, or a
/// file that is not a flat object of item name to numeric quantity,
/// propagates as an error.
pub fn load(path: impl AsRef<Path>) -> Result<Inventory, PersistError> {
    let path = path.as_ref();
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "inventory file missing, starting empty");
            return Ok(Inventory::new());
        }
        Err(err) => return Err(err.into()),
    };
    let inventory: Inventory = serde_json::from_str(&raw)?;
    tracing::debug!(path = %path.display(), items = inventory.len(), "loaded inventory");
    Ok(inventory)
}

/// Serialize the whole inventory to `path` as a flat JSON object,
/// pretty-printed with 4-space indentation, overwriting existing content.
pub fn save(inventory: &Inventory, path: impl AsRef<Path>) -> Result<(), PersistError> {
    let path = path.as_ref();
    // serde_json's default pretty printer indents by 2; the on-disk format
    // uses 4 spaces.
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    inventory.serialize(&mut ser)?;
    std::fs::write(path, buf)?;
    tracing::debug!(path = %path.display(), items = inventory.len(), "saved inventory");
    Ok(())
}
