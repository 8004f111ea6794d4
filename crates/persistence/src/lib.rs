//! `stockroom-persistence` — JSON file durability for the inventory.
//!
//! The only crate in the workspace that touches the filesystem. Durability
//! is entirely explicit: the inventory lives in memory and survives only
//! through [`save`] calls.

pub mod json_file;

pub use json_file::{DEFAULT_INVENTORY_PATH, PersistError, load, save};
