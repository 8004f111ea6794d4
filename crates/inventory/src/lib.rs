//! Inventory domain module.
//!
//! This crate contains the inventory store and its business rules,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod audit;
pub mod store;

pub use audit::AuditEntry;
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory};
