//! Audit log entries for stock additions.
//!
//! Entries live in a caller-supplied `Vec<AuditEntry>` and are never
//! persisted; they exist only for the lifetime of the process.

use chrono::{DateTime, Utc};

/// A single audit record, capturing one addition to the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    occurred_at: DateTime<Utc>,
    description: String,
}

impl AuditEntry {
    /// Record an addition of `qty` units of `item`, timestamped now.
    pub fn addition(item: &str, qty: f64) -> Self {
        Self {
            occurred_at: Utc::now(),
            description: format!("Added {qty} of {item}"),
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl core::fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.occurred_at, self.description)
    }
}
