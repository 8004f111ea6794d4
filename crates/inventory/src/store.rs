use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ItemName};

use crate::audit::AuditEntry;

/// Threshold below which an item counts as low stock, when the caller does
/// not supply one.
pub const DEFAULT_LOW_STOCK_THRESHOLD: f64 = 5.0;

/// The inventory: an insertion-ordered mapping from item name to quantity.
///
/// Quantities are `f64` so fractional stock (e.g. weighed goods) is
/// representable. An entry whose quantity settles at or below zero after a
/// removal is deleted from the mapping entirely.
///
/// Serializes transparently as a flat JSON object, item name to quantity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: IndexMap<ItemName, f64>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` units of `item`, creating the entry at zero first if absent.
    ///
    /// An empty item name is a silent no-op. A non-finite quantity (NaN or
    /// infinity) is a validation error and leaves the inventory unchanged.
    /// When `log` is supplied, a timestamped [`AuditEntry`] is appended on
    /// every effective addition.
    pub fn add(
        &mut self,
        item: &str,
        qty: f64,
        log: Option<&mut Vec<AuditEntry>>,
    ) -> DomainResult<()> {
        if item.is_empty() {
            return Ok(());
        }
        if !qty.is_finite() {
            return Err(DomainError::validation("quantity must be a finite number"));
        }
        let name = ItemName::new(item)?;
        *self.items.entry(name).or_insert(0.0) += qty;
        tracing::debug!(item, qty, "added stock");
        if let Some(log) = log {
            log.push(AuditEntry::addition(item, qty));
        }
        Ok(())
    }

    /// Remove `qty` units of `item`.
    ///
    /// A missing item is a no-op, not an error. If the remaining quantity is
    /// zero or below, the entry is deleted from the mapping — including a
    /// negative balance.
    pub fn remove(&mut self, item: &str, qty: f64) {
        // Explicit existence check: missing item is a contract-level no-op.
        let Some(current) = self.items.get_mut(item) else {
            return;
        };
        *current -= qty;
        tracing::debug!(item, qty, "removed stock");
        if *current <= 0.0 {
            // shift_remove keeps the remaining entries in insertion order.
            self.items.shift_remove(item);
            tracing::debug!(item, "stock depleted, entry dropped");
        }
    }

    /// Current quantity of `item`, or `0.0` if absent. Never fails.
    pub fn quantity_of(&self, item: &str) -> f64 {
        self.items.get(item).copied().unwrap_or(0.0)
    }

    /// Names of items with quantity strictly below `threshold`, in mapping
    /// order.
    pub fn low_stock(&self, threshold: f64) -> Vec<&ItemName> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(name, _)| name)
            .collect()
    }

    /// Human-readable listing of all items and quantities in mapping order.
    pub fn report(&self) -> String {
        let mut out = String::from("Items Report\n");
        for (name, qty) in &self.items {
            out.push_str(&format!("{name} -> {qty}\n"));
        }
        out
    }

    /// Iterate over `(name, quantity)` pairs in mapping order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, f64)> {
        self.items.iter().map(|(name, qty)| (name, *qty))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `item` currently has an entry in the mapping.
    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }
}
