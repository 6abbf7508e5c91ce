//! # Inventory Ledger
//!
//! Tracks per-SKU stock counts and records reservations.
//!
//! ## Reservation Policy: Best Effort
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE LEDGER NEVER SAYS NO                                               │
//! │                                                                         │
//! │  reserve("SKU-102", 3) with stock = 2                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  stock becomes -1, a journal entry is recorded, a DEBUG line is         │
//! │  emitted. No error, no rejection.                                       │
//! │                                                                         │
//! │  Stock checks are ADVISORY in this workflow: the pipeline logs a        │
//! │  warning when stock is short and proceeds anyway. The caller decides    │
//! │  whether low stock is actionable.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unknown SKUs read as stock 0 (out of stock, not invalid), and reserving
//! against one creates a negative entry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Reservation Journal Entry
// =============================================================================

/// Diagnostic record of a single reservation.
///
/// Not a control-flow signal: nothing reads the journal to make decisions.
/// It exists so tests and operators can see what the ledger did and when.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    /// SKU the stock was decremented for.
    pub sku: String,

    /// Quantity reserved.
    pub quantity: i64,

    /// Stock remaining after the decrement (may be negative).
    pub remaining: i64,

    /// When the reservation happened.
    pub reserved_at: DateTime<Utc>,
}

// =============================================================================
// Inventory Ledger
// =============================================================================

/// Per-SKU stock counts with unconditional, best-effort reservation.
///
/// Lifetime: process lifetime in the app, fixture lifetime in tests. There
/// is no persistence.
#[derive(Debug, Default)]
pub struct InventoryLedger {
    /// SKU → remaining stock. May go negative under the reservation policy.
    stock: HashMap<String, i64>,

    /// Append-only record of every reservation made.
    journal: Vec<Reservation>,
}

impl InventoryLedger {
    /// Creates an empty ledger (every SKU reads as out of stock).
    pub fn new() -> Self {
        InventoryLedger::default()
    }

    /// Creates a ledger seeded with initial stock levels.
    ///
    /// ## Example
    /// ```rust
    /// use orderflow_engine::inventory::InventoryLedger;
    ///
    /// let ledger = InventoryLedger::with_stock([("SKU-100", 10), ("SKU-101", 5)]);
    /// assert_eq!(ledger.get_stock("SKU-100"), 10);
    /// ```
    pub fn with_stock<I, S>(initial: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        InventoryLedger {
            stock: initial.into_iter().map(|(sku, n)| (sku.into(), n)).collect(),
            journal: Vec::new(),
        }
    }

    /// Sets the stock level for a SKU, replacing any existing count.
    pub fn set_stock(&mut self, sku: impl Into<String>, quantity: i64) {
        self.stock.insert(sku.into(), quantity);
    }

    /// Returns the current stock for a SKU.
    ///
    /// Unknown SKUs return `0`: they are treated as out of stock, not as an
    /// error.
    pub fn get_stock(&self, sku: &str) -> i64 {
        self.stock.get(sku).copied().unwrap_or(0)
    }

    /// Unconditionally decrements stock for a SKU by `quantity`.
    ///
    /// ## Behavior
    /// - Decrements even when this drives stock negative
    /// - Creates a (negative) entry for previously unknown SKUs
    /// - Never blocks or rejects; the caller decides whether insufficient
    ///   stock is actionable
    /// - Appends a journal entry and emits a DEBUG diagnostic
    pub fn reserve(&mut self, sku: &str, quantity: i64) {
        let remaining = self.get_stock(sku) - quantity;
        self.stock.insert(sku.to_string(), remaining);

        tracing::debug!(sku, quantity, remaining, "Reserved stock");

        self.journal.push(Reservation {
            sku: sku.to_string(),
            quantity,
            remaining,
            reserved_at: Utc::now(),
        });
    }

    /// All reservations made so far, in order.
    pub fn journal(&self) -> &[Reservation] {
        &self.journal
    }
}

// =============================================================================
// Shared Inventory State
// =============================================================================

/// Shared, mutex-guarded inventory ledger.
///
/// ## Thread Safety
/// One ledger instance is shared across every pipeline call in a process.
/// Concurrent reservations on the same SKU would race on the stock
/// decrement, so the ledger sits behind `Arc<Mutex<T>>`:
/// - `Arc`: shared ownership across callers
/// - `Mutex`: one reservation sequence at a time
///
/// ## Why Not RwLock?
/// Almost every pipeline touch of the ledger is a write (reserve). A RwLock
/// would add complexity with minimal benefit.
#[derive(Debug, Clone, Default)]
pub struct InventoryState {
    ledger: Arc<Mutex<InventoryLedger>>,
}

impl InventoryState {
    /// Creates shared state around an empty ledger.
    pub fn new() -> Self {
        InventoryState::default()
    }

    /// Creates shared state around a pre-seeded ledger.
    pub fn from_ledger(ledger: InventoryLedger) -> Self {
        InventoryState {
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Executes a function with read access to the ledger.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let stock = inventory.with_ledger(|ledger| ledger.get_stock("SKU-100"));
    /// ```
    pub fn with_ledger<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InventoryLedger) -> R,
    {
        let ledger = self.ledger.lock().expect("Inventory mutex poisoned");
        f(&ledger)
    }

    /// Executes a function with write access to the ledger.
    pub fn with_ledger_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InventoryLedger) -> R,
    {
        let mut ledger = self.ledger.lock().expect("Inventory mutex poisoned");
        f(&mut ledger)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_sku_reads_zero() {
        let ledger = InventoryLedger::new();
        assert_eq!(ledger.get_stock("SKU-404"), 0);
    }

    #[test]
    fn test_reserve_decrements() {
        let mut ledger = InventoryLedger::with_stock([("SKU-100", 10)]);
        ledger.reserve("SKU-100", 3);
        assert_eq!(ledger.get_stock("SKU-100"), 7);
    }

    #[test]
    fn test_reserve_drives_stock_negative() {
        let mut ledger = InventoryLedger::with_stock([("SKU-102", 2)]);
        ledger.reserve("SKU-102", 5);
        assert_eq!(ledger.get_stock("SKU-102"), -3);
    }

    #[test]
    fn test_reserve_unknown_sku_creates_negative_entry() {
        let mut ledger = InventoryLedger::new();
        ledger.reserve("SKU-404", 2);
        assert_eq!(ledger.get_stock("SKU-404"), -2);
    }

    #[test]
    fn test_journal_records_reservations_in_order() {
        let mut ledger = InventoryLedger::with_stock([("SKU-100", 10)]);
        ledger.reserve("SKU-100", 2);
        ledger.reserve("SKU-100", 5);

        let journal = ledger.journal();
        assert_eq!(journal.len(), 2);
        assert_eq!(journal[0].quantity, 2);
        assert_eq!(journal[0].remaining, 8);
        assert_eq!(journal[1].quantity, 5);
        assert_eq!(journal[1].remaining, 3);
    }

    #[test]
    fn test_shared_state_sees_mutations() {
        let state = InventoryState::from_ledger(InventoryLedger::with_stock([("SKU-100", 10)]));
        let clone = state.clone();

        state.with_ledger_mut(|ledger| ledger.reserve("SKU-100", 4));

        let stock = clone.with_ledger(|ledger| ledger.get_stock("SKU-100"));
        assert_eq!(stock, 6);
    }
}
