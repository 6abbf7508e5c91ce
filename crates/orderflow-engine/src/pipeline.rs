//! # Order Pipeline
//!
//! The orchestrator and sole entry point consumers call. Sequences the
//! validator, the inventory ledger, and the pricing functions, then
//! aggregates the results into an [`OrderSummary`].
//!
//! ## Sequencing Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     process_order(order, customer)                      │
//! │                                                                         │
//! │  validate ── fail ──► ValidationError                                   │
//! │     │                 (ledger untouched: validation runs FIRST)         │
//! │     ▼ ok                                                                │
//! │  for each item, in input order:                                         │
//! │     get_stock ──► stock < qty? ──► WARN (non-fatal)                     │
//! │          └──────────► reserve (unconditional, even after the warning)   │
//! │     ▼                                                                   │
//! │  subtotal ──► tax ──► discount        (tax and discount both read the   │
//! │     ▼                                  subtotal, not each other)        │
//! │  loyalty points ──► final total ──► OrderSummary                        │
//! │                                                                         │
//! │  NO ROLLBACK: a reservation made here is never undone. Reservation      │
//! │  and pricing are not atomic in this design.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use orderflow_core::config::AppConfig;
use orderflow_core::error::ValidationError;
use orderflow_core::pricing;
use orderflow_core::types::{Customer, Order};
use orderflow_core::validation::validate_order;

use crate::inventory::InventoryState;

// =============================================================================
// Order Summary
// =============================================================================

/// Aggregated result of a processed order.
///
/// Fields keep full precision; two-decimal rounding happens only in the
/// `Display` rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Σ quantity × unit price over all line items.
    pub subtotal: f64,

    /// `subtotal × tax_rate(region)`.
    pub tax: f64,

    /// Loyalty-tier discount (0.0 when disabled or below threshold).
    pub discount: f64,

    /// `floor(subtotal × 10)` when enabled, else 0.
    pub loyalty_points: i64,

    /// `subtotal + tax − discount`, computed on the unrounded parts.
    pub final_total: f64,
}

/// Human-readable summary line. Amounts are rounded to two decimals for
/// display only.
impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processed - Subtotal: ${:.2}, Tax: ${:.2}, Discount: ${:.2}, Points: {}, Final: ${:.2}",
            self.subtotal, self.tax, self.discount, self.loyalty_points, self.final_total
        )
    }
}

// =============================================================================
// Order Processor
// =============================================================================

/// Sequences validation → inventory reservation → pricing for one order at
/// a time.
///
/// Holds its collaborators explicitly (constructor injection): the immutable
/// configuration and the shared inventory state. No hidden process-wide
/// state.
#[derive(Debug, Clone)]
pub struct OrderProcessor {
    config: AppConfig,
    inventory: InventoryState,
}

impl OrderProcessor {
    /// Creates a processor over the given configuration and inventory.
    pub fn new(config: AppConfig, inventory: InventoryState) -> Self {
        OrderProcessor { config, inventory }
    }

    /// The configuration this processor runs under.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Processes a single order for a customer.
    ///
    /// ## Errors
    /// Returns the validator's [`ValidationError`] unchanged. On that path
    /// no inventory or pricing side effect has occurred.
    ///
    /// ## Stock Policy
    /// Insufficient stock is never an error here: a WARN is emitted and the
    /// reservation proceeds regardless (the ledger may go negative).
    pub fn process_order(
        &self,
        order: &Order,
        customer: &Customer,
    ) -> Result<OrderSummary, ValidationError> {
        validate_order(order, &self.config)?;
        debug!(order_id = %order.order_id, "Order validated");

        // Advisory stock check, then unconditional reservation, item by item
        // in input order.
        self.inventory.with_ledger_mut(|ledger| {
            for item in &order.items {
                let stock = ledger.get_stock(&item.sku);
                let requested = i64::from(item.quantity);
                if stock < requested {
                    warn!(sku = %item.sku, stock, requested, "Low stock");
                }
                ledger.reserve(&item.sku, requested);
            }
        });

        // Tax and discount both derive from the subtotal, in that dependency
        // order; neither reads the other.
        let subtotal = pricing::subtotal(order);
        let tax = pricing::tax(subtotal, &self.config);
        let discount = pricing::discount(order, customer, &self.config);
        let loyalty_points = pricing::loyalty_points(subtotal, &self.config);

        let summary = OrderSummary {
            subtotal,
            tax,
            discount,
            loyalty_points,
            final_total: subtotal + tax - discount,
        };

        info!(order_id = %order.order_id, "{}", summary);
        Ok(summary)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use orderflow_core::config::FeatureFlags;
    use orderflow_core::types::{Address, LoyaltyTier, OrderItem};

    use crate::inventory::InventoryLedger;

    const EPS: f64 = 1e-9;

    fn item(sku: &str, quantity: u32, unit_price: f64) -> OrderItem {
        OrderItem {
            sku: sku.to_string(),
            name: format!("Item {}", sku),
            quantity,
            unit_price,
        }
    }

    fn customer(tier: LoyaltyTier) -> Customer {
        Customer {
            id: "CUST-001".to_string(),
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
            loyalty_tier: tier,
            loyalty_points: 5420,
            address: Address {
                street: "123 Main St".to_string(),
                city: "Seattle".to_string(),
                state: "WA".to_string(),
                zip_code: "98101".to_string(),
                country: "US".to_string(),
            },
        }
    }

    fn seeded_inventory() -> InventoryState {
        InventoryState::from_ledger(InventoryLedger::with_stock([
            ("SKU-100", 10),
            ("SKU-101", 5),
            ("SKU-102", 2),
        ]))
    }

    fn processor(inventory: InventoryState) -> OrderProcessor {
        OrderProcessor::new(AppConfig::default(), inventory)
    }

    #[test]
    fn test_process_order_below_discount_threshold() {
        // 2 × $19.99 + 1 × $49.99 = $89.97 < $100.00 threshold
        let inventory = seeded_inventory();
        let order = Order {
            order_id: "ORD-001".to_string(),
            customer_name: "Alice".to_string(),
            items: vec![item("SKU-100", 2, 19.99), item("SKU-101", 1, 49.99)],
        };

        let summary = processor(inventory.clone())
            .process_order(&order, &customer(LoyaltyTier::Gold))
            .unwrap();

        assert!((summary.subtotal - 89.97).abs() < EPS);
        assert!((summary.tax - 7.1976).abs() < EPS);
        assert_eq!(summary.discount, 0.0);
        assert_eq!(summary.loyalty_points, 899);
        assert!((summary.final_total - 97.1676).abs() < EPS);

        // Reservations happened
        assert_eq!(inventory.with_ledger(|l| l.get_stock("SKU-100")), 8);
        assert_eq!(inventory.with_ledger(|l| l.get_stock("SKU-101")), 4);
    }

    #[test]
    fn test_process_order_with_gold_discount() {
        // 5 × $19.99 + 3 × $29.99 = $189.92 ≥ $100.00 → Gold at 10%
        let inventory = seeded_inventory();
        let order = Order {
            order_id: "ORD-002".to_string(),
            customer_name: "Bob".to_string(),
            items: vec![item("SKU-100", 5, 19.99), item("SKU-102", 3, 29.99)],
        };

        let summary = processor(inventory.clone())
            .process_order(&order, &customer(LoyaltyTier::Gold))
            .unwrap();

        assert!((summary.subtotal - 189.92).abs() < EPS);
        assert!((summary.tax - 15.1936).abs() < EPS);
        assert!((summary.discount - 18.992).abs() < EPS);
        assert!((summary.final_total - 186.1216).abs() < EPS);

        // SKU-102 had stock 2, quantity 3 was reserved anyway
        assert_eq!(inventory.with_ledger(|l| l.get_stock("SKU-102")), -1);
    }

    #[test]
    fn test_validation_failure_leaves_ledger_untouched() {
        let inventory = seeded_inventory();
        let order = Order {
            order_id: "ORD-003".to_string(),
            customer_name: "Carol".to_string(),
            items: Vec::new(),
        };

        let err = processor(inventory.clone())
            .process_order(&order, &customer(LoyaltyTier::Bronze))
            .unwrap_err();

        assert_eq!(err.to_string(), "Order must have at least one item");
        assert_eq!(inventory.with_ledger(|l| l.get_stock("SKU-100")), 10);
        assert_eq!(inventory.with_ledger(|l| l.get_stock("SKU-101")), 5);
        assert_eq!(inventory.with_ledger(|l| l.journal().len()), 0);
    }

    #[test]
    fn test_validation_error_propagates_unchanged() {
        let inventory = seeded_inventory();
        let order = Order {
            order_id: String::new(),
            customer_name: "Dave".to_string(),
            items: vec![item("SKU-100", 1, 19.99)],
        };

        let err = processor(inventory)
            .process_order(&order, &customer(LoyaltyTier::Bronze))
            .unwrap_err();

        assert_eq!(err, ValidationError::Required { field: "Order ID" });
    }

    #[test]
    fn test_non_home_region_uses_ten_percent_tax() {
        let config = AppConfig {
            region: "eu-west-1".to_string(),
            ..AppConfig::default()
        };
        let inventory = seeded_inventory();
        let order = Order {
            order_id: "ORD-004".to_string(),
            customer_name: "Erin".to_string(),
            items: vec![item("SKU-100", 2, 19.99), item("SKU-101", 1, 49.99)],
        };

        let summary = OrderProcessor::new(config, inventory)
            .process_order(&order, &customer(LoyaltyTier::Gold))
            .unwrap();

        assert!((summary.tax - 8.997).abs() < EPS);
    }

    #[test]
    fn test_loyalty_points_disabled() {
        let config = AppConfig {
            features: FeatureFlags {
                enable_loyalty_points: false,
                ..FeatureFlags::default()
            },
            ..AppConfig::default()
        };
        let order = Order {
            order_id: "ORD-005".to_string(),
            customer_name: "Faye".to_string(),
            items: vec![item("SKU-100", 2, 19.99)],
        };

        let summary = OrderProcessor::new(config, seeded_inventory())
            .process_order(&order, &customer(LoyaltyTier::Gold))
            .unwrap();

        assert_eq!(summary.loyalty_points, 0);
    }

    #[test]
    fn test_items_reserved_in_input_order() {
        let inventory = seeded_inventory();
        let order = Order {
            order_id: "ORD-006".to_string(),
            customer_name: "Gus".to_string(),
            items: vec![item("SKU-102", 1, 29.99), item("SKU-100", 2, 19.99)],
        };

        processor(inventory.clone())
            .process_order(&order, &customer(LoyaltyTier::Bronze))
            .unwrap();

        inventory.with_ledger(|ledger| {
            let journal = ledger.journal();
            assert_eq!(journal.len(), 2);
            assert_eq!(journal[0].sku, "SKU-102");
            assert_eq!(journal[1].sku, "SKU-100");
        });
    }

    #[test]
    fn test_summary_display_rounds_to_two_decimals() {
        let summary = OrderSummary {
            subtotal: 89.97,
            tax: 7.1976,
            discount: 0.0,
            loyalty_points: 899,
            final_total: 97.1676,
        };

        assert_eq!(
            summary.to_string(),
            "Processed - Subtotal: $89.97, Tax: $7.20, Discount: $0.00, Points: 899, Final: $97.17"
        );
    }
}
