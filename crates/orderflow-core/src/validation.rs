//! # Validation Module
//!
//! Structural order validation for Orderflow.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Position                                │
//! │                                                                         │
//! │  process_order(order, customer)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_order(order, config) ← THIS MODULE                           │
//! │       │                                                                 │
//! │       ├── fails ──► ValidationError to caller                          │
//! │       │             (NO inventory or pricing side effects occurred)     │
//! │       │                                                                 │
//! │       └── ok ─────► inventory reservation ──► pricing                  │
//! │                                                                         │
//! │  Validation runs FIRST so a rejected order never mutates the ledger.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::config::AppConfig;
use crate::error::{ValidationError, ValidationResult};
use crate::types::Order;

/// Validates the structural invariants of an order.
///
/// ## Rules (checked in order, short-circuiting on the first failure)
/// 1. `order_id` must be non-empty
/// 2. `customer_name` must be non-empty
/// 3. `items` must be non-empty
/// 4. `items.len()` must not exceed `config.features.max_order_items`
///
/// Pure predicate over `(order, config)`: no side effects, no logging.
///
/// ## Example
/// ```rust
/// use orderflow_core::config::AppConfig;
/// use orderflow_core::types::{Order, OrderItem};
/// use orderflow_core::validation::validate_order;
///
/// let config = AppConfig::default();
/// let order = Order {
///     order_id: "ORD-001".to_string(),
///     customer_name: "Alice".to_string(),
///     items: vec![OrderItem {
///         sku: "SKU-100".to_string(),
///         name: "Widget".to_string(),
///         quantity: 1,
///         unit_price: 19.99,
///     }],
/// };
/// assert!(validate_order(&order, &config).is_ok());
/// ```
pub fn validate_order(order: &Order, config: &AppConfig) -> ValidationResult<()> {
    if order.order_id.is_empty() {
        return Err(ValidationError::Required { field: "Order ID" });
    }

    if order.customer_name.is_empty() {
        return Err(ValidationError::Required {
            field: "Customer name",
        });
    }

    if order.items.is_empty() {
        return Err(ValidationError::EmptyOrder);
    }

    if order.items.len() > config.features.max_order_items {
        return Err(ValidationError::TooManyItems {
            max: config.features.max_order_items,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeatureFlags;
    use crate::types::OrderItem;

    fn item(sku: &str) -> OrderItem {
        OrderItem {
            sku: sku.to_string(),
            name: format!("Item {}", sku),
            quantity: 1,
            unit_price: 9.99,
        }
    }

    fn valid_order() -> Order {
        Order {
            order_id: "ORD-001".to_string(),
            customer_name: "Alice".to_string(),
            items: vec![item("SKU-100")],
        }
    }

    #[test]
    fn test_valid_order_passes() {
        let config = AppConfig::default();
        assert!(validate_order(&valid_order(), &config).is_ok());
    }

    #[test]
    fn test_missing_order_id() {
        let config = AppConfig::default();
        let mut order = valid_order();
        order.order_id = String::new();

        let err = validate_order(&order, &config).unwrap_err();
        assert_eq!(err.to_string(), "Order ID is required");
    }

    #[test]
    fn test_missing_customer_name() {
        let config = AppConfig::default();
        let mut order = valid_order();
        order.customer_name = String::new();

        let err = validate_order(&order, &config).unwrap_err();
        assert_eq!(err.to_string(), "Customer name is required");
    }

    #[test]
    fn test_empty_items() {
        let config = AppConfig::default();
        let mut order = valid_order();
        order.items.clear();

        let err = validate_order(&order, &config).unwrap_err();
        assert_eq!(err.to_string(), "Order must have at least one item");
    }

    #[test]
    fn test_too_many_items() {
        let config = AppConfig {
            features: FeatureFlags {
                max_order_items: 2,
                ..FeatureFlags::default()
            },
            ..AppConfig::default()
        };
        let mut order = valid_order();
        order.items = vec![item("SKU-100"), item("SKU-101"), item("SKU-102")];

        let err = validate_order(&order, &config).unwrap_err();
        assert_eq!(err, ValidationError::TooManyItems { max: 2 });
        assert_eq!(err.to_string(), "Order exceeds max items (2)");
    }

    #[test]
    fn test_max_items_boundary_is_inclusive() {
        let config = AppConfig {
            features: FeatureFlags {
                max_order_items: 2,
                ..FeatureFlags::default()
            },
            ..AppConfig::default()
        };
        let mut order = valid_order();
        order.items = vec![item("SKU-100"), item("SKU-101")];

        assert!(validate_order(&order, &config).is_ok());
    }

    #[test]
    fn test_checks_short_circuit_in_order() {
        // An order violating everything reports the first rule only
        let config = AppConfig::default();
        let order = Order {
            order_id: String::new(),
            customer_name: String::new(),
            items: Vec::new(),
        };

        let err = validate_order(&order, &config).unwrap_err();
        assert_eq!(err.to_string(), "Order ID is required");
    }
}
