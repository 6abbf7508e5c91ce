//! # Pricing Module
//!
//! Pure pricing math: subtotal, tax, loyalty-tier discount, and loyalty
//! points. Every function takes explicit inputs and has no hidden state
//! beyond the immutable configuration passed in.
//!
//! ## Precision Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FULL PRECISION UNTIL DISPLAY                                           │
//! │                                                                         │
//! │  subtotal = 89.97                                                       │
//! │  tax      = 89.97 × 0.08 = 7.1976   ← kept as-is, NOT 7.20             │
//! │  final    = 89.97 + 7.1976 = 97.1676                                    │
//! │                                                                         │
//! │  Rounding to two decimals happens only when the summary line is         │
//! │  formatted. Intermediate values are never rounded.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dependency Order
//! Tax and discount both depend on the subtotal but not on each other:
//! ```text
//! subtotal ──┬──► tax
//!            └──► discount
//! ```

use crate::config::AppConfig;
use crate::types::{Customer, LoyaltyTier, Order};

// =============================================================================
// Tax Rates
// =============================================================================

/// Tax rate for the home region (us-west-2).
const HOME_REGION_TAX_RATE: f64 = 0.08;

/// Tax rate everywhere else.
const DEFAULT_TAX_RATE: f64 = 0.10;

// =============================================================================
// Subtotal
// =============================================================================

/// Sum of line-item totals (quantity × unit price) before tax and discount.
///
/// ## Example
/// ```rust
/// use orderflow_core::pricing::subtotal;
/// use orderflow_core::types::{Order, OrderItem};
///
/// let order = Order {
///     order_id: "ORD-001".to_string(),
///     customer_name: "Alice".to_string(),
///     items: vec![
///         OrderItem { sku: "SKU-100".into(), name: "Widget".into(), quantity: 2, unit_price: 19.99 },
///         OrderItem { sku: "SKU-101".into(), name: "Gadget".into(), quantity: 1, unit_price: 49.99 },
///     ],
/// };
/// assert!((subtotal(&order) - 89.97).abs() < 1e-9);
/// ```
pub fn subtotal(order: &Order) -> f64 {
    order.items.iter().map(|item| item.line_total()).sum()
}

// =============================================================================
// Tax
// =============================================================================

/// Tax rate for the configured region: 8% in us-west-2, 10% elsewhere.
#[inline]
pub fn tax_rate(config: &AppConfig) -> f64 {
    if config.region == "us-west-2" {
        HOME_REGION_TAX_RATE
    } else {
        DEFAULT_TAX_RATE
    }
}

/// Tax owed on an already-computed subtotal.
#[inline]
pub fn tax(subtotal: f64, config: &AppConfig) -> f64 {
    subtotal * tax_rate(config)
}

// =============================================================================
// Discount
// =============================================================================

/// Discount rate for a loyalty tier.
///
/// Bronze earns no discount; the match is exhaustive, so there is no
/// "unknown tier" at runtime - a tier outside the table would be a type
/// error, not a fallback.
fn tier_rate(tier: LoyaltyTier) -> f64 {
    match tier {
        LoyaltyTier::Platinum => 0.15,
        LoyaltyTier::Gold => 0.10,
        LoyaltyTier::Silver => 0.05,
        LoyaltyTier::Bronze => 0.0,
    }
}

/// Loyalty-tier discount for an order.
///
/// ## Rules
/// - `0.0` when discounts are disabled via feature flag
/// - `0.0` when the subtotal is strictly below the threshold; a subtotal
///   exactly equal to the threshold IS eligible
/// - otherwise `subtotal × tier_rate`
///
/// ## Example
/// ```rust
/// use orderflow_core::config::AppConfig;
/// use orderflow_core::pricing::discount;
/// use orderflow_core::types::*;
///
/// let config = AppConfig::default(); // threshold 100.0
/// let customer = Customer {
///     id: "CUST-001".into(),
///     name: "Alice".into(),
///     email: "alice@example.com".into(),
///     loyalty_tier: LoyaltyTier::Gold,
///     loyalty_points: 0,
///     address: Address {
///         street: "123 Main St".into(),
///         city: "Seattle".into(),
///         state: "WA".into(),
///         zip_code: "98101".into(),
///         country: "US".into(),
///     },
/// };
/// let order = Order {
///     order_id: "ORD-001".into(),
///     customer_name: "Alice".into(),
///     items: vec![OrderItem { sku: "SKU-1".into(), name: "Thing".into(), quantity: 1, unit_price: 200.0 }],
/// };
/// // Gold at 10% on a $200.00 subtotal
/// assert!((discount(&order, &customer, &config) - 20.0).abs() < 1e-9);
/// ```
pub fn discount(order: &Order, customer: &Customer, config: &AppConfig) -> f64 {
    if !config.features.enable_discounts {
        return 0.0;
    }

    let subtotal = subtotal(order);
    if subtotal < config.features.discount_threshold {
        return 0.0;
    }

    subtotal * tier_rate(customer.loyalty_tier)
}

// =============================================================================
// Loyalty Points
// =============================================================================

/// Loyalty points earned on a subtotal: `floor(subtotal × 10)` when the
/// feature is enabled, `0` otherwise.
pub fn loyalty_points(subtotal: f64, config: &AppConfig) -> i64 {
    if config.features.enable_loyalty_points {
        (subtotal * 10.0).floor() as i64
    } else {
        0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
