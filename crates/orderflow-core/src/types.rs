//! # Domain Types
//!
//! Core domain types used throughout Orderflow.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │      Order      │   │   OrderItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  order_id       │   │  sku (business) │       │
//! │  │  loyalty_tier   │   │  customer_name  │   │  quantity       │       │
//! │  │  address        │   │  items          │   │  unit_price     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  LoyaltyTier    │   │    Address      │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  Bronze         │   │  street, city   │                             │
//! │  │  Silver         │   │  state, zip     │                             │
//! │  │  Gold           │   │  country        │                             │
//! │  │  Platinum       │   │                 │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Customers and orders are read-only inputs for the duration of order
//! processing; the only mutable state in the system is the inventory ledger
//! in orderflow-engine.

use serde::{Deserialize, Serialize};

// =============================================================================
// Loyalty Tier
// =============================================================================

/// Customer classification driving discount eligibility and rate.
///
/// The enum is closed: every customer carries exactly one of these four
/// tiers, and the pricing table covers all of them (Bronze maps to a 0%
/// rate, which doubles as the "no discount" fallback).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoyaltyTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Default for LoyaltyTier {
    fn default() -> Self {
        LoyaltyTier::Bronze
    }
}

// =============================================================================
// Address
// =============================================================================

/// Postal address attached to a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

// =============================================================================
// Customer
// =============================================================================

/// A customer placing orders.
///
/// Immutable for the duration of order processing. Loyalty points accrued by
/// a pipeline run are reported on the summary, not written back here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Business identifier ("CUST-001").
    pub id: String,

    /// Display name.
    pub name: String,

    /// Contact email.
    pub email: String,

    /// Loyalty tier - drives the discount-rate lookup.
    pub loyalty_tier: LoyaltyTier,

    /// Accumulated loyalty points.
    pub loyalty_points: i64,

    /// Shipping address.
    pub address: Address,
}

// =============================================================================
// Order Item
// =============================================================================

/// A line item on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Stock Keeping Unit - business identifier for the inventory entry.
    pub sku: String,

    /// Display name shown on the summary.
    pub name: String,

    /// Quantity ordered. Positive by construction (`u32`), zero is never
    /// meaningful on an order line.
    pub quantity: u32,

    /// Unit price in major currency units. Non-negative.
    pub unit_price: f64,
}

impl OrderItem {
    /// Line total before tax (quantity × unit price).
    ///
    /// ## Example
    /// ```rust
    /// use orderflow_core::types::OrderItem;
    ///
    /// let item = OrderItem {
    ///     sku: "SKU-100".to_string(),
    ///     name: "Widget".to_string(),
    ///     quantity: 2,
    ///     unit_price: 19.99,
    /// };
    /// assert_eq!(item.line_total(), 39.98);
    /// ```
    #[inline]
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order awaiting processing.
///
/// ## Invariants (enforced by [`crate::validation::validate_order`])
/// - `order_id` is non-empty
/// - `customer_name` is non-empty
/// - `items` is non-empty
/// - `items.len()` does not exceed the configured maximum
///
/// All four must hold before the inventory and pricing steps run; a
/// violation is a hard stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Business identifier ("ORD-001").
    pub order_id: String,

    /// Name of the customer the order was placed under.
    pub customer_name: String,

    /// Line items, in the order they were placed. The pipeline walks them
    /// in this order; no reordering, no batching.
    pub items: Vec<OrderItem>,
}

// =============================================================================
// Unit Tests
// =============================================================================
