//! # orderflow-core: Pure Business Logic for Orderflow
//!
//! This crate is the **heart** of Orderflow. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Orderflow Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (Harness)                           │   │
//! │  │    sample config ──► sample orders ──► printed summaries        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 orderflow-engine (Orchestration)                 │   │
//! │  │    OrderProcessor: validate ──► reserve stock ──► price          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ orderflow-core (THIS CRATE) ★                    │   │
//! │  │                                                                  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │  pricing  │  │ validation│  │   error   │   │   │
//! │  │   │  Customer │  │  subtotal │  │   rules   │  │ taxonomy  │   │   │
//! │  │   │   Order   │  │ tax/disc. │  │   checks  │  │  chaining │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                  │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                     │   │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Application configuration and feature flags
//! - [`types`] - Domain types (Customer, Order, OrderItem, etc.)
//! - [`error`] - Error taxonomy (validation + chained data-access errors)
//! - [`validation`] - Structural order validation
//! - [`pricing`] - Subtotal, tax, discount, and loyalty-point math
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Full Precision**: Monetary math stays in `f64` with no rounding until
//!    display; two-decimal formatting is the presentation layer's job
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use orderflow_core::Order` instead of
// `use orderflow_core::types::Order`

pub use config::{AppConfig, FeatureFlags};
pub use error::{DataAccessError, NetworkError, ValidationError};
pub use types::{Address, Customer, LoyaltyTier, Order, OrderItem};
