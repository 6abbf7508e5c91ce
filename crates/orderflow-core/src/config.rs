//! # Configuration
//!
//! Immutable application configuration supplied once at startup and read-only
//! throughout a pipeline run.
//!
//! ## Who Reads What
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Consumers                              │
//! │                                                                         │
//! │  AppConfig.region ──────────────────► pricing::tax_rate                │
//! │  FeatureFlags.enable_discounts ─────► pricing::discount                 │
//! │  FeatureFlags.discount_threshold ───► pricing::discount                 │
//! │  FeatureFlags.enable_loyalty_points ► pricing::loyalty_points           │
//! │  FeatureFlags.max_order_items ──────► validation::validate_order        │
//! │                                                                         │
//! │  Nothing writes back. The pipeline never mutates configuration.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Feature Flags
// =============================================================================

/// Feature flags controlling optional pipeline behavior.
///
/// ## Defaults
/// Discounts and loyalty points are on by default; orders are capped at
/// 100 line items; discounts kick in at a $100.00 subtotal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Whether loyalty-tier discounts are applied at all.
    pub enable_discounts: bool,

    /// Whether loyalty points accrue on processed orders.
    pub enable_loyalty_points: bool,

    /// Maximum number of line items allowed on a single order.
    pub max_order_items: usize,

    /// Subtotal at which discounts become eligible.
    ///
    /// The comparison is strict `<`: an order whose subtotal exactly equals
    /// the threshold IS eligible.
    pub discount_threshold: f64,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        FeatureFlags {
            enable_discounts: true,
            enable_loyalty_points: true,
            max_order_items: 100,
            discount_threshold: 100.0,
        }
    }
}

// =============================================================================
// Application Config
// =============================================================================

/// Top-level application configuration.
///
/// ## Example
/// ```rust
/// use orderflow_core::config::AppConfig;
///
/// let config = AppConfig::default();
/// assert_eq!(config.region, "us-west-2");
/// assert!(config.features.enable_discounts);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment label ("Development", "Production", ...).
    /// Informational only; no pipeline logic branches on it.
    pub environment: String,

    /// AWS-style region string. Drives tax-rate selection.
    pub region: String,

    /// Feature flags.
    pub features: FeatureFlags,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            environment: "Development".to_string(),
            region: "us-west-2".to_string(),
            features: FeatureFlags::default(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
