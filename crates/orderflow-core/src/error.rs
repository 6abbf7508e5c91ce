//! # Error Types
//!
//! Domain-specific error types for orderflow-core.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ValidationError   - structural order violations; checked before any    │
//! │                      inventory or pricing step, so a failure never      │
//! │                      leaves partial state behind                        │
//! │                                                                         │
//! │  NetworkError      - simulated transport failure (message, code,        │
//! │                      host, port)                                        │
//! │                                                                         │
//! │  DataAccessError   - wraps a NetworkError as its cause; the original    │
//! │                      error stays reachable via Error::source()          │
//! │                                                                         │
//! │  Flow: ValidationError ──► caller (unchanged, recoverable)              │
//! │        NetworkError ──► DataAccessError ──► caller (chain intact)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (max item count, host/port, etc.)
//! 3. Errors are enum variants or structured structs, never bare Strings
//! 4. Wrapped errors keep their cause inspectable through `source()`

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Structural order validation failures.
///
/// Raised by [`crate::validation::validate_order`] and propagated unchanged
/// by the pipeline. Always recoverable by the caller: catch, report,
/// continue with the next order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// The order carries no line items.
    #[error("Order must have at least one item")]
    EmptyOrder,

    /// The order carries more line items than the configured maximum.
    #[error("Order exceeds max items ({max})")]
    TooManyItems { max: usize },
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Network Error
// =============================================================================

/// Simulated transport failure.
///
/// Used only by the error-chaining demonstration below - the main pipeline
/// never touches the network.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct NetworkError {
    /// Human-readable failure description.
    pub message: String,

    /// Transport-level error code (e.g. 10061 = connection refused).
    pub code: i32,

    /// Remote host, when known.
    pub host: Option<String>,

    /// Remote port, when known.
    pub port: Option<u16>,
}

// =============================================================================
// Data Access Error
// =============================================================================

/// Wraps lower-level failures that occurred while accessing stored data.
///
/// The wrapper owns the wrapped error; the original stays inspectable via
/// [`std::error::Error::source`].
///
/// ## Example
/// ```rust
/// use std::error::Error;
/// use orderflow_core::error::simulate_database_failure;
///
/// let err = simulate_database_failure().unwrap_err();
/// assert_eq!(err.to_string(), "Failed to execute query on Orders table");
///
/// let cause = err.source().expect("cause preserved");
/// assert_eq!(cause.to_string(), "Connection refused to db-server:5432");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DataAccessError {
    /// What the data-access layer was trying to do.
    pub message: String,

    /// The underlying failure, when one exists.
    #[source]
    pub source: Option<NetworkError>,
}

/// Demonstrates a nested failure: a transport error surfacing as a
/// data-access error with its cause chained.
///
/// Participates in no business computation; the pipeline never calls this.
pub fn simulate_database_failure() -> Result<(), DataAccessError> {
    let transport = NetworkError {
        message: "Connection refused to db-server:5432".to_string(),
        code: 10061,
        host: Some("db-server".to_string()),
        port: Some(5432),
    };

    Err(DataAccessError {
        message: "Failed to execute query on Orders table".to_string(),
        source: Some(transport),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
