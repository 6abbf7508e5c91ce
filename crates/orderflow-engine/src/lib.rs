//! # orderflow-engine: Stateful Orchestration for Orderflow
//!
//! Owns the inventory ledger (the only mutable state in the system) and the
//! [`pipeline::OrderProcessor`] that sequences validation, reservation, and
//! pricing on top of orderflow-core.
//!
//! ## Pipeline Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    process_order(order, customer)                       │
//! │                                                                         │
//! │  1. validate_order ──── fail ──► ValidationError (ledger untouched)    │
//! │        │ ok                                                             │
//! │  2. per item: get_stock ──► warn if short ──► reserve (always)         │
//! │        │                                                                │
//! │  3. subtotal ──► tax ──► discount                                       │
//! │        │                                                                │
//! │  4. loyalty points (feature-flagged)                                    │
//! │        │                                                                │
//! │  5. final_total = subtotal + tax − discount                             │
//! │        │                                                                │
//! │  6. OrderSummary                                                        │
//! │                                                                         │
//! │  No rollback: reservations from step 2 stay even if a later step        │
//! │  could fail. Reservation and pricing are not atomic by design.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod inventory;
pub mod pipeline;

pub use inventory::{InventoryLedger, InventoryState, Reservation};
pub use pipeline::{OrderProcessor, OrderSummary};
