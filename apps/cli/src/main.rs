//! # Orderflow CLI
//!
//! Demo harness: builds sample data, runs the order pipeline, and prints
//! the results. Also walks the two failure paths (validation rejection and
//! the nested error chain). No business logic lives here.
//!
//! ## Usage
//! ```text
//! orderflow          # human-readable summaries
//! orderflow --json   # summaries as JSON
//! ```

use std::error::Error as _;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use orderflow_core::config::AppConfig;
use orderflow_core::error::simulate_database_failure;
use orderflow_core::types::{Address, Customer, LoyaltyTier, Order, OrderItem};
use orderflow_engine::inventory::{InventoryLedger, InventoryState};
use orderflow_engine::pipeline::OrderProcessor;

fn main() {
    // Initialize tracing
    FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .init();

    let as_json = std::env::args().any(|arg| arg == "--json");

    println!("Orderflow sample run\n");

    // Configuration: defaults mirror the documented sample scenario
    let config = AppConfig::default();
    info!(
        environment = %config.environment,
        region = %config.region,
        "Configuration loaded"
    );

    // Seed the inventory ledger and wire up the processor
    let inventory = InventoryState::from_ledger(InventoryLedger::with_stock([
        ("SKU-100", 10),
        ("SKU-101", 5),
        ("SKU-102", 2),
    ]));
    let processor = OrderProcessor::new(config, inventory);

    // Sample data
    let customer = Customer {
        id: "CUST-001".to_string(),
        name: "Alice Johnson".to_string(),
        email: "alice@example.com".to_string(),
        loyalty_tier: LoyaltyTier::Gold,
        loyalty_points: 5420,
        address: Address {
            street: "123 Main St".to_string(),
            city: "Seattle".to_string(),
            state: "WA".to_string(),
            zip_code: "98101".to_string(),
            country: "US".to_string(),
        },
    };

    let orders = [
        Order {
            order_id: "ORD-001".to_string(),
            customer_name: "Alice".to_string(),
            items: vec![
                order_item("SKU-100", "Widget", 2, 19.99),
                order_item("SKU-101", "Gadget", 1, 49.99),
            ],
        },
        Order {
            order_id: "ORD-002".to_string(),
            customer_name: "Bob".to_string(),
            items: vec![
                order_item("SKU-100", "Widget", 5, 19.99),
                order_item("SKU-102", "Gizmo", 3, 29.99),
            ],
        },
    ];

    println!("Processing orders...\n");

    for order in &orders {
        match processor.process_order(order, &customer) {
            Ok(summary) => {
                if as_json {
                    // Serialization of a plain summary struct cannot fail
                    let rendered = serde_json::to_string_pretty(&summary)
                        .expect("summary serializes");
                    println!("Order {}:\n{}\n", order.order_id, rendered);
                } else {
                    println!("Order {}: {}\n", order.order_id, summary);
                }
            }
            Err(err) => println!("Order {} rejected: {}\n", order.order_id, err),
        }
    }

    // Validation failure path: empty customer name and no items
    let bad_order = Order {
        order_id: "ORD-003".to_string(),
        customer_name: String::new(),
        items: Vec::new(),
    };
    if let Err(err) = processor.process_order(&bad_order, &customer) {
        println!("Validation failed: {}\n", err);
    }

    // Nested error chain: transport failure wrapped in a data-access error
    println!("Testing nested errors...");
    if let Err(err) = simulate_database_failure() {
        println!("Caught: {}", err);
        if let Some(cause) = err.source() {
            println!("  Caused by: {}", cause);
        }
    }

    println!("\nDone!");
}

fn order_item(sku: &str, name: &str, quantity: u32, unit_price: f64) -> OrderItem {
    OrderItem {
        sku: sku.to_string(),
        name: name.to_string(),
        quantity,
        unit_price,
    }
}
