//! # Store Walkthrough
//!
//! Seeds the product store and exercises the full CRUD surface, logging
//! each step. Development aid for eyeballing store behavior without a
//! frontend attached.
//!
//! ## Usage
//! ```bash
//! cargo run -p stockdesk-store --bin demo
//!
//! # Verbose store logging
//! RUST_LOG=debug cargo run -p stockdesk-store --bin demo
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;

use stockdesk_core::format::format_currency;
use stockdesk_core::validation::validate_product_form;
use stockdesk_core::{NotificationLevel, ProductDraft, ProductPatch};
use stockdesk_store::{ProductStore, StoreLatency, UiStore};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let products = ProductStore::new(StoreLatency::default());
    let ui = UiStore::new();

    // Bulk load with the production latency window, same as app startup.
    products.load().await;
    info!(total = products.total(), "collection loaded");

    for p in products.low_stock() {
        info!(
            id = %p.id,
            name = %p.name,
            stock = p.stock,
            threshold = p.min_stock_or_default(),
            "low stock"
        );
    }

    let hardware = products.by_category("Hardware");
    info!(count = hardware.len(), "Hardware category view");

    // Create a product, the way the create form would.
    let draft = ProductDraft {
        name: "USB Microphone".to_string(),
        description: Some("Cardioid condenser microphone".to_string()),
        price: 950_000,
        stock: 12,
        min_stock: Some(5),
        category: "Accessories".to_string(),
        sku: "MIC-USB-CARD-001".to_string(),
    };
    if let Err(errors) = validate_product_form(&draft) {
        for (field, message) in errors.iter() {
            info!(field, message, "validation failure");
        }
        return;
    }
    let created = products.create(draft);
    ui.notify("Product created", NotificationLevel::Success);
    info!(id = %created.id, price = %format_currency(created.price), "created");

    // Select it, patch it, then delete it.
    products.get(&created.id).await;
    let updated = products
        .update(
            &created.id,
            ProductPatch {
                price: Some(900_000),
                ..Default::default()
            },
        )
        .expect("record was just created");
    info!(price = %format_currency(updated.price), "price updated");

    products.delete(&created.id).expect("record still present");
    assert!(products.selected().is_none());
    ui.notify("Product deleted", NotificationLevel::Info);
    info!(total = products.total(), "walkthrough complete");

    println!(
        "{}",
        serde_json::to_string_pretty(&products.low_stock()).expect("products serialize")
    );
}
