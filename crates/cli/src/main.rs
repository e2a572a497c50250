//! Demonstration driver: exercises the inventory API end to end.

use anyhow::Context;
use tracing::info;

use stockroom_inventory::{Inventory, Product};

fn main() {
    stockroom_observability::init();

    if let Err(err) = run() {
        tracing::error!(error = %err, "inventory demo failed");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let mut inventory = Inventory::new();

    inventory.add_product(Product::new("Laptop", 999.99, 5, "Electronics")?);
    inventory.add_product(Product::new("Phone", 499.99, 10, "Electronics")?);
    inventory.add_product(Product::new("Table", 89.99, 2, "Furniture")?);
    info!(count = inventory.len(), "inventory populated");

    print!("{inventory}");

    let found = inventory.find_product("Phone");
    println!(
        "Search result: {}",
        serde_json::to_string_pretty(&found).context("serializing find results")?
    );

    let hits = inventory.search_products("Lap");
    println!(
        "Keyword search result: {}",
        serde_json::to_string_pretty(&hits).context("serializing search results")?
    );

    let first = &inventory.products()[0];
    let second = &inventory.products()[1];
    println!(
        "{} is {}.",
        first.name(),
        if first.is_available() {
            "available"
        } else {
            "out of stock"
        }
    );
    println!(
        "Price comparison between {} and {}: {}",
        first.name(),
        second.name(),
        first.compare_price(second)
    );

    Ok(())
}
