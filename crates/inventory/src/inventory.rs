use core::fmt;

use serde::Serialize;

use crate::Product;

/// An insertion-ordered collection of products.
///
/// Append-only: products are added at the end and never removed or updated.
/// Order is meaningful — rendering and positional access follow it. Duplicate
/// names are allowed and simply all show up in query results.
///
/// Single-owner by design; callers sharing one across threads must bring
/// their own synchronization.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product.
    ///
    /// Infallible: `Product` values are validated at construction, so there
    /// is no invalid argument to reject here.
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products whose name equals `name`, ignoring case. Full-name match
    /// only; insertion order; empty when nothing matches.
    pub fn find_product(&self, name: &str) -> Vec<&Product> {
        let wanted = name.to_lowercase();
        self.products
            .iter()
            .filter(|product| product.name().to_lowercase() == wanted)
            .collect()
    }

    /// All products whose name contains `keyword`, ignoring case. The empty
    /// keyword is a substring of every name and so matches everything.
    pub fn search_products(&self, keyword: &str) -> Vec<&Product> {
        let wanted = keyword.to_lowercase();
        self.products
            .iter()
            .filter(|product| product.name().to_lowercase().contains(&wanted))
            .collect()
    }
}

/// Human-readable stock report: one 1-indexed line per product in insertion
/// order, prices to two decimals; a single notice line when empty. Pure
/// formatting — writing it to a stream is the caller's concern.
impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.products.is_empty() {
            return writeln!(f, "No products in inventory.");
        }
        writeln!(f, "Current Inventory:")?;
        for (index, product) in self.products.iter().enumerate() {
            writeln!(
                f,
                "{}. {} - ${:.2}, Quantity: {}, Category: {}",
                index + 1,
                product.name(),
                product.price(),
                product.quantity(),
                product.category(),
            )?;
        }
        Ok(())
    }
}
