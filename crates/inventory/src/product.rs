use serde::Serialize;

use stockroom_core::{ValidationError, ValidationResult, ValueObject};

/// Value object: one inventory item.
///
/// Immutable after construction; every live `Product` satisfies the field
/// invariants because [`Product::new`] is the only way to build one.
/// `Deserialize` is deliberately not derived — it would materialize values
/// that never passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    name: String,
    price: f64,
    quantity: u32,
    category: String,
}

impl ValueObject for Product {}

impl Product {
    /// Validating constructor.
    ///
    /// Checks run in field order and the first failure wins. Accepted values
    /// are stored exactly as passed: `name` and `category` must be non-empty
    /// after trimming, but the untrimmed originals are what the product
    /// keeps. `quantity` needs no check; `u32` cannot go negative.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        quantity: u32,
        category: impl Into<String>,
    ) -> ValidationResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::Name);
        }
        if !price.is_finite() || price < 0.0 {
            return Err(ValidationError::Price(price));
        }
        let category = category.into();
        if category.trim().is_empty() {
            return Err(ValidationError::Category);
        }
        Ok(Self {
            name,
            price,
            quantity,
            category,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Whether any stock is on hand.
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }

    /// Signed price difference: negative means `self` is cheaper than
    /// `other`, positive more expensive, zero equal. Both prices are finite
    /// by construction, so the result is never NaN.
    pub fn compare_price(&self, other: &Product) -> f64 {
        self.price - other.price
    }
}
