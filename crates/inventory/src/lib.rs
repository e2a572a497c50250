//! `stockroom-inventory` — products and the inventory that holds them.
//!
//! Pure domain crate: no I/O, no logging, no clock. A [`Product`] is a
//! validated value object; an [`Inventory`] is an insertion-ordered,
//! append-only collection of them with case-insensitive lookup and search.

pub mod inventory;
pub mod product;

pub use inventory::Inventory;
pub use product::Product;
