//! Inventory domain module.
//!
//! This crate contains the product records and the in-memory store that owns
//! them, implemented purely as deterministic domain logic (no IO, no
//! presentation, no persistence).

pub mod product;
pub mod seed;
pub mod store;

pub use product::{DEFAULT_SHELF_LIFE_DAYS, ExpiryDate, Product, ProductDraft, StockQuantity};
pub use store::{InventoryStore, InventorySummary};
