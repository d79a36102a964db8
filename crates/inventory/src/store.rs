//! In-memory product store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use freshmart_core::{Clock, SystemClock};

use crate::product::{ExpiryDate, Product, ProductDraft, StockQuantity};
use crate::seed::seed_products;

/// Dashboard counters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total: usize,
    pub expiring_soon: usize,
    pub low_stock: usize,
}

/// Ordered set of product records.
///
/// The store exclusively owns its records. Reads hand out shared borrows;
/// the only mutations are [`add`](Self::add) and
/// [`update_quantity`](Self::update_quantity). Records are never removed.
#[derive(Debug, Clone)]
pub struct InventoryStore<C = SystemClock> {
    products: Vec<Product>,
    clock: C,
}

impl<C: Clock> InventoryStore<C> {
    /// Empty store.
    pub fn new(clock: C) -> Self {
        Self {
            products: Vec::new(),
            clock,
        }
    }

    /// Store pre-populated with the startup catalogue.
    pub fn seeded(clock: C) -> Self {
        let products = seed_products(clock.today());
        tracing::debug!(count = products.len(), "seeded inventory store");
        Self { products, clock }
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Records expiring on or before `today + days_threshold`.
    pub fn find_expiring(&self, days_threshold: u32) -> Vec<&Product> {
        self.find_expiring_as_of(self.clock.today(), days_threshold)
    }

    /// [`find_expiring`](Self::find_expiring) against an explicit reference date.
    pub fn find_expiring_as_of(&self, today: NaiveDate, days_threshold: u32) -> Vec<&Product> {
        let cutoff = ExpiryDate::days_after(today, days_threshold).date();
        let expiring: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| p.expires_by(cutoff))
            .collect();
        tracing::debug!(%cutoff, matched = expiring.len(), "expiring products query");
        expiring
    }

    /// Records with strictly fewer than `threshold` units on hand.
    pub fn find_low_stock(&self, threshold: i64) -> Vec<&Product> {
        let low: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| i64::from(p.stock_quantity().units()) < threshold)
            .collect();
        tracing::debug!(threshold, matched = low.len(), "low stock query");
        low
    }

    /// Records whose name or category contains `term`, ignoring case.
    /// An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<&Product> {
        let needle = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name().to_lowercase().contains(&needle)
                    || p.category().to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Display names in insertion order.
    pub fn product_names(&self) -> Vec<&str> {
        self.products.iter().map(Product::name).collect()
    }

    pub fn summary(&self, expiry_window_days: u32, low_stock_threshold: i64) -> InventorySummary {
        InventorySummary {
            total: self.products.len(),
            expiring_soon: self.find_expiring(expiry_window_days).len(),
            low_stock: self.find_low_stock(low_stock_threshold).len(),
        }
    }

    /// Append a record. Duplicate names are accepted.
    pub fn add(&mut self, product: Product) {
        tracing::info!(
            name = product.name(),
            category = product.category(),
            expiry_date = %product.expiry_date(),
            stock = product.stock_quantity().units(),
            "product added"
        );
        self.products.push(product);
    }

    /// Build a record from `draft` (defaulting its expiry against this
    /// store's clock) and append it.
    pub fn add_draft(&mut self, draft: ProductDraft) -> &Product {
        let product = draft.into_product(self.clock.today());
        self.add(product);
        &self.products[self.products.len() - 1]
    }

    /// Set the stock of the first record named `name` (case-insensitive).
    ///
    /// Returns `false`, leaving every record untouched, when no record matches.
    pub fn update_quantity(&mut self, name: &str, new_quantity: StockQuantity) -> bool {
        match self.products.iter_mut().find(|p| p.has_name(name)) {
            Some(product) => {
                let previous = product.stock_quantity();
                product.set_stock_quantity(new_quantity);
                tracing::info!(
                    name = product.name(),
                    previous = previous.units(),
                    current = new_quantity.units(),
                    "stock quantity updated"
                );
                true
            }
            None => {
                tracing::info!(name, "stock update target not found");
                false
            }
        }
    }
}
