//! Startup catalogue.

use chrono::NaiveDate;

use crate::product::{ExpiryDate, Product, StockQuantity};

/// (name, category, days until expiry, stock, supplier)
const SEED_PRODUCTS: [(&str, &str, u32, u32, &str); 5] = [
    ("Milk", "Dairy", 5, 15, "ABC Dairy"),
    ("Bread", "Bakery", 3, 20, "XYZ Bakery"),
    ("Eggs", "Dairy", 10, 30, "ABC Dairy"),
    ("Apples", "Produce", 14, 25, "Fresh Farms"),
    ("Chicken", "Meat", 2, 12, "Meat Co"),
];

/// The five records every store starts with, with expiry dates relative to
/// `today`.
pub fn seed_products(today: NaiveDate) -> Vec<Product> {
    SEED_PRODUCTS
        .iter()
        .map(|&(name, category, shelf_days, stock, supplier)| {
            Product::new(
                name,
                category,
                ExpiryDate::days_after(today, shelf_days),
                StockQuantity::new(stock),
                supplier,
            )
        })
        .collect()
}
