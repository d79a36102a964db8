//! Shared presentation types.
//!
//! These are transient read views: they copy what a screen needs out of the
//! store and never hold a reference back into it.

use serde::{Deserialize, Serialize};

use freshmart_inventory::Product;

/// Column headings of every product table.
pub const PRODUCT_COLUMNS: [&str; 5] = ["Name", "Category", "Expiry Date", "Stock", "Supplier"];

/// One product as displayed in a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRow {
    pub name: String,
    pub category: String,
    pub expiry_date: String,
    pub stock: u32,
    pub supplier: String,
}

impl ProductRow {
    /// Cell values in [`PRODUCT_COLUMNS`] order.
    pub fn cells(&self) -> [String; 5] {
        [
            self.name.clone(),
            self.category.clone(),
            self.expiry_date.clone(),
            self.stock.to_string(),
            self.supplier.clone(),
        ]
    }
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            category: product.category().to_string(),
            expiry_date: product.expiry_date().to_string(),
            stock: product.stock_quantity().units(),
            supplier: product.supplier().to_string(),
        }
    }
}

/// Screens reachable from the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", content = "term", rename_all = "snake_case")]
pub enum Screen {
    Dashboard,
    AllProducts,
    Search(String),
    ExpiringSoon,
    LowStock,
    AddProduct,
    UpdateStock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

impl NotificationLevel {
    pub fn title(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "Success",
            NotificationLevel::Warning => "Warning",
            NotificationLevel::Error => "Error",
        }
    }
}

/// User-facing outcome of an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        self.level.title()
    }
}

impl core::fmt::Display for Notification {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}] {}", self.title(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use freshmart_inventory::{ExpiryDate, StockQuantity};

    #[test]
    fn row_copies_product_fields() {
        let product = Product::new(
            "Milk",
            "Dairy",
            ExpiryDate::new(NaiveDate::from_ymd_opt(2026, 10, 21).unwrap()),
            StockQuantity::new(15),
            "ABC Dairy",
        );
        let row = ProductRow::from(&product);
        assert_eq!(
            row.cells(),
            ["Milk", "Dairy", "2026-10-21", "15", "ABC Dairy"].map(String::from)
        );
    }

    #[test]
    fn notification_display_uses_level_title() {
        assert_eq!(
            Notification::info("Product added successfully!").to_string(),
            "[Success] Product added successfully!"
        );
        assert_eq!(Notification::warning("x").title(), "Warning");
        assert_eq!(Notification::error("x").title(), "Error");
    }
}
