//! Screen view models.
//!
//! Each builder is a pure function of the store and the configuration; the
//! renderer decides how a view reaches the terminal.

use serde::Serialize;

use freshmart_core::Clock;
use freshmart_inventory::{InventoryStore, Product};

use crate::config::DesktopConfig;
use crate::forms::ADD_PRODUCT_FIELDS;
use crate::types::{PRODUCT_COLUMNS, ProductRow, Screen};

/// Titled product table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductTable {
    pub title: String,
    pub columns: [&'static str; 5],
    pub rows: Vec<ProductRow>,
}

impl ProductTable {
    pub fn new<'a>(
        title: impl Into<String>,
        products: impl IntoIterator<Item = &'a Product>,
    ) -> Self {
        Self {
            title: title.into(),
            columns: PRODUCT_COLUMNS,
            rows: products.into_iter().map(ProductRow::from).collect(),
        }
    }
}

/// Dashboard counter card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub title: &'static str,
    pub cards: Vec<SummaryCard>,
    pub recent_activity: ProductTable,
}

/// Everything a screen can show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Dashboard(DashboardView),
    Table(ProductTable),
    AddProductForm {
        title: &'static str,
        fields: [&'static str; 5],
    },
    UpdateStockForm {
        title: &'static str,
        products: Vec<String>,
    },
}

impl View {
    pub fn for_screen<C: Clock>(
        screen: &Screen,
        store: &InventoryStore<C>,
        config: &DesktopConfig,
    ) -> Self {
        match screen {
            Screen::Dashboard => View::Dashboard(dashboard(store, config)),
            Screen::AllProducts => View::Table(all_products(store)),
            Screen::Search(term) => View::Table(search_results(store, term)),
            Screen::ExpiringSoon => View::Table(expiring_soon(store, config)),
            Screen::LowStock => View::Table(low_stock(store, config)),
            Screen::AddProduct => View::AddProductForm {
                title: "ADD NEW PRODUCT",
                fields: ADD_PRODUCT_FIELDS,
            },
            Screen::UpdateStock => View::UpdateStockForm {
                title: "UPDATE PRODUCT STOCK",
                products: store.product_names().into_iter().map(String::from).collect(),
            },
        }
    }
}

pub fn dashboard<C: Clock>(store: &InventoryStore<C>, config: &DesktopConfig) -> DashboardView {
    let summary = store.summary(config.expiry_window_days, config.low_stock_threshold);
    DashboardView {
        title: "DASHBOARD",
        cards: vec![
            SummaryCard {
                title: "Total Products",
                value: summary.total,
            },
            SummaryCard {
                title: "Expiring Soon",
                value: summary.expiring_soon,
            },
            SummaryCard {
                title: "Low Stock",
                value: summary.low_stock,
            },
        ],
        recent_activity: ProductTable::new(
            "Recent Activity",
            store.list_all().iter().take(config.recent_rows),
        ),
    }
}

pub fn all_products<C: Clock>(store: &InventoryStore<C>) -> ProductTable {
    ProductTable::new("ALL PRODUCTS", store.list_all())
}

/// Products matching `term`; a blank term leaves the full listing in place.
pub fn search_results<C: Clock>(store: &InventoryStore<C>, term: &str) -> ProductTable {
    let term = term.trim();
    if term.is_empty() {
        return all_products(store);
    }
    ProductTable::new("ALL PRODUCTS", store.search(term))
}

pub fn expiring_soon<C: Clock>(store: &InventoryStore<C>, config: &DesktopConfig) -> ProductTable {
    ProductTable::new(
        format!(
            "PRODUCTS EXPIRING SOON (within {} days)",
            config.expiry_window_days
        ),
        store.find_expiring(config.expiry_window_days),
    )
}

pub fn low_stock<C: Clock>(store: &InventoryStore<C>, config: &DesktopConfig) -> ProductTable {
    ProductTable::new(
        format!("LOW STOCK PRODUCTS (<{} items)", config.low_stock_threshold),
        store.find_low_stock(config.low_stock_threshold),
    )
}
