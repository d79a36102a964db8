//! Form view-state and submit handlers.
//!
//! A form is built when its screen opens, filled from user input, and consumed
//! by `submit`. Nothing about a form outlives the submission.

use thiserror::Error;

use freshmart_core::Clock;
use freshmart_inventory::{ExpiryDate, InventoryStore, ProductDraft, StockQuantity};

use crate::types::Notification;

/// Field labels of the add-product form, in prompt order.
pub const ADD_PRODUCT_FIELDS: [&str; 5] = [
    "Name",
    "Category",
    "Expiry Date (YYYY-MM-DD)",
    "Stock Quantity",
    "Supplier",
];

/// Input rejected by a form; each maps to a user-facing notification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please select a product and enter a quantity")]
    MissingSelection,

    #[error("Please enter valid values (stock must be a number)")]
    InvalidStock,

    #[error("Invalid expiry date: {0}")]
    InvalidDate(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Product not found")]
    NotFound,
}

impl FormError {
    pub fn notification(&self) -> Notification {
        match self {
            FormError::MissingFields | FormError::MissingSelection => {
                Notification::warning(self.to_string())
            }
            _ => Notification::error(self.to_string()),
        }
    }
}

/// Add New Product form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddProductForm {
    pub name: String,
    pub category: String,
    pub expiry_date: String,
    pub stock_quantity: String,
    pub supplier: String,
}

impl AddProductForm {
    /// Fill the field named by `label` (one of [`ADD_PRODUCT_FIELDS`]).
    pub fn set_field(&mut self, label: &str, value: impl Into<String>) {
        let value = value.into();
        match label {
            "Name" => self.name = value,
            "Category" => self.category = value,
            "Expiry Date (YYYY-MM-DD)" => self.expiry_date = value,
            "Stock Quantity" => self.stock_quantity = value,
            "Supplier" => self.supplier = value,
            _ => tracing::warn!(label, "ignoring unknown add-product field"),
        }
    }

    /// Check the input and turn it into a draft record.
    ///
    /// Stock is checked first, then that every text field is filled, then the
    /// date.
    pub fn validate(&self) -> Result<ProductDraft, FormError> {
        let stock_quantity =
            StockQuantity::parse(&self.stock_quantity).map_err(|_| FormError::InvalidStock)?;

        let required = [&self.name, &self.category, &self.expiry_date, &self.supplier];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(FormError::MissingFields);
        }

        let expiry_date = ExpiryDate::parse(&self.expiry_date)
            .map_err(|e| FormError::InvalidDate(e.message().to_string()))?;

        Ok(ProductDraft {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            expiry_date: Some(expiry_date),
            stock_quantity,
            supplier: self.supplier.trim().to_string(),
        })
    }

    pub fn submit<C: Clock>(
        self,
        store: &mut InventoryStore<C>,
    ) -> Result<Notification, FormError> {
        let draft = self.validate().inspect_err(|e| {
            tracing::warn!(error = %e, "add product rejected");
        })?;
        store.add_draft(draft);
        Ok(Notification::info("Product added successfully!"))
    }
}

/// Update Stock form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateStockForm {
    /// Dropdown choices captured when the form opened.
    pub options: Vec<String>,
    pub product_name: String,
    pub quantity: String,
}

impl UpdateStockForm {
    pub fn open<C: Clock>(store: &InventoryStore<C>) -> Self {
        Self {
            options: store.product_names().into_iter().map(String::from).collect(),
            ..Self::default()
        }
    }

    /// Select a product by typed name or by dropdown position (1-based).
    ///
    /// An option whose name matches the input wins over the position reading,
    /// so a product literally named "2" stays reachable.
    pub fn select(&mut self, choice: &str) {
        let choice = choice.trim();
        let lowered = choice.to_lowercase();
        self.product_name = self
            .options
            .iter()
            .find(|option| option.to_lowercase() == lowered)
            .or_else(|| {
                choice
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| self.options.get(i))
            })
            .cloned()
            .unwrap_or_else(|| choice.to_string());
    }

    pub fn validate(&self) -> Result<(String, StockQuantity), FormError> {
        let name = self.product_name.trim();
        if name.is_empty() || self.quantity.trim().is_empty() {
            return Err(FormError::MissingSelection);
        }
        let quantity = StockQuantity::parse(&self.quantity)
            .map_err(|e| FormError::InvalidQuantity(e.message().to_string()))?;
        Ok((name.to_string(), quantity))
    }

    pub fn submit<C: Clock>(
        self,
        store: &mut InventoryStore<C>,
    ) -> Result<Notification, FormError> {
        let (name, quantity) = self.validate().inspect_err(|e| {
            tracing::warn!(error = %e, "stock update rejected");
        })?;
        if !store.update_quantity(&name, quantity) {
            return Err(FormError::NotFound);
        }
        Ok(Notification::info("Stock quantity updated successfully!"))
    }
}
