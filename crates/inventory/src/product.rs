use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use freshmart_core::{DomainError, DomainResult, ValueObject};

/// Shelf life assumed for a product added without an explicit expiry date.
pub const DEFAULT_SHELF_LIFE_DAYS: u32 = 7;

/// Text format accepted for expiry dates.
const EXPIRY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar date a product expires on (time of day is never recorded).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpiryDate(NaiveDate);

impl ExpiryDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse a `YYYY-MM-DD` date.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let trimmed = input.trim();
        NaiveDate::parse_from_str(trimmed, EXPIRY_DATE_FORMAT)
            .map(Self)
            .map_err(|e| {
                DomainError::validation(format!(
                    "'{trimmed}' is not a valid YYYY-MM-DD date: {e}"
                ))
            })
    }

    /// The date `days` after `today`, saturating at the last representable date.
    pub fn days_after(today: NaiveDate, days: u32) -> Self {
        Self(
            today
                .checked_add_days(Days::new(u64::from(days)))
                .unwrap_or(NaiveDate::MAX),
        )
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl ValueObject for ExpiryDate {}

impl core::fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0.format(EXPIRY_DATE_FORMAT))
    }
}

/// Units on hand. Negative stock is unrepresentable.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockQuantity(u32);

impl StockQuantity {
    pub fn new(units: u32) -> Self {
        Self(units)
    }

    /// Parse a whole, non-negative number of units.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let trimmed = input.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| DomainError::validation(format!("'{trimmed}' is not a whole number")))?;
        if value < 0 {
            return Err(DomainError::validation("Quantity cannot be negative"));
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::validation(format!("quantity {value} is too large")))
    }

    pub fn units(&self) -> u32 {
        self.0
    }
}

impl ValueObject for StockQuantity {}

impl core::fmt::Display for StockQuantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A product record held by the inventory store.
///
/// Fields are read-only outside this crate; the store's
/// [`update_quantity`](crate::InventoryStore::update_quantity) is the only
/// mutation path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    category: String,
    expiry_date: ExpiryDate,
    stock_quantity: StockQuantity,
    supplier: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        expiry_date: ExpiryDate,
        stock_quantity: StockQuantity,
        supplier: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            expiry_date,
            stock_quantity,
            supplier: supplier.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn expiry_date(&self) -> ExpiryDate {
        self.expiry_date
    }

    pub fn stock_quantity(&self) -> StockQuantity {
        self.stock_quantity
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    /// Case-insensitive exact comparison against the display name.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Whether the product expires on or before `cutoff`.
    pub fn expires_by(&self, cutoff: NaiveDate) -> bool {
        self.expiry_date.date() <= cutoff
    }

    pub(crate) fn set_stock_quantity(&mut self, quantity: StockQuantity) {
        self.stock_quantity = quantity;
    }
}

/// Product fields as collected before the record exists; the expiry date may
/// still be unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub expiry_date: Option<ExpiryDate>,
    pub stock_quantity: StockQuantity,
    pub supplier: String,
}

impl ProductDraft {
    /// Build the record, defaulting a missing expiry date to
    /// `today + DEFAULT_SHELF_LIFE_DAYS`.
    pub fn into_product(self, today: NaiveDate) -> Product {
        let expiry_date = self
            .expiry_date
            .unwrap_or_else(|| ExpiryDate::days_after(today, DEFAULT_SHELF_LIFE_DAYS));
        Product::new(
            self.name,
            self.category,
            expiry_date,
            self.stock_quantity,
            self.supplier,
        )
    }
}
