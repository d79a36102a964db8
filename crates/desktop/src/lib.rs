//! `freshmart-desktop`
//!
//! **Responsibility:** the clerk-facing inventory application.
//!
//! This crate provides:
//! - Environment-driven configuration (report thresholds, output format)
//! - View models for each screen (dashboard, product tables, forms)
//! - Short-lived form view-state consumed by submit handlers
//! - A menu-driven shell over any line-oriented input/output pair
//!
//! The application is a **thin shell** around `freshmart_inventory::InventoryStore`;
//! every record change goes through the store's own mutators.

pub mod config;
pub mod forms;
pub mod render;
pub mod shell;
pub mod types;
pub mod views;

pub use config::{ConfigError, DesktopConfig, OutputFormat};
pub use forms::{AddProductForm, FormError, UpdateStockForm};
pub use render::Renderer;
pub use shell::{Command, Shell};
pub use types::{Notification, NotificationLevel, ProductRow, Screen};
pub use views::{DashboardView, ProductTable, View};
