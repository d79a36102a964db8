//! Desktop configuration, read once from the environment at startup.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_EXPIRY_WINDOW_DAYS: &str = "FRESHMART_EXPIRY_WINDOW_DAYS";
pub const ENV_LOW_STOCK_THRESHOLD: &str = "FRESHMART_LOW_STOCK_THRESHOLD";
pub const ENV_RECENT_ROWS: &str = "FRESHMART_RECENT_ROWS";
pub const ENV_OUTPUT: &str = "FRESHMART_OUTPUT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got '{value}'")]
    Invalid {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// How screens are written to the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

/// Report thresholds and presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopConfig {
    /// "Expiring Soon" covers products expiring within this many days.
    pub expiry_window_days: u32,
    /// "Low Stock" covers products with fewer units than this.
    pub low_stock_threshold: i64,
    /// Rows shown under "Recent Activity" on the dashboard.
    pub recent_rows: usize,
    pub output: OutputFormat,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            expiry_window_days: 7,
            low_stock_threshold: 15,
            recent_rows: 5,
            output: OutputFormat::Table,
        }
    }
}

impl DesktopConfig {
    /// Load from `FRESHMART_*` environment variables; unset keys keep defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` as the variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            expiry_window_days: parse_var(
                &lookup,
                ENV_EXPIRY_WINDOW_DAYS,
                "a non-negative whole number of days",
                defaults.expiry_window_days,
            )?,
            low_stock_threshold: parse_var(
                &lookup,
                ENV_LOW_STOCK_THRESHOLD,
                "a whole number",
                defaults.low_stock_threshold,
            )?,
            recent_rows: parse_var(
                &lookup,
                ENV_RECENT_ROWS,
                "a non-negative whole number",
                defaults.recent_rows,
            )?,
            output: parse_var(&lookup, ENV_OUTPUT, "'table' or 'json'", defaults.output)?,
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            value: raw,
            expected,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn unset_variables_use_defaults() {
        let config = DesktopConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, DesktopConfig::default());
        assert_eq!(config.expiry_window_days, 7);
        assert_eq!(config.low_stock_threshold, 15);
        assert_eq!(config.recent_rows, 5);
        assert_eq!(config.output, OutputFormat::Table);
    }

    #[test]
    fn variables_override_defaults() {
        let config = DesktopConfig::from_lookup(lookup_from(&[
            (ENV_EXPIRY_WINDOW_DAYS, "3"),
            (ENV_LOW_STOCK_THRESHOLD, " 20 "),
            (ENV_RECENT_ROWS, "2"),
            (ENV_OUTPUT, "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.expiry_window_days, 3);
        assert_eq!(config.low_stock_threshold, 20);
        assert_eq!(config.recent_rows, 2);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn blank_variable_keeps_default() {
        let config =
            DesktopConfig::from_lookup(lookup_from(&[(ENV_EXPIRY_WINDOW_DAYS, "  ")])).unwrap();
        assert_eq!(config.expiry_window_days, 7);
    }

    #[test]
    fn malformed_variables_are_rejected() {
        let err = DesktopConfig::from_lookup(lookup_from(&[(ENV_EXPIRY_WINDOW_DAYS, "-1")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "FRESHMART_EXPIRY_WINDOW_DAYS must be a non-negative whole number of days, got '-1'"
        );

        let err =
            DesktopConfig::from_lookup(lookup_from(&[(ENV_OUTPUT, "xml")])).unwrap_err();
        match err {
            ConfigError::Invalid { key, .. } => assert_eq!(key, ENV_OUTPUT),
        }
    }
}
