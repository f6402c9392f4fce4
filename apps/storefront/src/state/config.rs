//! # Configuration State
//!
//! Storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`GROOSO_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after startup.

use grooso_core::{Money, CART_STORAGE_KEY};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storefront configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the header and on orders)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Key the cart snapshot is stored under
    pub cart_storage_key: String,

    /// Database file override; `None` means the platform data directory
    pub database_path: Option<PathBuf>,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Grooso"
    /// - Currency: INR (₹), whole rupees
    /// - Cart key: "grooso-cart"
    fn default() -> Self {
        ConfigState {
            store_name: "Grooso".to_string(),
            currency_code: "INR".to_string(),
            currency_symbol: "₹".to_string(),
            cart_storage_key: CART_STORAGE_KEY.to_string(),
            database_path: None,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `GROOSO_STORE_NAME`: Override store name
    /// - `GROOSO_CART_KEY`: Override the cart storage key
    /// - `GROOSO_DB_PATH`: Use a specific database file
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("GROOSO_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(key) = lookup("GROOSO_CART_KEY").filter(|k| !k.trim().is_empty()) {
            config.cart_storage_key = key;
        }

        if let Some(path) = lookup("GROOSO_DB_PATH").filter(|p| !p.is_empty()) {
            config.database_path = Some(PathBuf::from(path));
        }

        config
    }

    /// Formats an amount the way the storefront displays prices.
    ///
    /// Whole rupees with Indian digit grouping: the last three digits, then
    /// groups of two.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_rupees(129999)), "₹1,29,999");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let rupees = amount.rupees();
        format!(
            "{}{}{}",
            if rupees < 0 { "-" } else { "" },
            self.currency_symbol,
            group_indian(rupees.unsigned_abs())
        )
    }
}

/// `1234567` → `"12,34,567"`
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (mut head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    while head.len() > 2 {
        let (rest, group) = head.split_at(head.len() - 2);
        groups.push(group);
        head = rest;
    }
    groups.push(head);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
