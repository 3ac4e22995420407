//! Controller configuration.
//!
//! Every field defaults to the page's fixed selection contract, so an empty
//! JSON object (or `ChromeConfig::default()`) reproduces the stock behavior.
//! The scroll threshold is not part of the config; see `consts`.

use serde::{Deserialize, Serialize};

use crate::consts::{ACTIVE_CLASS, HEADER_SELECTOR, NAV_LINK_SELECTOR, SCROLLED_CLASS};
use crate::error::ChromeError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Selector locating the header container.
    pub header_selector: String,
    /// Selector locating routable navigation links.
    pub nav_link_selector: String,
    /// Class toggled on the header by scroll position.
    pub scrolled_class: String,
    /// Class added to matching navigation links.
    pub active_class: String,
    /// Value for `--brand-600` on the root element. Untouched when `None`.
    pub brand_shade: Option<String>,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            header_selector: HEADER_SELECTOR.to_owned(),
            nav_link_selector: NAV_LINK_SELECTOR.to_owned(),
            scrolled_class: SCROLLED_CLASS.to_owned(),
            active_class: ACTIVE_CLASS.to_owned(),
            brand_shade: None,
        }
    }
}

impl ChromeConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ChromeError> {
        serde_json::from_str(raw).map_err(|e| ChromeError::ConfigParse(e.to_string()))
    }

    /// Brand shade to apply, ignoring blank values.
    #[must_use]
    pub fn brand_shade(&self) -> Option<&str> {
        self.brand_shade
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}
