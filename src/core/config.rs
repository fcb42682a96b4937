//! Dashboard configuration.
//!
//! Defaults reproduce the stock layout. A page can override any subset of
//! fields by embedding JSON in `<script id="dashboard-config" type="application/json">`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::ThemeMode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid dashboard config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("page_size must be at least 1")]
    ZeroPageSize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub title: String,
    pub initial_theme: ThemeMode,
    pub page_size: usize,
    pub chart_width: f64,
    pub chart_height: f64,
    pub calendar_height: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Admin Dashboard".to_string(),
            initial_theme: ThemeMode::Light,
            page_size: 5,
            chart_width: 500.0,
            chart_height: 300.0,
            calendar_height: 500.0,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(config)
    }

    /// Reads the embedded override, falling back to defaults when it is
    /// missing or malformed.
    pub fn load() -> Self {
        let Some(raw) = embedded_config() else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn embedded_config() -> Option<String> {
    const CONFIG_ELEMENT_ID: &str = "dashboard-config";
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
fn embedded_config() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = DashboardConfig::from_json(r#"{"title":"Ops","initial_theme":"dark"}"#).unwrap();
        assert_eq!(config.title, "Ops");
        assert_eq!(config.initial_theme, ThemeMode::Dark);
        assert_eq!(config.page_size, 5);
        assert_eq!(config.chart_width, 500.0);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = DashboardConfig::from_json(r#"{"page_size":0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroPageSize));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(DashboardConfig::from_json("{title"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn load_without_embedded_config_uses_defaults() {
        assert_eq!(DashboardConfig::load(), DashboardConfig::default());
    }
}
