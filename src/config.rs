//! Runtime Configuration
//!
//! Defaults can be overridden by a `window.__TODO_CONFIG__` object defined
//! in the host page before the bundle loads.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::{NoteError, Result};

const CONFIG_GLOBAL: &str = "__TODO_CONFIG__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root of the remote todo API
    pub base_url: String,
    /// localStorage key holding the last issued token
    pub token_key: String,
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
    /// Priority sent with created and updated notes
    pub default_priority: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "https://todo.hillel.it".to_string(),
            token_key: "Token".to_string(),
            log_level: "info".to_string(),
            default_priority: 1,
        }
    }
}

impl AppConfig {
    /// Read the page-provided config, falling back to defaults
    pub fn from_window() -> Self {
        match Self::try_from_window() {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                web_sys::console::warn_1(&format!("[CONFIG] {}, using defaults", e).into());
                Self::default()
            }
        }
    }

    fn try_from_window() -> Result<Option<Self>> {
        let Some(window) = web_sys::window() else {
            return Ok(None);
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|e| NoteError::Config(format!("{:?}", e)))?;
        if raw.is_undefined() || raw.is_null() {
            return Ok(None);
        }
        Self::from_js(raw).map(Some)
    }

    pub fn from_js(raw: JsValue) -> Result<Self> {
        serde_wasm_bindgen::from_value(raw).map_err(|e| NoteError::Config(e.to_string()))
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Base URL without a trailing slash
    pub fn api_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"base_url":"http://localhost:3000/"}"#).unwrap();
        assert_eq!(config.api_root(), "http://localhost:3000");
        assert_eq!(config.token_key, "Token");
        assert_eq!(config.default_priority, 1);
    }

    #[test]
    fn test_log_level_parsing() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::LevelFilter::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }
}
