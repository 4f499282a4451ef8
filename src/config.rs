//! Runtime Configuration
//!
//! Read once at startup from an optional `window.__TASKBOARD_CONFIG__` object.

use std::sync::OnceLock;

use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Global object the host page may define to override defaults
const CONFIG_GLOBAL: &str = "__TASKBOARD_CONFIG__";

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Client settings (all fields optional in the source object)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for every backend request
    pub api_root: String,
    /// Pause after the last keystroke before a search runs
    pub search_debounce_ms: u32,
    /// How long a search may run before the loading indicator appears
    pub loading_indicator_delay_ms: u32,
    /// Trimmed queries shorter than this never hit the network
    pub min_query_len: usize,
    /// Number of entries in the search dialog's recent list
    pub recent_items: usize,
    /// `limit` for list endpoints
    pub page_size: u32,
    /// Where the backend serves exported CSV files
    pub exports_path: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_root: "/api".to_string(),
            search_debounce_ms: 150,
            loading_indicator_delay_ms: 200,
            min_query_len: 2,
            recent_items: 5,
            page_size: 100,
            exports_path: "/exports".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse the configured level, falling back to `Info` for unknown names
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Level to install the console logger at; `None` when logging is off
    pub fn log_level(&self) -> Option<log::Level> {
        self.log_level_filter().to_level()
    }
}

/// Load the config from the page and install it as the process-wide value.
///
/// Returns the installed config. Calling this twice keeps the first value.
pub fn init() -> &'static AppConfig {
    let loaded = match read_global() {
        Ok(Some(cfg)) => cfg,
        Ok(None) => AppConfig::default(),
        Err(e) => {
            log::warn!("ignoring malformed {}: {}", CONFIG_GLOBAL, e);
            AppConfig::default()
        }
    };
    CONFIG.get_or_init(|| loaded)
}

/// The installed config, or defaults if `init` never ran (tests)
pub fn current() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

fn read_global() -> Result<Option<AppConfig>, String> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| format!("{:?}", e))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| e.to_string())
}
