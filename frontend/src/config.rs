use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_PAGE_SIZE: usize = 15;
pub const STORAGE_KEY: &str = "spending_dashboard.config";

/// Runtime settings. Defaults, then the build-time `SPENDING_API_BASE_URL`,
/// then an optional JSON override in localStorage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Prefix for the API routes. Empty means same origin.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_base_url() -> String {
    option_env!("SPENDING_API_BASE_URL")
        .unwrap_or_default()
        .trim_end_matches('/')
        .to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            page_size: default_page_size(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        match stored_override() {
            Some(raw) => Self::from_json(&raw),
            None => Self::default(),
        }
    }

    /// Parses an override document, falling back to defaults for anything
    /// missing or invalid.
    pub fn from_json(raw: &str) -> Self {
        let mut config = match serde_json::from_str::<AppConfig>(raw) {
            Ok(config) => config,
            Err(err) => {
                warn!(%err, "ignoring malformed stored config");
                return Self::default();
            }
        };
        if config.page_size == 0 {
            warn!("page_size must be positive, using {}", DEFAULT_PAGE_SIZE);
            config.page_size = DEFAULT_PAGE_SIZE;
        }
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        config
    }

    pub fn log_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

fn stored_override() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(STORAGE_KEY).ok()?
}
