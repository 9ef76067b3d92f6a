//! UI configuration
//!
//! Defaults are compiled in from `deqcode.toml`. The backend base URL can be
//! overridden at build time with `DEQCODE_API_BASE`.

use serde::{Deserialize, Serialize};

const EMBEDDED_CONFIG: &str = include_str!("../deqcode.toml");

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub history: HistoryConfig,
}

// ============= Backend Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Prefix for every endpoint, without trailing slash. Empty means
    /// same-origin.
    #[serde(default = "default_api_base")]
    pub base_url: String,

    #[serde(default = "default_login_path")]
    pub login_path: String,

    #[serde(default = "default_register_path")]
    pub register_path: String,

    #[serde(default = "default_design_path")]
    pub design_path: String,

    #[serde(default = "default_circuits_path")]
    pub circuits_path: String,
}

fn default_api_base() -> String {
    "http://localhost:8000".to_string()
}

fn default_login_path() -> String {
    "/api/login".to_string()
}

fn default_register_path() -> String {
    "/register".to_string()
}

fn default_design_path() -> String {
    "/api/design".to_string()
}

fn default_circuits_path() -> String {
    "/api/viewcircuits".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base(),
            login_path: default_login_path(),
            register_path: default_register_path(),
            design_path: default_design_path(),
            circuits_path: default_circuits_path(),
        }
    }
}

impl ApiConfig {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

// ============= History Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Label prefix for entries without a name, e.g. "Circuit 2"
    #[serde(default = "default_fallback_label")]
    pub fallback_label: String,
}

fn default_fallback_label() -> String {
    "Circuit".to_string()
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            fallback_label: default_fallback_label(),
        }
    }
}

impl UiConfig {
    /// Parse a TOML document, filling missing keys with defaults.
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Embedded configuration with the build-time environment applied.
    pub fn load() -> Self {
        let mut config = match Self::from_toml(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Invalid embedded config, using defaults: {}", e);
                Self::default()
            }
        };
        if let Some(base) = option_env!("DEQCODE_API_BASE") {
            config.api.base_url = base.to_string();
        }
        config
    }
}
