// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the MoneyMate client.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level MoneyMate configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MoneyMateConfig {
    /// Backend connection settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Where the session tokens are kept.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Client behavior settings.
    #[serde(default)]
    pub app: AppConfig,
}

/// Backend connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL of the backend, without the `/api` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the token refresh endpoint, relative to `base_url`.
    #[serde(default = "default_refresh_path")]
    pub refresh_path: String,

    /// TCP connect timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ApiConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            refresh_path: default_refresh_path(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_refresh_path() -> String {
    "/api/auth/refresh".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    15
}

fn default_request_timeout_secs() -> u64 {
    60
}

/// Token store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite file holding the session.
    #[serde(default = "default_token_store_path")]
    pub token_store_path: String,

    /// Keep the session in memory only; nothing survives a restart.
    #[serde(default)]
    pub in_memory: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_store_path: default_token_store_path(),
            in_memory: false,
        }
    }
}

fn default_token_store_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("moneymate").join("session.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("moneymate-session.db"))
        .to_string_lossy()
        .into_owned()
}

/// Client behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Currency suggested when creating wallets and goals.
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            default_currency: default_currency(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_mobile_client_timeouts() {
        let config = MoneyMateConfig::default();
        assert_eq!(config.api.connect_timeout(), Duration::from_secs(15));
        assert_eq!(config.api.request_timeout(), Duration::from_secs(60));
        assert_eq!(config.api.refresh_path, "/api/auth/refresh");
    }

    #[test]
    fn default_store_path_ends_with_session_db() {
        let config = StorageConfig::default();
        assert!(config.token_store_path.ends_with("session.db"));
        assert!(!config.in_memory);
    }

    #[test]
    fn serializes_back_to_toml() {
        let rendered = toml::to_string(&MoneyMateConfig::default()).unwrap();
        assert!(rendered.contains("[api]"));
        assert!(rendered.contains("default_currency = \"USD\""));
    }
}
