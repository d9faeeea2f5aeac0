// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as URL schemes, non-zero timeouts and currency codes.

use crate::diagnostic::ConfigError;
use crate::model::MoneyMateConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &MoneyMateConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let base_url = config.api.base_url.trim();
    let host = base_url
        .strip_prefix("https://")
        .or_else(|| base_url.strip_prefix("http://"));
    match host {
        None => errors.push(ConfigError::invalid_value(
            "api.base_url",
            format!("`{base_url}` must start with http:// or https://"),
            "for a local backend use base_url = \"http://localhost:8000\"",
        )),
        Some(rest) if rest.trim_matches('/').is_empty() => {
            errors.push(ConfigError::invalid_value(
                "api.base_url",
                format!("`{base_url}` has no host"),
                "add the backend host, e.g. https://money.example.com",
            ))
        }
        Some(_) => {}
    }

    if !config.api.refresh_path.starts_with('/') {
        errors.push(ConfigError::invalid_value(
            "api.refresh_path",
            format!("`{}` must start with `/`", config.api.refresh_path),
            "the backend serves it at /api/auth/refresh",
        ));
    }

    for (key, secs) in [
        ("api.connect_timeout_secs", config.api.connect_timeout_secs),
        ("api.request_timeout_secs", config.api.request_timeout_secs),
    ] {
        if secs == 0 {
            errors.push(ConfigError::invalid_value(
                key,
                "must be greater than zero",
                "timeouts are whole seconds; the defaults are 15 and 60",
            ));
        }
    }

    if !config.storage.in_memory && config.storage.token_store_path.trim().is_empty() {
        errors.push(ConfigError::invalid_value(
            "storage.token_store_path",
            "must not be empty",
            "set a file path, or in_memory = true to keep the session in memory",
        ));
    }

    if !LOG_LEVELS.contains(&config.app.log_level.as_str()) {
        errors.push(ConfigError::invalid_value(
            "app.log_level",
            format!("`{}` is not a log level", config.app.log_level),
            format!("use one of {}", LOG_LEVELS.join(", ")),
        ));
    }

    let currency = &config.app.default_currency;
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
        errors.push(ConfigError::invalid_value(
            "app.default_currency",
            format!("`{currency}` is not a three-letter code"),
            "use an ISO 4217 code such as USD or EUR",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&MoneyMateConfig::default()).is_ok());
    }

    #[test]
    fn rejects_base_url_without_scheme() {
        let mut config = MoneyMateConfig::default();
        config.api.base_url = "localhost:8000".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].key().as_deref(), Some("api.base_url"));
    }

    #[test]
    fn rejects_base_url_without_host() {
        let mut config = MoneyMateConfig::default();
        config.api.base_url = "https://".into();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn collects_every_error() {
        let mut config = MoneyMateConfig::default();
        config.api.connect_timeout_secs = 0;
        config.api.request_timeout_secs = 0;
        config.app.log_level = "loud".into();
        config.app.default_currency = "usd".into();
        let errors = validate_config(&config).unwrap_err();
        let keys: Vec<_> = errors.iter().filter_map(ConfigError::key).collect();
        assert_eq!(
            keys,
            [
                "api.connect_timeout_secs",
                "api.request_timeout_secs",
                "app.log_level",
                "app.default_currency",
            ]
        );
    }

    #[test]
    fn empty_store_path_allowed_in_memory() {
        let mut config = MoneyMateConfig::default();
        config.storage.token_store_path = String::new();
        assert!(validate_config(&config).is_err());
        config.storage.in_memory = true;
        assert!(validate_config(&config).is_ok());
    }
}
