// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./moneymate.toml` > `~/.config/moneymate/moneymate.toml` >
//! `/etc/moneymate/moneymate.toml` with environment variable overrides via `MONEYMATE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::diagnostic::SECTIONS;
use crate::model::MoneyMateConfig;

pub const SYSTEM_CONFIG_PATH: &str = "/etc/moneymate/moneymate.toml";
pub const LOCAL_CONFIG_FILE: &str = "moneymate.toml";
pub const ENV_PREFIX: &str = "MONEYMATE_";

/// Path of the per-user config file, if a config directory exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("moneymate").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/moneymate/moneymate.toml` (system-wide)
/// 3. `~/.config/moneymate/moneymate.toml` (user XDG config)
/// 4. `./moneymate.toml` (local directory)
/// 5. `MONEYMATE_*` environment variables
pub fn load_config() -> Result<MoneyMateConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<MoneyMateConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MoneyMateConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<MoneyMateConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MoneyMateConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The Figment used for the standard hierarchy, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(MoneyMateConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Environment provider mapping `MONEYMATE_<SECTION>_<KEY>` to `section.key`.
///
/// Only the first underscore after a known section name becomes a dot, so
/// `MONEYMATE_API_BASE_URL` maps to `api.base_url`, not `api.base.url`.
/// Variables outside a known section (such as `MONEYMATE_PASSWORD`) are
/// ignored.
fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX)
        .filter(|key| section_key(key.as_str()).is_some())
        .map(|key| {
            section_key(key.as_str())
                .unwrap_or_else(|| key.as_str().to_string())
                .into()
        })
}

/// `api_base_url` -> `api.base_url`; `None` when no known section matches.
fn section_key(key: &str) -> Option<String> {
    SECTIONS.iter().find_map(|section| {
        key.strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
            .map(|rest| format!("{section}.{rest}"))
    })
}
