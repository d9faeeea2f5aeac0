// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! miette diagnostics for `moneymate.toml`.
//!
//! Parse failures from figment and semantic failures from
//! [`validate_config`](crate::validation::validate_config) both end up as
//! [`ConfigError`]s. Unknown sections and keys are matched against the
//! `[api]`, `[storage]` and `[app]` layout so typos get a suggestion and the
//! offending line is labelled when the file can be read back.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use miette::{Diagnostic, GraphicalReportHandler, NamedSource, SourceSpan};
use thiserror::Error;

/// Top-level tables accepted in `moneymate.toml`.
pub const SECTIONS: &[&str] = &["api", "storage", "app"];

/// Jaro-Winkler score a candidate needs before it is offered as a fix.
const MIN_SIMILARITY: f64 = 0.8;

/// Keys accepted in `section`, in the order they are documented.
pub fn section_keys(section: &str) -> &'static [&'static str] {
    match section {
        "api" => &[
            "base_url",
            "refresh_path",
            "connect_timeout_secs",
            "request_timeout_secs",
        ],
        "storage" => &["token_store_path", "in_memory"],
        "app" => &["log_level", "default_currency"],
        _ => &[],
    }
}

/// Where in a config file a diagnostic points.
#[derive(Debug, Default)]
pub struct Location {
    pub span: Option<SourceSpan>,
    pub src: Option<NamedSource<String>>,
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("unknown section `[{section}]`")]
    #[diagnostic(
        code(moneymate::config::unknown_section),
        help("{}", section_help(suggestion.as_deref()))
    )]
    UnknownSection {
        section: String,
        suggestion: Option<String>,
        #[label("not a MoneyMate section")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    #[error("unknown key `{key}` in `[{section}]`")]
    #[diagnostic(
        code(moneymate::config::unknown_key),
        help("{}", key_help(section, suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        section: String,
        key: String,
        suggestion: Option<String>,
        valid_keys: String,
        #[label("this key is not recognized")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    #[error("`{key}` has the wrong type: {detail}")]
    #[diagnostic(code(moneymate::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        key: String,
        detail: String,
        expected: String,
        #[label("wrong type here")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A value parsed but does not make sense, e.g. a zero timeout.
    #[error("invalid `{key}`: {message}")]
    #[diagnostic(code(moneymate::config::invalid_value), help("{hint}"))]
    InvalidValue {
        key: String,
        message: String,
        hint: String,
    },

    #[error("configuration error: {0}")]
    #[diagnostic(code(moneymate::config::other))]
    Other(String),
}

impl ConfigError {
    pub fn invalid_value(
        key: impl Into<String>,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Dotted key the error is about, when there is one.
    pub fn key(&self) -> Option<String> {
        match self {
            Self::UnknownSection { section, .. } => Some(section.clone()),
            Self::UnknownKey { section, key, .. } => Some(format!("{section}.{key}")),
            Self::InvalidType { key, .. } | Self::InvalidValue { key, .. } => Some(key.clone()),
            Self::Other(_) => None,
        }
    }
}

fn section_help(suggestion: Option<&str>) -> String {
    let sections = SECTIONS
        .iter()
        .map(|s| format!("[{s}]"))
        .collect::<Vec<_>>()
        .join(", ");
    match suggestion {
        Some(s) => format!("did you mean `[{s}]`? moneymate.toml has {sections}"),
        None => format!("moneymate.toml has {sections}"),
    }
}

fn key_help(section: &str, suggestion: Option<&str>, valid_keys: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? `[{section}]` accepts {valid_keys}"),
        None => format!("`[{section}]` accepts {valid_keys}"),
    }
}

/// Best match for `typo` among `candidates`, if any is close enough.
pub fn suggest(typo: &str, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .map(|candidate| (strsim::jaro_winkler(typo, candidate), *candidate))
        .filter(|(score, _)| *score >= MIN_SIMILARITY)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, candidate)| candidate.to_string())
}

/// Translate a figment error into one diagnostic per underlying failure.
///
/// `sources` holds `(path, contents)` of the TOML files that were merged, so
/// spans can be attached to the file a bad key came from.
pub fn from_figment(err: figment::Error, sources: &[(String, String)]) -> Vec<ConfigError> {
    use figment::error::Kind;

    err.into_iter()
        .map(|error| {
            let path: Vec<String> = error.path.clone();
            match &error.kind {
                Kind::UnknownField(name, _) if path.is_empty() => {
                    let location = locate(&error, sources, None, name);
                    ConfigError::UnknownSection {
                        section: name.clone(),
                        suggestion: suggest(name, SECTIONS),
                        span: location.span,
                        src: location.src,
                    }
                }
                Kind::UnknownField(name, _) => {
                    let section = path[0].clone();
                    let keys = section_keys(&section);
                    let location = locate(&error, sources, Some(&section), name);
                    ConfigError::UnknownKey {
                        key: name.clone(),
                        suggestion: suggest(name, keys),
                        valid_keys: keys.join(", "),
                        span: location.span,
                        src: location.src,
                        section,
                    }
                }
                Kind::InvalidType(actual, expected) => {
                    let location = match path.split_last() {
                        Some((key, table)) => {
                            locate(&error, sources, table.first().map(String::as_str), key)
                        }
                        None => Location::default(),
                    };
                    ConfigError::InvalidType {
                        key: path.join("."),
                        detail: format!("found {actual}"),
                        expected: expected.to_string(),
                        span: location.span,
                        src: location.src,
                    }
                }
                _ => ConfigError::Other(error.to_string()),
            }
        })
        .collect()
}

/// Attach the source file the failing value came from, if it was read.
fn locate(
    error: &figment::Error,
    sources: &[(String, String)],
    section: Option<&str>,
    key: &str,
) -> Location {
    let origin = error
        .metadata
        .as_ref()
        .and_then(|meta| meta.source.as_ref())
        .and_then(|source| match source {
            figment::Source::File(path) => Some(path.display().to_string()),
            _ => None,
        });
    let file = match origin {
        Some(origin) => sources.iter().find(|(path, _)| *path == origin),
        // Inline strings carry no file source.
        None => sources.iter().find(|(path, _)| path == "<inline>"),
    };

    file.and_then(|(path, contents)| {
        let offset = key_offset(contents, section, key)?;
        Some(Location {
            span: Some(SourceSpan::new(offset.into(), key.len())),
            src: Some(NamedSource::new(path, contents.clone())),
        })
    })
    .unwrap_or_default()
}

/// Byte offset of `key` inside the `[section]` table of `contents`.
///
/// With `section = None` the key is looked up as a table header. Lookups
/// stop at the next header, so a key in `[app]` is never matched when
/// `[api]` is asked for.
pub fn key_offset(contents: &str, section: Option<&str>, key: &str) -> Option<usize> {
    let mut current: Option<&str> = None;
    let mut offset = 0;
    for line in contents.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        if let Some(header) = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.split_once(']'))
            .map(|(name, _)| name.trim())
        {
            if section.is_none() && header == key {
                let name_at = trimmed.find(key).unwrap_or(1);
                return Some(offset + indent + name_at);
            }
            current = Some(header);
        } else if section.is_some() && current == section {
            let name = trimmed.split('=').next().map(str::trim_end);
            if name == Some(key) {
                return Some(offset + indent);
            }
        }
        offset += line.len();
    }
    None
}

/// Print each diagnostic to stderr with miette's graphical renderer.
pub fn render_errors(errors: &[ConfigError]) {
    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut rendered = String::new();
        match handler.render_report(&mut rendered, error) {
            Ok(()) => eprint!("{rendered}"),
            Err(_) => eprintln!("error: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_keys_within_their_section() {
        assert_eq!(
            suggest("bse_url", section_keys("api")),
            Some("base_url".to_string())
        );
        assert_eq!(
            suggest("token_stor_path", section_keys("storage")),
            Some("token_store_path".to_string())
        );
        assert_eq!(suggest("zzzzzz", section_keys("app")), None);
    }

    #[test]
    fn suggests_sections() {
        assert_eq!(suggest("storag", SECTIONS), Some("storage".to_string()));
        assert_eq!(suggest("telemetry", SECTIONS), None);
    }

    #[test]
    fn every_section_lists_its_keys() {
        for section in SECTIONS {
            assert!(!section_keys(section).is_empty(), "{section}");
        }
        assert!(section_keys("telemetry").is_empty());
    }

    #[test]
    fn key_offset_stays_inside_its_table() {
        let contents = "[api]\nbase_url = \"x\"\n\n[app]\n  base_url = 1\n";
        let in_api = key_offset(contents, Some("api"), "base_url").unwrap();
        let in_app = key_offset(contents, Some("app"), "base_url").unwrap();
        assert_eq!(&contents[in_api..in_api + 8], "base_url");
        assert_eq!(&contents[in_app..in_app + 8], "base_url");
        assert!(in_app > contents.find("[app]").unwrap());
        assert_eq!(key_offset(contents, Some("storage"), "base_url"), None);
    }

    #[test]
    fn key_offset_finds_section_headers() {
        let contents = "[api]\n[ telemetry ]\nenabled = true\n";
        let at = key_offset(contents, None, "telemetry").unwrap();
        assert_eq!(&contents[at..at + 9], "telemetry");
    }

    #[test]
    fn help_names_the_section() {
        let help = key_help("storage", Some("in_memory"), "token_store_path, in_memory");
        assert_eq!(
            help,
            "did you mean `in_memory`? `[storage]` accepts token_store_path, in_memory"
        );
        assert!(section_help(None).contains("[api], [storage], [app]"));
    }

    #[test]
    fn dotted_key_for_each_variant() {
        let err = ConfigError::invalid_value("api.base_url", "no scheme", "use https://");
        assert_eq!(err.key().as_deref(), Some("api.base_url"));
        assert_eq!(ConfigError::Other("x".into()).key(), None);
    }
}
