// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the MoneyMate client.

use serde::Serialize;
use strum::{Display, EnumString};
use thiserror::Error;

/// Message carried by a 401 from the login endpoint.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Result alias returned by every repository and use case.
pub type Outcome<T> = Result<T, MoneyMateError>;

/// The primary error type used across all MoneyMate layers.
#[derive(Debug, Error)]
pub enum MoneyMateError {
    /// Transport failure: timeout, connection refused, DNS, TLS.
    #[error("network error: {message}")]
    Network {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The session could not be refreshed; credentials have been cleared.
    #[error("session expired")]
    AuthExpired,

    /// A success status arrived without the body the operation requires.
    #[error("empty response body")]
    EmptyResponse,

    /// Input rejected before any network call was made.
    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// Token store read or write failure.
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Request encoding or response decoding failed.
    #[error("decode error: {message}")]
    Decode {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors (invalid TOML, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl MoneyMateError {
    /// Shorthand for a [`MoneyMateError::Validation`].
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a [`MoneyMateError::Network`] wrapping its cause.
    pub fn network<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Shorthand for a [`MoneyMateError::Decode`] wrapping its cause.
    pub fn decode<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the coarse category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network { .. } => ErrorKind::Network,
            Self::Http { .. } => ErrorKind::Http,
            Self::AuthExpired => ErrorKind::AuthExpired,
            Self::EmptyResponse => ErrorKind::EmptyResponse,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Storage { .. } => ErrorKind::Storage,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Config(_) => ErrorKind::Config,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::AuthExpired => Some(401),
            _ => None,
        }
    }
}

/// Error categories the presentation layer branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Network,
    Http,
    AuthExpired,
    EmptyResponse,
    Validation,
    Storage,
    Decode,
    Config,
    Internal,
}

/// Cloneable summary of a [`MoneyMateError`] for display.
///
/// `message` is safe to show to an end user; `detail` keeps the full
/// error text for logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub status: Option<u16>,
    pub field: Option<String>,
    pub message: String,
    pub detail: String,
}

impl ErrorInfo {
    /// Whether the user must sign in again.
    pub fn requires_sign_in(&self) -> bool {
        self.kind == ErrorKind::AuthExpired
    }
}

impl From<&MoneyMateError> for ErrorInfo {
    fn from(err: &MoneyMateError) -> Self {
        let field = match err {
            MoneyMateError::Validation { field, .. } => Some(field.clone()),
            _ => None,
        };
        Self {
            kind: err.kind(),
            status: err.status(),
            field,
            message: user_message(err),
            detail: err.to_string(),
        }
    }
}

impl From<MoneyMateError> for ErrorInfo {
    fn from(err: MoneyMateError) -> Self {
        Self::from(&err)
    }
}

fn user_message(err: &MoneyMateError) -> String {
    match err {
        MoneyMateError::Network { .. } => "Network error. Please check your connection".into(),
        MoneyMateError::Http { status, message } => http_user_message(*status, message),
        MoneyMateError::AuthExpired => "Your session has expired. Please sign in again".into(),
        MoneyMateError::EmptyResponse => "The server returned no data".into(),
        MoneyMateError::Validation { message, .. } => message.clone(),
        MoneyMateError::Storage { .. } => "Could not access local storage".into(),
        MoneyMateError::Decode { .. } => "Unexpected response from the server".into(),
        MoneyMateError::Config(msg) => msg.clone(),
        MoneyMateError::Internal(_) => "An unexpected error occurred".into(),
    }
}

fn http_user_message(status: u16, server_message: &str) -> String {
    match status {
        400 if server_message.to_ascii_lowercase().contains("email") => {
            "An account with this email already exists".into()
        }
        401 if server_message == INVALID_CREDENTIALS => INVALID_CREDENTIALS.into(),
        401 => "You are not authorized. Please sign in again".into(),
        403 => "Access denied".into(),
        404 => "Not found".into(),
        409 => "An account with this email already exists".into(),
        422 => "Invalid input data".into(),
        500 => "Server is temporarily unavailable. Please try again later".into(),
        400..=499 => "Invalid request. Please check your input".into(),
        500..=599 => "Server error. Please try again later".into(),
        _ => "Network error occurred".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(MoneyMateError::AuthExpired.kind(), ErrorKind::AuthExpired);
        assert_eq!(MoneyMateError::EmptyResponse.kind(), ErrorKind::EmptyResponse);
        assert_eq!(
            MoneyMateError::validation("balance", "must not be negative").kind(),
            ErrorKind::Validation
        );
        let http = MoneyMateError::Http {
            status: 404,
            message: "Wallet not found".into(),
        };
        assert_eq!(http.kind(), ErrorKind::Http);
        assert_eq!(http.status(), Some(404));
    }

    #[test]
    fn error_kind_round_trips_through_strum() {
        assert_eq!(ErrorKind::AuthExpired.to_string(), "auth_expired");
        assert_eq!(
            ErrorKind::from_str("empty_response").unwrap(),
            ErrorKind::EmptyResponse
        );
    }

    #[test]
    fn display_includes_status_and_server_message() {
        let err = MoneyMateError::Http {
            status: 400,
            message: "Insufficient balance".into(),
        };
        assert_eq!(err.to_string(), "HTTP 400: Insufficient balance");
    }

    #[test]
    fn info_keeps_validation_field() {
        let info = ErrorInfo::from(MoneyMateError::validation("balance", "must not be negative"));
        assert_eq!(info.field.as_deref(), Some("balance"));
        assert_eq!(info.message, "must not be negative");
        assert!(!info.requires_sign_in());
    }

    #[test]
    fn info_maps_statuses_to_friendly_messages() {
        let conflict = ErrorInfo::from(MoneyMateError::Http {
            status: 409,
            message: String::new(),
        });
        assert_eq!(conflict.message, "An account with this email already exists");

        let bad_email = ErrorInfo::from(MoneyMateError::Http {
            status: 400,
            message: "Email already registered".into(),
        });
        assert_eq!(bad_email.message, "An account with this email already exists");

        let gateway = ErrorInfo::from(MoneyMateError::Http {
            status: 502,
            message: String::new(),
        });
        assert_eq!(gateway.message, "Server error. Please try again later");
    }

    #[test]
    fn only_login_rejections_mention_credentials() {
        let login = ErrorInfo::from(MoneyMateError::Http {
            status: 401,
            message: INVALID_CREDENTIALS.into(),
        });
        assert_eq!(login.message, "Invalid email or password");

        let data_call = ErrorInfo::from(MoneyMateError::Http {
            status: 401,
            message: "Could not validate credentials".into(),
        });
        assert_eq!(data_call.message, "You are not authorized. Please sign in again");
        assert_eq!(data_call.status, Some(401));
    }

    #[test]
    fn auth_expired_requires_sign_in() {
        let info = ErrorInfo::from(MoneyMateError::AuthExpired);
        assert!(info.requires_sign_in());
        assert_eq!(info.status, Some(401));
    }

    #[test]
    fn network_error_keeps_source() {
        use std::error::Error as _;
        let err = MoneyMateError::network("connection refused", std::io::Error::other("refused"));
        assert!(err.source().is_some());
    }
}
