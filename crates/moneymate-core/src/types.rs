// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identifiers and credential types shared across the MoneyMate layers.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }
    };
}

id_type!(
    /// Backend identifier of a user account.
    UserId
);
id_type!(
    /// Backend identifier of a wallet.
    WalletId
);
id_type!(
    /// Backend identifier of a transaction.
    TransactionId
);
id_type!(
    /// Backend identifier of a category.
    CategoryId
);
id_type!(
    /// Backend identifier of a monthly budget.
    BudgetId
);
id_type!(
    /// Backend identifier of a savings goal (long-term target).
    GoalId
);
id_type!(
    /// Backend identifier of a tag.
    TagId
);
id_type!(
    /// Backend identifier of the monthly savings target.
    SavingsGoalId
);

/// A bearer or refresh token.
///
/// The inner string is wiped on drop and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Builds a token from a persisted value; empty strings count as absent.
    pub fn from_stored(value: Option<String>) -> Option<Self> {
        value.filter(|v| !v.is_empty()).map(Self)
    }

    /// Borrow the raw token for use in a header or request body.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token([REDACTED])")
    }
}

/// Snapshot of the session held by the token store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub access_token: Option<Token>,
    pub refresh_token: Option<Token>,
    pub user_id: Option<String>,
}

impl Credentials {
    /// A session is considered active while an access token is held.
    pub fn is_signed_in(&self) -> bool {
        self.access_token.is_some()
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none() && self.user_id.is_none()
    }
}

/// Partial update applied by `TokenStore::write`. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialsUpdate {
    pub access_token: Option<Token>,
    pub refresh_token: Option<Token>,
    pub user_id: Option<String>,
}

impl CredentialsUpdate {
    /// Full sign-in payload.
    pub fn signed_in(access: Token, refresh: Option<Token>, user_id: Option<String>) -> Self {
        Self {
            access_token: Some(access),
            refresh_token: refresh,
            user_id,
        }
    }

    /// Token rotation after a successful refresh; the user id is kept.
    pub fn rotated(access: Token, refresh: Option<Token>) -> Self {
        Self {
            access_token: Some(access),
            refresh_token: refresh,
            user_id: None,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none() && self.user_id.is_none()
    }

    /// Merge the supplied fields into `creds`. An empty value clears its field.
    pub fn apply_to(&self, creds: &mut Credentials) {
        if let Some(access) = &self.access_token {
            creds.access_token = Some(access.clone()).filter(|t| !t.expose().is_empty());
        }
        if let Some(refresh) = &self.refresh_token {
            creds.refresh_token = Some(refresh.clone()).filter(|t| !t.expose().is_empty());
        }
        if let Some(user_id) = &self.user_id {
            creds.user_id = Some(user_id.clone()).filter(|id| !id.is_empty());
        }
    }
}
