// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Auth and user payloads.

use chrono::{DateTime, NaiveDate, Utc};
use moneymate_core::model::{SignUp, User, UserUpdate};
use moneymate_core::{Token, UserId};
use serde::{Deserialize, Serialize};

use super::codec;

/// Body of `POST /auth/login` and `POST /auth/refresh`.
///
/// The mobile client spoke camelCase, the backend snake_case; both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    #[serde(alias = "accessToken")]
    pub access_token: String,
    #[serde(default, alias = "refreshToken")]
    pub refresh_token: Option<String>,
    #[serde(default, alias = "tokenType")]
    pub token_type: Option<String>,
    #[serde(default, alias = "userId", deserialize_with = "codec::flexible_id::deserialize")]
    pub user_id: Option<String>,
}

impl TokenResponse {
    pub fn access(&self) -> Token {
        Token::new(self.access_token.clone())
    }

    /// Refresh token, if the backend rotated one.
    pub fn refresh(&self) -> Option<Token> {
        Token::from_stored(self.refresh_token.clone())
    }
}

#[derive(Debug, Serialize)]
pub struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub default_currency: String,
    pub is_active: bool,
    #[serde(with = "codec::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            email: dto.email,
            full_name: dto.full_name,
            phone_number: dto.phone_number,
            date_of_birth: dto.date_of_birth,
            avatar_url: dto.avatar_url,
            default_currency: dto.default_currency,
            is_active: dto.is_active,
            created_at: dto.created_at,
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            phone_number: user.phone_number,
            date_of_birth: user.date_of_birth,
            avatar_url: user.avatar_url,
            default_currency: user.default_currency,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    pub default_currency: String,
}

impl From<SignUp> for RegisterRequest {
    fn from(sign_up: SignUp) -> Self {
        Self {
            email: sign_up.email,
            password: sign_up.password,
            full_name: sign_up.full_name,
            phone_number: sign_up.phone_number,
            date_of_birth: sign_up.date_of_birth,
            default_currency: sign_up.default_currency,
        }
    }
}

/// Only supplied fields are sent; the backend leaves the rest untouched.
#[derive(Debug, Default, Serialize)]
pub struct UserUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl From<UserUpdate> for UserUpdateRequest {
    fn from(update: UserUpdate) -> Self {
        Self {
            email: update.email,
            full_name: update.full_name,
            phone_number: update.phone_number,
            date_of_birth: update.date_of_birth,
            default_currency: update.default_currency,
            password: update.password,
        }
    }
}
