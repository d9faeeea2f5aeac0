// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the MoneyMate client.
//!
//! This crate provides the error taxonomy, identifiers, domain entities,
//! client-side validation and the traits that separate the token store,
//! repository and use-case layers. Every other workspace crate builds on it.

pub mod derived;
pub mod error;
pub mod model;
pub mod traits;
pub mod types;
pub mod validation;

// Re-export key items at crate root for ergonomic imports.
pub use derived::BudgetHealth;
pub use error::{ErrorInfo, ErrorKind, INVALID_CREDENTIALS, MoneyMateError, Outcome};
pub use types::{
    BudgetId, CategoryId, Credentials, CredentialsUpdate, GoalId, SavingsGoalId, TagId, Token,
    TransactionId, UserId, WalletId,
};

pub use traits::{
    AnalyticsRepository, AuthRepository, BudgetRepository, CategoryLimitRepository,
    CategoryRepository, CredentialStream, FinancialSummaryRepository, GoalRepository,
    SavingsGoalRepository, TagRepository, TokenStore, TransactionRepository, UserRepository,
    WalletRepository,
};
