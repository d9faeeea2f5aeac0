// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP-backed implementations of the `moneymate_core` repository traits.
//!
//! Each repository borrows a shared [`AuthenticatedClient`](crate::http::AuthenticatedClient),
//! maps its request input to a wire DTO, and maps the response DTO back to a
//! domain entity. Every failure leaves as an `Outcome`.

pub mod analytics;
pub mod auth;
pub mod category;
pub mod planning;
pub mod transaction;
pub mod user;
pub mod wallet;

pub use analytics::{HttpAnalyticsRepository, HttpFinancialSummaryRepository};
pub use auth::HttpAuthRepository;
pub use category::{HttpCategoryLimitRepository, HttpCategoryRepository, HttpTagRepository};
pub use planning::{HttpBudgetRepository, HttpGoalRepository, HttpSavingsGoalRepository};
pub use transaction::HttpTransactionRepository;
pub use user::HttpUserRepository;
pub use wallet::HttpWalletRepository;
