// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seams between the MoneyMate layers.
//!
//! Every trait uses `#[async_trait]` so implementations can be held as
//! `Arc<dyn Trait>` and swapped for fakes in tests.

pub mod repository;
pub mod token_store;

pub use repository::{
    AnalyticsRepository, AuthRepository, BudgetRepository, CategoryLimitRepository,
    CategoryRepository, FinancialSummaryRepository, GoalRepository, SavingsGoalRepository,
    TagRepository, TransactionRepository, UserRepository, WalletRepository,
};
pub use token_store::{CredentialStream, TokenStore};
