// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Screen view models.
//!
//! Each screen owns the use cases it needs and one [`StateHolder`](crate::state::StateHolder)
//! per observable action. Loads ignore repeat calls while in flight;
//! mutations always run and reload the affected list on success.

pub mod analytics;
pub mod categories;
pub mod planning;
pub mod session;
pub mod transactions;
pub mod wallets;

pub use analytics::{AnalyticsScreen, DEFAULT_TREND_MONTHS};
pub use categories::{CategoriesScreen, CategoryScope};
pub use planning::{BudgetScreen, GoalsScreen};
pub use session::{ProfileScreen, SignInScreen, SignUpScreen};
pub use transactions::{TransactionFilter, TransactionSummary, TransactionsScreen};
pub use wallets::WalletsScreen;
