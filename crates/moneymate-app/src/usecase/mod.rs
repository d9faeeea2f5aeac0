// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One struct per user action, each delegating to exactly one repository
//! method.
//!
//! Actions fed by free-form entry take a form from
//! `moneymate_core::validation` and reject bad input with
//! `MoneyMateError::Validation` before the repository is touched. The rest
//! are generated by [`delegating_use_case!`].

/// Generates a use case that forwards its arguments to one repository method.
macro_rules! delegating_use_case {
    (
        $(#[$meta:meta])*
        $name:ident => $repo:ident :: $method:ident ( $($arg:ident : $ty:ty),* $(,)? ) -> $out:ty
    ) => {
        $(#[$meta])*
        pub struct $name {
            repo: std::sync::Arc<dyn $repo>,
        }

        impl $name {
            pub fn new(repo: std::sync::Arc<dyn $repo>) -> Self {
                Self { repo }
            }

            pub async fn execute(&self, $($arg: $ty),*) -> moneymate_core::Outcome<$out> {
                self.repo.$method($($arg),*).await
            }
        }
    };
}

pub mod analytics;
pub mod auth;
pub mod category;
pub mod planning;
pub mod transaction;
pub mod wallet;

pub use analytics::{
    GetAverageSpending, GetCategorySummary, GetFinancialSummary, GetMonthlyComparison,
    GetSavingsTrends, GetSpendingTrends, GetTopCategories,
};
pub use auth::{
    CurrentSession, DeleteAvatar, GetCurrentUser, Session, SignIn, SignOut, SignUp,
    UpdateProfile, UploadAvatar,
};
pub use category::{
    CreateCategory, CreateTag, DeleteCategory, DeleteCategoryLimit, DeleteTag, GetCategories,
    GetCategoryLimits, GetExpenseCategories, GetIncomeCategories, GetTags, SetCategoryLimit,
};
pub use planning::{
    CreateGoal, DeleteGoal, GetCurrentBudget, GetGoal, GetGoals, GetSavingsGoal, UpdateBudget,
    UpdateGoal, UpdateSavingsGoal,
};
pub use transaction::{
    CreateTransaction, CreateTransfer, DeleteTransaction, GetTransactions,
    GetTransactionsByTag, GetWalletTransactions,
};
pub use wallet::{
    CreateWallet, DeleteWallet, GetTotalBalance, GetWallet, GetWallets, UpdateWallet,
};

use moneymate_core::MoneyMateError;

/// Log a rejected form before handing the error back.
fn rejected(action: &'static str, err: MoneyMateError) -> MoneyMateError {
    if let MoneyMateError::Validation { field, .. } = &err {
        tracing::debug!(action, field = %field, "input rejected");
    }
    err
}
