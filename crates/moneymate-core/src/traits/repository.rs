// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One repository per backend resource.
//!
//! Repositories are the outermost layer allowed to see transport details.
//! Every method returns an [`Outcome`]; no failure escapes any other way.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::Outcome;
use crate::model::{
    AverageSpending, AvatarUpload, Budget, BudgetUpdate, Category, CategoryComparison,
    CategoryLimit, CategoryLimitSetting, DateRange, FinancialSummary, Goal, GoalUpdate,
    NewCategory, NewGoal, NewTransaction, NewTransfer, NewWallet, PeriodSummary, SavingsGoal,
    SavingsTrends, SignUp, SpendingPeriod, SpendingTrends, Tag, TopCategory, TotalBalance,
    Transaction, TransferReceipt, User, UserUpdate, Wallet, WalletUpdate,
};
use crate::types::{CategoryId, Credentials, GoalId, TagId, TransactionId, WalletId};

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn sign_up(&self, request: SignUp) -> Outcome<User>;

    /// Exchanges email and password for tokens and stores them.
    async fn sign_in(&self, email: &str, password: &str) -> Outcome<Credentials>;

    /// Ends the session. Local credentials are cleared even if the backend call fails.
    async fn sign_out(&self) -> Outcome<()>;

    fn is_signed_in(&self) -> bool;

    fn current_user_id(&self) -> Option<String>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_current_user(&self) -> Outcome<User>;
    async fn update_user(&self, update: UserUpdate) -> Outcome<User>;
    async fn upload_avatar(&self, avatar: AvatarUpload) -> Outcome<User>;
    async fn delete_avatar(&self) -> Outcome<User>;
}

#[async_trait]
pub trait WalletRepository: Send + Sync {
    async fn get_wallets(&self) -> Outcome<Vec<Wallet>>;
    async fn get_wallet(&self, id: WalletId) -> Outcome<Wallet>;
    async fn create_wallet(&self, wallet: NewWallet) -> Outcome<Wallet>;
    async fn update_wallet(&self, id: WalletId, update: WalletUpdate) -> Outcome<Wallet>;
    async fn delete_wallet(&self, id: WalletId) -> Outcome<()>;
    async fn get_total_balance(&self) -> Outcome<TotalBalance>;
}

#[async_trait]
pub trait TransactionRepository: Send + Sync {
    async fn get_transactions(&self) -> Outcome<Vec<Transaction>>;
    async fn get_wallet_transactions(&self, wallet: WalletId) -> Outcome<Vec<Transaction>>;
    async fn get_transactions_by_tag(&self, tag: TagId) -> Outcome<Vec<Transaction>>;
    async fn create_transaction(&self, transaction: NewTransaction) -> Outcome<Transaction>;
    async fn delete_transaction(&self, id: TransactionId) -> Outcome<()>;
    async fn create_transfer(&self, transfer: NewTransfer) -> Outcome<TransferReceipt>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_categories(&self) -> Outcome<Vec<Category>>;
    async fn get_income_categories(&self) -> Outcome<Vec<Category>>;
    async fn get_expense_categories(&self) -> Outcome<Vec<Category>>;
    async fn create_category(&self, category: NewCategory) -> Outcome<Category>;
    async fn delete_category(&self, id: CategoryId) -> Outcome<()>;
}

#[async_trait]
pub trait BudgetRepository: Send + Sync {
    async fn get_current_budget(&self) -> Outcome<Budget>;
    async fn update_current_budget(&self, update: BudgetUpdate) -> Outcome<Budget>;
}

#[async_trait]
pub trait GoalRepository: Send + Sync {
    async fn get_goals(&self) -> Outcome<Vec<Goal>>;
    async fn get_goal(&self, id: GoalId) -> Outcome<Goal>;
    async fn create_goal(&self, goal: NewGoal) -> Outcome<Goal>;
    async fn update_goal(&self, id: GoalId, update: GoalUpdate) -> Outcome<Goal>;
    async fn delete_goal(&self, id: GoalId) -> Outcome<()>;
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn get_tags(&self) -> Outcome<Vec<Tag>>;
    async fn create_tag(&self, name: &str) -> Outcome<Tag>;
    async fn delete_tag(&self, id: TagId) -> Outcome<()>;
}

#[async_trait]
pub trait SavingsGoalRepository: Send + Sync {
    async fn get_current_savings_goal(&self) -> Outcome<SavingsGoal>;
    async fn update_current_savings_goal(&self, target_amount: Decimal) -> Outcome<SavingsGoal>;
}

#[async_trait]
pub trait CategoryLimitRepository: Send + Sync {
    async fn get_category_limits(&self) -> Outcome<Vec<CategoryLimit>>;
    async fn set_category_limit(
        &self,
        category: CategoryId,
        monthly_limit: Decimal,
    ) -> Outcome<CategoryLimitSetting>;
    async fn delete_category_limit(&self, category: CategoryId) -> Outcome<()>;
}

/// Read-only reports computed by the backend from the user's transactions.
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    async fn get_category_summary(&self, range: DateRange) -> Outcome<PeriodSummary>;

    /// Compares `month` (any day in it) with the month before.
    async fn get_monthly_comparison(&self, month: NaiveDate) -> Outcome<Vec<CategoryComparison>>;

    async fn get_spending_trends(&self, months: u32) -> Outcome<SpendingTrends>;
    async fn get_top_categories(&self) -> Outcome<Vec<TopCategory>>;
    async fn get_average_spending(&self, period: SpendingPeriod) -> Outcome<Vec<AverageSpending>>;
    async fn get_savings_trends(&self, months: u32) -> Outcome<SavingsTrends>;
}

#[async_trait]
pub trait FinancialSummaryRepository: Send + Sync {
    /// Summary for the current month. The backend creates an empty one on first access.
    async fn get_current_summary(&self) -> Outcome<FinancialSummary>;
}
