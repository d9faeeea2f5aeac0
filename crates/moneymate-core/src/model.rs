// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain entities and the validated inputs accepted by repositories.
//!
//! Entities are built from wire DTOs by the client crate and never mutated
//! afterwards. Relationships are carried as ids only. All money is
//! [`Decimal`].

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::types::{
    BudgetId, CategoryId, GoalId, SavingsGoalId, TagId, TransactionId, UserId, WalletId,
};

/// Kind of account a wallet represents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum WalletType {
    DebitCard,
    Cash,
    CreditCard,
    SavingAccount,
    Investment,
    Loan,
    Mortgage,
    Goal,
}

/// Direction of a transaction. Categories use the same vocabulary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Income,
    Expense,
    Transfer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub avatar_url: Option<String>,
    pub default_currency: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Wallet {
    pub id: WalletId,
    pub name: String,
    pub currency: String,
    pub wallet_type: WalletType,
    pub balance: Decimal,
    pub card_number: Option<String>,
    pub color: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// One wallet's contribution to the converted total balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceBreakdown {
    pub wallet_id: WalletId,
    pub wallet_name: String,
    pub wallet_type: WalletType,
    pub original_balance: Decimal,
    pub original_currency: String,
    pub converted_balance: Decimal,
    pub converted_currency: String,
    pub exchange_rate_used: Decimal,
}

/// Sum of all wallets converted to the user's default currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalBalance {
    pub total_balance: Decimal,
    pub currency: String,
    pub breakdown: Vec<BalanceBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub name: String,
    pub amount: Decimal,
    pub note: Option<String>,
    pub kind: TransactionType,
    pub transaction_date: NaiveDate,
    pub wallet_id: WalletId,
    pub category_id: CategoryId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub tags: Vec<String>,
    pub receipt_url: Option<String>,
}

/// Result of moving money between two wallets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferReceipt {
    pub message: String,
    pub source_transaction: Transaction,
    pub destination_transaction: Transaction,
    pub exchange_rate: Decimal,
    pub converted_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub kind: TransactionType,
    pub color: Option<String>,
    pub icon: Option<String>,
    /// `None` for built-in categories shared by all users.
    pub user_id: Option<UserId>,
}

/// Spending limits for the current month and day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Budget {
    pub id: BudgetId,
    pub month: u32,
    pub year: i32,
    pub monthly_limit: Decimal,
    pub daily_limit: Decimal,
    pub monthly_spent: Decimal,
    pub daily_spent: Decimal,
    pub last_updated_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Goal {
    pub id: GoalId,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub goal_amount: Decimal,
    pub amount_saved: Decimal,
    /// Backing wallet of type [`WalletType::Goal`] created by the backend.
    pub wallet_id: WalletId,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub user_id: Option<UserId>,
}

/// Monthly savings target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavingsGoal {
    pub id: SavingsGoalId,
    pub month: u32,
    pub year: i32,
    pub target_amount: Decimal,
    pub current_saved: Decimal,
}

/// Per-category spending limit with this month's spending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryLimit {
    pub category_id: CategoryId,
    pub category_name: String,
    pub category_color: Option<String>,
    pub category_icon: Option<String>,
    pub monthly_limit: Decimal,
    pub monthly_spent: Decimal,
}

/// Stored limit returned after setting one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryLimitSetting {
    pub id: i64,
    pub category_id: CategoryId,
    pub user_id: UserId,
    pub monthly_limit: Decimal,
}

/// Money moved under one category during a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category_id: CategoryId,
    pub category_name: String,
    pub kind: TransactionType,
    pub total_amount: Decimal,
    pub transaction_count: u32,
}

/// Income and expenses per category between two dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodSummary {
    pub expenses: Vec<CategoryTotal>,
    pub incomes: Vec<CategoryTotal>,
    pub total_expenses: Decimal,
    pub total_incomes: Decimal,
    pub net_flow: Decimal,
}

/// One category's spending in a month against the month before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryComparison {
    pub category_id: CategoryId,
    pub category_name: String,
    pub current_month_amount: Decimal,
    pub previous_month_amount: Decimal,
    pub difference: Decimal,
    pub percentage_change: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyFlow {
    pub year: i32,
    pub month: u32,
    pub total_spent: Decimal,
    pub total_income: Decimal,
    /// Short label such as `Mar 2025`.
    pub display_name: String,
}

/// Income against expenses over the last few months, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpendingTrends {
    pub months: Vec<MonthlyFlow>,
    pub total_spent: Decimal,
    pub total_income: Decimal,
    pub net_flow: Decimal,
    pub average_monthly_spent: Decimal,
    pub months_analyzed: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopCategory {
    pub category_id: CategoryId,
    pub category_name: String,
    pub total_amount: Decimal,
}

/// Window the average-spending report divides by.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SpendingPeriod {
    Day,
    Month,
    Year,
}

/// Per-category spending over the past year.
///
/// The averages the backend includes depend on the requested
/// [`SpendingPeriod`]: `Year` carries neither, `Month` the monthly one and
/// `Day` both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AverageSpending {
    pub category_id: CategoryId,
    pub category_name: String,
    pub period: SpendingPeriod,
    pub total_period_spent: Decimal,
    pub transactions: u32,
    pub average_monthly_spending: Option<Decimal>,
    pub average_daily_spending: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySavings {
    pub year: i32,
    pub month: u32,
    pub display_name: String,
    pub saved_amount: Decimal,
    pub target_amount: Decimal,
    pub achievement_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavingsTrends {
    pub months: Vec<MonthlySavings>,
    pub months_analyzed: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Month-to-date income, spending and savings kept by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinancialSummary {
    pub id: i64,
    pub month: u32,
    pub year: i32,
    pub total_income: Decimal,
    pub total_spent: Decimal,
    pub total_saved: Decimal,
    pub created_at: DateTime<Utc>,
}

// --- Validated inputs ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUp {
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub default_currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub default_currency: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWallet {
    pub name: String,
    pub currency: String,
    pub wallet_type: WalletType,
    pub balance: Decimal,
    pub card_number: Option<String>,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletUpdate {
    pub name: Option<String>,
    pub currency: Option<String>,
    pub wallet_type: Option<WalletType>,
    pub balance: Option<Decimal>,
    pub card_number: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub name: String,
    pub amount: Decimal,
    pub note: Option<String>,
    pub kind: TransactionType,
    pub transaction_date: NaiveDate,
    pub wallet_id: WalletId,
    pub category_id: CategoryId,
    pub tag_ids: Vec<TagId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransfer {
    pub source_wallet_id: WalletId,
    pub destination_wallet_id: WalletId,
    pub amount: Decimal,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub kind: TransactionType,
    pub color: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetUpdate {
    pub monthly_limit: Option<Decimal>,
    pub daily_limit: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGoal {
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub goal_amount: Decimal,
    pub currency: String,
}

/// Inclusive date range for period reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// An image ready to be sent as the user's avatar.
#[derive(Clone, PartialEq, Eq)]
pub struct AvatarUpload {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for AvatarUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvatarUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub goal_amount: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn wallet_type_uses_backend_spelling() {
        assert_eq!(WalletType::DebitCard.to_string(), "debit_card");
        assert_eq!(
            WalletType::from_str("saving_account").unwrap(),
            WalletType::SavingAccount
        );
        assert_eq!(
            serde_json::to_string(&WalletType::CreditCard).unwrap(),
            "\"credit_card\""
        );
    }

    #[test]
    fn spending_period_is_a_query_value() {
        assert_eq!(SpendingPeriod::Day.to_string(), "day");
        assert_eq!(SpendingPeriod::from_str("year").unwrap(), SpendingPeriod::Year);
    }

    #[test]
    fn avatar_debug_hides_the_bytes() {
        let upload = AvatarUpload {
            file_name: "me.png".into(),
            content_type: "image/png",
            bytes: vec![0; 2048],
        };
        let shown = format!("{upload:?}");
        assert!(shown.contains("len: 2048"));
        assert!(!shown.contains("[0, 0"));
    }

    #[test]
    fn transaction_type_parses_lowercase() {
        assert_eq!(
            TransactionType::from_str("expense").unwrap(),
            TransactionType::Expense
        );
        assert!(TransactionType::from_str("refund").is_err());
    }
}
