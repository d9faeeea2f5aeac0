// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire DTOs for the MoneyMate backend.
//!
//! Response DTOs convert into domain entities with `From`, and back, so
//! fixtures and tests can build wire bodies from domain values. Request
//! DTOs are built from the validated inputs in `moneymate_core::model`.

pub mod analytics;
pub mod category;
pub mod codec;
pub mod planning;
pub mod transaction;
pub mod user;
pub mod wallet;

pub use analytics::{
    AverageSpendingDto, CategoryComparisonDto, FinancialSummaryDto, PeriodSummaryDto,
    SavingsTrendsDto, SpendingTrendsDto, TopCategoryDto,
};
pub use category::{
    CategoryCreateRequest, CategoryDto, CategoryLimitDto, CategoryLimitRequest,
    CategoryLimitSettingDto, TagCreateRequest, TagDto,
};
pub use planning::{
    BudgetDto, BudgetUpdateRequest, GoalCreateRequest, GoalDto, GoalUpdateRequest,
    SavingsGoalDto, SavingsGoalRequest,
};
pub use transaction::{
    TransactionCreateRequest, TransactionDto, TransferRequest, TransferResponseDto,
};
pub use user::{RefreshRequest, RegisterRequest, TokenResponse, UserDto, UserUpdateRequest};
pub use wallet::{
    BalanceBreakdownDto, TotalBalanceDto, WalletCreateRequest, WalletDto, WalletUpdateRequest,
};
