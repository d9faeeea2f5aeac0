// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Budget, goal and monthly savings payloads.

use chrono::{DateTime, NaiveDate, Utc};
use moneymate_core::model::{Budget, BudgetUpdate, Goal, GoalUpdate, NewGoal, SavingsGoal};
use moneymate_core::{BudgetId, GoalId, SavingsGoalId, WalletId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::codec;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetDto {
    pub id: BudgetId,
    pub month: u32,
    pub year: i32,
    #[serde(with = "codec::amount")]
    pub monthly_limit: Decimal,
    #[serde(with = "codec::amount")]
    pub daily_limit: Decimal,
    #[serde(with = "codec::amount")]
    pub monthly_spent: Decimal,
    #[serde(with = "codec::amount")]
    pub daily_spent: Decimal,
    pub last_updated_date: NaiveDate,
    #[serde(with = "codec::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl From<BudgetDto> for Budget {
    fn from(dto: BudgetDto) -> Self {
        Self {
            id: dto.id,
            month: dto.month,
            year: dto.year,
            monthly_limit: dto.monthly_limit,
            daily_limit: dto.daily_limit,
            monthly_spent: dto.monthly_spent,
            daily_spent: dto.daily_spent,
            last_updated_date: dto.last_updated_date,
            created_at: dto.created_at,
        }
    }
}

impl From<Budget> for BudgetDto {
    fn from(budget: Budget) -> Self {
        Self {
            id: budget.id,
            month: budget.month,
            year: budget.year,
            monthly_limit: budget.monthly_limit,
            daily_limit: budget.daily_limit,
            monthly_spent: budget.monthly_spent,
            daily_spent: budget.daily_spent,
            last_updated_date: budget.last_updated_date,
            created_at: budget.created_at,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct BudgetUpdateRequest {
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "codec::opt_amount::serialize"
    )]
    pub monthly_limit: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "codec::opt_amount::serialize"
    )]
    pub daily_limit: Option<Decimal>,
}

impl From<BudgetUpdate> for BudgetUpdateRequest {
    fn from(update: BudgetUpdate) -> Self {
        Self {
            monthly_limit: update.monthly_limit,
            daily_limit: update.daily_limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalDto {
    pub id: GoalId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(with = "codec::amount")]
    pub goal_amount: Decimal,
    #[serde(with = "codec::amount")]
    pub amount_saved: Decimal,
    pub wallet_id: WalletId,
    pub currency: String,
}

impl From<GoalDto> for Goal {
    fn from(dto: GoalDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            image: dto.image,
            deadline: dto.deadline,
            goal_amount: dto.goal_amount,
            amount_saved: dto.amount_saved,
            wallet_id: dto.wallet_id,
            currency: dto.currency,
        }
    }
}

impl From<Goal> for GoalDto {
    fn from(goal: Goal) -> Self {
        Self {
            id: goal.id,
            title: goal.title,
            description: goal.description,
            image: goal.image,
            deadline: goal.deadline,
            goal_amount: goal.goal_amount,
            amount_saved: goal.amount_saved,
            wallet_id: goal.wallet_id,
            currency: goal.currency,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GoalCreateRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(with = "codec::amount")]
    pub goal_amount: Decimal,
    pub currency: String,
}

impl From<NewGoal> for GoalCreateRequest {
    fn from(goal: NewGoal) -> Self {
        Self {
            title: goal.title,
            description: goal.description,
            deadline: goal.deadline,
            goal_amount: goal.goal_amount,
            currency: goal.currency,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct GoalUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "codec::opt_amount::serialize"
    )]
    pub goal_amount: Option<Decimal>,
}

impl From<GoalUpdate> for GoalUpdateRequest {
    fn from(update: GoalUpdate) -> Self {
        Self {
            title: update.title,
            description: update.description,
            image: update.image,
            deadline: update.deadline,
            goal_amount: update.goal_amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoalDto {
    pub id: SavingsGoalId,
    pub month: u32,
    pub year: i32,
    #[serde(with = "codec::amount")]
    pub target_amount: Decimal,
    #[serde(with = "codec::amount")]
    pub current_saved: Decimal,
}

impl From<SavingsGoalDto> for SavingsGoal {
    fn from(dto: SavingsGoalDto) -> Self {
        Self {
            id: dto.id,
            month: dto.month,
            year: dto.year,
            target_amount: dto.target_amount,
            current_saved: dto.current_saved,
        }
    }
}

impl From<SavingsGoal> for SavingsGoalDto {
    fn from(goal: SavingsGoal) -> Self {
        Self {
            id: goal.id,
            month: goal.month,
            year: goal.year,
            target_amount: goal.target_amount,
            current_saved: goal.current_saved,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SavingsGoalRequest {
    #[serde(with = "codec::amount")]
    pub target_amount: Decimal,
}
