// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Budget, goals and the monthly savings target.

use std::sync::Arc;

use async_trait::async_trait;
use moneymate_core::model::{Budget, BudgetUpdate, Goal, GoalUpdate, NewGoal, SavingsGoal};
use moneymate_core::{BudgetRepository, GoalId, GoalRepository, Outcome, SavingsGoalRepository};
use rust_decimal::Decimal;

use crate::dto::{
    BudgetDto, BudgetUpdateRequest, GoalCreateRequest, GoalDto, GoalUpdateRequest,
    SavingsGoalDto, SavingsGoalRequest,
};
use crate::http::{ApiRequest, AuthenticatedClient};

pub struct HttpBudgetRepository {
    client: Arc<AuthenticatedClient>,
}

impl HttpBudgetRepository {
    pub fn new(client: Arc<AuthenticatedClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BudgetRepository for HttpBudgetRepository {
    async fn get_current_budget(&self) -> Outcome<Budget> {
        let dto: BudgetDto = self
            .client
            .fetch(ApiRequest::get("/api/budget/current"))
            .await?;
        Ok(dto.into())
    }

    async fn update_current_budget(&self, update: BudgetUpdate) -> Outcome<Budget> {
        let request =
            ApiRequest::put("/api/budget/current").json(&BudgetUpdateRequest::from(update))?;
        let dto: BudgetDto = self.client.fetch(request).await?;
        Ok(dto.into())
    }
}

pub struct HttpGoalRepository {
    client: Arc<AuthenticatedClient>,
}

impl HttpGoalRepository {
    pub fn new(client: Arc<AuthenticatedClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GoalRepository for HttpGoalRepository {
    async fn get_goals(&self) -> Outcome<Vec<Goal>> {
        let dtos: Vec<GoalDto> = self.client.fetch(ApiRequest::get("/api/goals")).await?;
        Ok(dtos.into_iter().map(Goal::from).collect())
    }

    async fn get_goal(&self, id: GoalId) -> Outcome<Goal> {
        let dto: GoalDto = self
            .client
            .fetch(ApiRequest::get(format!("/api/goals/{id}")))
            .await?;
        Ok(dto.into())
    }

    async fn create_goal(&self, goal: NewGoal) -> Outcome<Goal> {
        let request = ApiRequest::post("/api/goals").json(&GoalCreateRequest::from(goal))?;
        let dto: GoalDto = self.client.fetch(request).await?;
        Ok(dto.into())
    }

    async fn update_goal(&self, id: GoalId, update: GoalUpdate) -> Outcome<Goal> {
        let request =
            ApiRequest::put(format!("/api/goals/{id}")).json(&GoalUpdateRequest::from(update))?;
        let dto: GoalDto = self.client.fetch(request).await?;
        Ok(dto.into())
    }

    async fn delete_goal(&self, id: GoalId) -> Outcome<()> {
        self.client
            .execute(ApiRequest::delete(format!("/api/goals/{id}")))
            .await
    }
}

pub struct HttpSavingsGoalRepository {
    client: Arc<AuthenticatedClient>,
}

impl HttpSavingsGoalRepository {
    pub fn new(client: Arc<AuthenticatedClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SavingsGoalRepository for HttpSavingsGoalRepository {
    async fn get_current_savings_goal(&self) -> Outcome<SavingsGoal> {
        let dto: SavingsGoalDto = self
            .client
            .fetch(ApiRequest::get("/api/savings_goal/current"))
            .await?;
        Ok(dto.into())
    }

    async fn update_current_savings_goal(&self, target_amount: Decimal) -> Outcome<SavingsGoal> {
        let request = ApiRequest::put("/api/savings_goal/current")
            .json(&SavingsGoalRequest { target_amount })?;
        let dto: SavingsGoalDto = self.client.fetch(request).await?;
        Ok(dto.into())
    }
}
