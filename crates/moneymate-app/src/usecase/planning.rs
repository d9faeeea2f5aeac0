// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Budget, goals and the monthly savings target.

use std::sync::Arc;

use moneymate_core::model::{Budget, Goal, SavingsGoal};
use moneymate_core::validation::{self, BudgetForm, GoalForm, GoalUpdateForm};
use moneymate_core::{BudgetRepository, GoalId, GoalRepository, Outcome, SavingsGoalRepository};

use super::rejected;

delegating_use_case!(GetCurrentBudget => BudgetRepository::get_current_budget() -> Budget);

pub struct UpdateBudget {
    repo: Arc<dyn BudgetRepository>,
}

impl UpdateBudget {
    pub fn new(repo: Arc<dyn BudgetRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, form: &BudgetForm) -> Outcome<Budget> {
        let update = form.validate().map_err(|e| rejected("update_budget", e))?;
        self.repo.update_current_budget(update).await
    }
}

delegating_use_case!(GetGoals => GoalRepository::get_goals() -> Vec<Goal>);
delegating_use_case!(GetGoal => GoalRepository::get_goal(id: GoalId) -> Goal);
delegating_use_case!(DeleteGoal => GoalRepository::delete_goal(id: GoalId) -> ());

pub struct CreateGoal {
    repo: Arc<dyn GoalRepository>,
}

impl CreateGoal {
    pub fn new(repo: Arc<dyn GoalRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, form: &GoalForm) -> Outcome<Goal> {
        let goal = form.validate().map_err(|e| rejected("create_goal", e))?;
        self.repo.create_goal(goal).await
    }
}

pub struct UpdateGoal {
    repo: Arc<dyn GoalRepository>,
}

impl UpdateGoal {
    pub fn new(repo: Arc<dyn GoalRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: GoalId, form: &GoalUpdateForm) -> Outcome<Goal> {
        let update = form.validate().map_err(|e| rejected("update_goal", e))?;
        self.repo.update_goal(id, update).await
    }
}

delegating_use_case!(
    GetSavingsGoal => SavingsGoalRepository::get_current_savings_goal() -> SavingsGoal
);

pub struct UpdateSavingsGoal {
    repo: Arc<dyn SavingsGoalRepository>,
}

impl UpdateSavingsGoal {
    pub fn new(repo: Arc<dyn SavingsGoalRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, target_amount: &str) -> Outcome<SavingsGoal> {
        let target = validation::non_negative_amount("target_amount", target_amount)
            .map_err(|e| rejected("update_savings_goal", e))?;
        self.repo.update_current_savings_goal(target).await
    }
}
