// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Budget and goals screens.

use moneymate_core::model::{Budget, CategoryLimit, CategoryLimitSetting, Goal, SavingsGoal};
use moneymate_core::validation::{BudgetForm, GoalForm, GoalUpdateForm};
use moneymate_core::{BudgetHealth, CategoryId, GoalId};

use crate::container::Repositories;
use crate::state::{Change, StateHolder, ViewState};
use crate::usecase::{
    CreateGoal, DeleteCategoryLimit, DeleteGoal, GetCategoryLimits, GetCurrentBudget, GetGoals,
    GetSavingsGoal, SetCategoryLimit, UpdateBudget, UpdateGoal, UpdateSavingsGoal,
};

/// Current month's budget with its per-category limits.
pub struct BudgetScreen {
    get_budget: GetCurrentBudget,
    update_budget: UpdateBudget,
    get_limits: GetCategoryLimits,
    set_limit: SetCategoryLimit,
    delete_limit: DeleteCategoryLimit,
    budget: StateHolder<Budget>,
    limits: StateHolder<Vec<CategoryLimit>>,
    save: StateHolder<Budget>,
    limit_change: StateHolder<Change<CategoryLimitSetting>>,
}

impl BudgetScreen {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            get_budget: GetCurrentBudget::new(repos.budget.clone()),
            update_budget: UpdateBudget::new(repos.budget.clone()),
            get_limits: GetCategoryLimits::new(repos.limits.clone()),
            set_limit: SetCategoryLimit::new(repos.limits.clone()),
            delete_limit: DeleteCategoryLimit::new(repos.limits.clone()),
            budget: StateHolder::loader("budget"),
            limits: StateHolder::loader("category_limits"),
            save: StateHolder::mutation("budget_save"),
            limit_change: StateHolder::mutation("category_limit_change"),
        }
    }

    pub fn budget(&self) -> &StateHolder<Budget> {
        &self.budget
    }

    pub fn limits(&self) -> &StateHolder<Vec<CategoryLimit>> {
        &self.limits
    }

    pub fn save_state(&self) -> &StateHolder<Budget> {
        &self.save
    }

    pub fn limit_change(&self) -> &StateHolder<Change<CategoryLimitSetting>> {
        &self.limit_change
    }

    /// Health of the month so far, once a budget has loaded.
    pub fn health(&self) -> Option<BudgetHealth> {
        self.budget.last_loaded().map(|b| b.monthly_health())
    }

    pub async fn load(&self) -> (ViewState<Budget>, ViewState<Vec<CategoryLimit>>) {
        tokio::join!(
            self.budget.run(self.get_budget.execute()),
            self.limits.run(self.get_limits.execute()),
        )
    }

    pub async fn update(&self, form: &BudgetForm) -> ViewState<Budget> {
        let state = self.save.run(self.update_budget.execute(form)).await;
        if matches!(state, ViewState::Success(_)) {
            self.budget.reload(self.get_budget.execute()).await;
        }
        state
    }

    pub async fn set_limit(
        &self,
        category: CategoryId,
        monthly_limit: &str,
    ) -> ViewState<Change<CategoryLimitSetting>> {
        let state = self
            .limit_change
            .run(async {
                self.set_limit
                    .execute(category, monthly_limit)
                    .await
                    .map(Change::Saved)
            })
            .await;
        self.reload_limits_after(&state).await;
        state
    }

    pub async fn remove_limit(&self, category: CategoryId) -> ViewState<Change<CategoryLimitSetting>> {
        let state = self
            .limit_change
            .run(async {
                self.delete_limit
                    .execute(category)
                    .await
                    .map(|()| Change::Removed)
            })
            .await;
        self.reload_limits_after(&state).await;
        state
    }

    async fn reload_limits_after<T>(&self, state: &ViewState<T>) {
        if matches!(state, ViewState::Success(_)) {
            self.limits.reload(self.get_limits.execute()).await;
        }
    }
}

/// Long-term goals and the monthly savings target.
pub struct GoalsScreen {
    get_goals: GetGoals,
    create: CreateGoal,
    update: UpdateGoal,
    delete: DeleteGoal,
    get_savings: GetSavingsGoal,
    update_savings: UpdateSavingsGoal,
    goals: StateHolder<Vec<Goal>>,
    savings: StateHolder<SavingsGoal>,
    change: StateHolder<Change<Goal>>,
    savings_update: StateHolder<SavingsGoal>,
}

impl GoalsScreen {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            get_goals: GetGoals::new(repos.goals.clone()),
            create: CreateGoal::new(repos.goals.clone()),
            update: UpdateGoal::new(repos.goals.clone()),
            delete: DeleteGoal::new(repos.goals.clone()),
            get_savings: GetSavingsGoal::new(repos.savings.clone()),
            update_savings: UpdateSavingsGoal::new(repos.savings.clone()),
            goals: StateHolder::loader("goals"),
            savings: StateHolder::loader("savings_goal"),
            change: StateHolder::mutation("goal_change"),
            savings_update: StateHolder::mutation("savings_goal_update"),
        }
    }

    pub fn goals(&self) -> &StateHolder<Vec<Goal>> {
        &self.goals
    }

    pub fn savings(&self) -> &StateHolder<SavingsGoal> {
        &self.savings
    }

    pub fn change(&self) -> &StateHolder<Change<Goal>> {
        &self.change
    }

    pub fn savings_update(&self) -> &StateHolder<SavingsGoal> {
        &self.savings_update
    }

    pub async fn load(&self) -> (ViewState<Vec<Goal>>, ViewState<SavingsGoal>) {
        tokio::join!(
            self.goals.run(self.get_goals.execute()),
            self.savings.run(self.get_savings.execute()),
        )
    }

    pub async fn create(&self, form: &GoalForm) -> ViewState<Change<Goal>> {
        let state = self
            .change
            .run(async { self.create.execute(form).await.map(Change::Saved) })
            .await;
        self.reload_goals_after(&state).await;
        state
    }

    pub async fn update(&self, id: GoalId, form: &GoalUpdateForm) -> ViewState<Change<Goal>> {
        let state = self
            .change
            .run(async { self.update.execute(id, form).await.map(Change::Saved) })
            .await;
        self.reload_goals_after(&state).await;
        state
    }

    pub async fn delete(&self, id: GoalId) -> ViewState<Change<Goal>> {
        let state = self
            .change
            .run(async { self.delete.execute(id).await.map(|()| Change::Removed) })
            .await;
        self.reload_goals_after(&state).await;
        state
    }

    pub async fn set_savings_target(&self, target_amount: &str) -> ViewState<SavingsGoal> {
        let state = self
            .savings_update
            .run(self.update_savings.execute(target_amount))
            .await;
        if matches!(state, ViewState::Success(_)) {
            self.savings.reload(self.get_savings.execute()).await;
        }
        state
    }

    async fn reload_goals_after<T>(&self, state: &ViewState<T>) {
        if matches!(state, ViewState::Success(_)) {
            self.goals.reload(self.get_goals.execute()).await;
        }
    }
}
