// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Report actions. Report parameters are checked locally first.

use std::sync::Arc;

use moneymate_core::model::{
    AverageSpending, CategoryComparison, FinancialSummary, PeriodSummary, SavingsTrends,
    SpendingPeriod, SpendingTrends, TopCategory,
};
use moneymate_core::validation::{date_range, report_month, trend_months};
use moneymate_core::{AnalyticsRepository, FinancialSummaryRepository, Outcome};

use super::rejected;

pub struct GetCategorySummary {
    repo: Arc<dyn AnalyticsRepository>,
}

impl GetCategorySummary {
    pub fn new(repo: Arc<dyn AnalyticsRepository>) -> Self {
        Self { repo }
    }

    /// `start` and `end` are `YYYY-MM-DD`, at most a year apart.
    pub async fn execute(&self, start: &str, end: &str) -> Outcome<PeriodSummary> {
        let range = date_range(start, end).map_err(|e| rejected("category_summary", e))?;
        self.repo.get_category_summary(range).await
    }
}

pub struct GetMonthlyComparison {
    repo: Arc<dyn AnalyticsRepository>,
}

impl GetMonthlyComparison {
    pub fn new(repo: Arc<dyn AnalyticsRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, month: &str) -> Outcome<Vec<CategoryComparison>> {
        let month = report_month(month).map_err(|e| rejected("monthly_comparison", e))?;
        self.repo.get_monthly_comparison(month).await
    }
}

pub struct GetSpendingTrends {
    repo: Arc<dyn AnalyticsRepository>,
}

impl GetSpendingTrends {
    pub fn new(repo: Arc<dyn AnalyticsRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, months: u32) -> Outcome<SpendingTrends> {
        let months = trend_months(months).map_err(|e| rejected("spending_trends", e))?;
        self.repo.get_spending_trends(months).await
    }
}

pub struct GetSavingsTrends {
    repo: Arc<dyn AnalyticsRepository>,
}

impl GetSavingsTrends {
    pub fn new(repo: Arc<dyn AnalyticsRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, months: u32) -> Outcome<SavingsTrends> {
        let months = trend_months(months).map_err(|e| rejected("savings_trends", e))?;
        self.repo.get_savings_trends(months).await
    }
}

delegating_use_case!(
    /// Biggest expense categories of the current month.
    GetTopCategories => AnalyticsRepository::get_top_categories() -> Vec<TopCategory>
);
delegating_use_case!(
    GetAverageSpending => AnalyticsRepository::get_average_spending(period: SpendingPeriod) -> Vec<AverageSpending>
);
delegating_use_case!(
    GetFinancialSummary => FinancialSummaryRepository::get_current_summary() -> FinancialSummary
);
