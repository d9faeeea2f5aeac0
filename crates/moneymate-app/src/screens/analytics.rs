// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reports screen: month-to-date summary, trends and category breakdowns.

use moneymate_core::model::{
    AverageSpending, CategoryComparison, FinancialSummary, PeriodSummary, SavingsTrends,
    SpendingPeriod, SpendingTrends, TopCategory,
};

use crate::container::Repositories;
use crate::state::{StateHolder, ViewState};
use crate::usecase::{
    GetAverageSpending, GetCategorySummary, GetFinancialSummary, GetMonthlyComparison,
    GetSavingsTrends, GetSpendingTrends, GetTopCategories,
};

/// Months covered by the trend charts unless the user picks otherwise.
pub const DEFAULT_TREND_MONTHS: u32 = 6;

pub struct AnalyticsScreen {
    get_summary: GetFinancialSummary,
    get_top: GetTopCategories,
    get_spending: GetSpendingTrends,
    get_savings: GetSavingsTrends,
    get_period: GetCategorySummary,
    get_comparison: GetMonthlyComparison,
    get_averages: GetAverageSpending,
    summary: StateHolder<FinancialSummary>,
    top: StateHolder<Vec<TopCategory>>,
    spending: StateHolder<SpendingTrends>,
    savings: StateHolder<SavingsTrends>,
    period: StateHolder<PeriodSummary>,
    comparison: StateHolder<Vec<CategoryComparison>>,
    averages: StateHolder<Vec<AverageSpending>>,
}

impl AnalyticsScreen {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            get_summary: GetFinancialSummary::new(repos.summary.clone()),
            get_top: GetTopCategories::new(repos.analytics.clone()),
            get_spending: GetSpendingTrends::new(repos.analytics.clone()),
            get_savings: GetSavingsTrends::new(repos.analytics.clone()),
            get_period: GetCategorySummary::new(repos.analytics.clone()),
            get_comparison: GetMonthlyComparison::new(repos.analytics.clone()),
            get_averages: GetAverageSpending::new(repos.analytics.clone()),
            summary: StateHolder::loader("financial_summary"),
            top: StateHolder::loader("top_categories"),
            spending: StateHolder::loader("spending_trends"),
            savings: StateHolder::loader("savings_trends"),
            period: StateHolder::loader("category_summary"),
            comparison: StateHolder::loader("monthly_comparison"),
            averages: StateHolder::loader("average_spending"),
        }
    }

    pub fn summary(&self) -> &StateHolder<FinancialSummary> {
        &self.summary
    }

    pub fn top_categories(&self) -> &StateHolder<Vec<TopCategory>> {
        &self.top
    }

    pub fn spending_trends(&self) -> &StateHolder<SpendingTrends> {
        &self.spending
    }

    pub fn savings_trends(&self) -> &StateHolder<SavingsTrends> {
        &self.savings
    }

    pub fn category_summary(&self) -> &StateHolder<PeriodSummary> {
        &self.period
    }

    pub fn comparison(&self) -> &StateHolder<Vec<CategoryComparison>> {
        &self.comparison
    }

    pub fn average_spending(&self) -> &StateHolder<Vec<AverageSpending>> {
        &self.averages
    }

    /// Loads the parameterless reports and both trend charts together.
    pub async fn load(&self, months: u32) {
        tokio::join!(
            self.summary.run(self.get_summary.execute()),
            self.top.run(self.get_top.execute()),
            self.spending.run(self.get_spending.execute(months)),
            self.savings.run(self.get_savings.execute(months)),
        );
    }

    // Parameterized reports use `reload` so a new selection is never
    // swallowed by a load for the previous one.

    pub async fn select_period(&self, start: &str, end: &str) -> ViewState<PeriodSummary> {
        self.period.reload(self.get_period.execute(start, end)).await
    }

    pub async fn compare_month(&self, month: &str) -> ViewState<Vec<CategoryComparison>> {
        self.comparison
            .reload(self.get_comparison.execute(month))
            .await
    }

    pub async fn select_average_period(
        &self,
        period: SpendingPeriod,
    ) -> ViewState<Vec<AverageSpending>> {
        self.averages.reload(self.get_averages.execute(period)).await
    }

    /// Categories whose spending grew since the previous month, largest rise first.
    pub fn rising_categories(&self) -> Vec<CategoryComparison> {
        let mut rising: Vec<_> = self
            .comparison
            .last_loaded()
            .unwrap_or_default()
            .into_iter()
            .filter(|c| c.difference.is_sign_positive() && !c.difference.is_zero())
            .collect();
        rising.sort_by(|a, b| b.difference.cmp(&a.difference));
        rising
    }
}
