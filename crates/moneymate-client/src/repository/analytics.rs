// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use moneymate_core::model::{
    AverageSpending, CategoryComparison, DateRange, FinancialSummary, PeriodSummary,
    SavingsTrends, SpendingPeriod, SpendingTrends, TopCategory,
};
use moneymate_core::{AnalyticsRepository, FinancialSummaryRepository, Outcome};

use crate::dto::{
    AverageSpendingDto, CategoryComparisonDto, FinancialSummaryDto, PeriodSummaryDto,
    SavingsTrendsDto, SpendingTrendsDto, TopCategoryDto,
};
use crate::http::{ApiRequest, AuthenticatedClient};

const DATE: &str = "%Y-%m-%d";

pub struct HttpAnalyticsRepository {
    client: Arc<AuthenticatedClient>,
}

impl HttpAnalyticsRepository {
    pub fn new(client: Arc<AuthenticatedClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AnalyticsRepository for HttpAnalyticsRepository {
    async fn get_category_summary(&self, range: DateRange) -> Outcome<PeriodSummary> {
        let request = ApiRequest::get("/api/analytics/category-summary")
            .query("start_date", range.start.format(DATE).to_string())
            .query("end_date", range.end.format(DATE).to_string());
        let dto: PeriodSummaryDto = self.client.fetch(request).await?;
        Ok(dto.into())
    }

    async fn get_monthly_comparison(&self, month: NaiveDate) -> Outcome<Vec<CategoryComparison>> {
        let request = ApiRequest::get("/api/analytics/monthly-comparison")
            .query("month", month.format("%Y-%m").to_string());
        let dtos: Vec<CategoryComparisonDto> = self.client.fetch(request).await?;
        Ok(dtos.into_iter().map(CategoryComparison::from).collect())
    }

    async fn get_spending_trends(&self, months: u32) -> Outcome<SpendingTrends> {
        let request =
            ApiRequest::get("/api/analytics/spending-trends").query("months", months.to_string());
        let dto: SpendingTrendsDto = self.client.fetch(request).await?;
        Ok(dto.into())
    }

    async fn get_top_categories(&self) -> Outcome<Vec<TopCategory>> {
        let dtos: Vec<TopCategoryDto> = self
            .client
            .fetch(ApiRequest::get("/api/analytics/top-categories/current-month"))
            .await?;
        Ok(dtos.into_iter().map(TopCategory::from).collect())
    }

    async fn get_average_spending(&self, period: SpendingPeriod) -> Outcome<Vec<AverageSpending>> {
        let request =
            ApiRequest::get("/api/analytics/average-spending").query("period", period.to_string());
        let dtos: Vec<AverageSpendingDto> = self.client.fetch(request).await?;
        Ok(dtos.into_iter().map(AverageSpending::from).collect())
    }

    async fn get_savings_trends(&self, months: u32) -> Outcome<SavingsTrends> {
        let request =
            ApiRequest::get("/api/analytics/savings-trends").query("months", months.to_string());
        let dto: SavingsTrendsDto = self.client.fetch(request).await?;
        Ok(dto.into())
    }
}

pub struct HttpFinancialSummaryRepository {
    client: Arc<AuthenticatedClient>,
}

impl HttpFinancialSummaryRepository {
    pub fn new(client: Arc<AuthenticatedClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FinancialSummaryRepository for HttpFinancialSummaryRepository {
    async fn get_current_summary(&self) -> Outcome<FinancialSummary> {
        let dto: FinancialSummaryDto = self
            .client
            .fetch(ApiRequest::get("/api/financial_summary/current"))
            .await?;
        Ok(dto.into())
    }
}
