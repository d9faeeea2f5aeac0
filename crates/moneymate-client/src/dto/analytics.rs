// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Analytics report and financial summary payloads.
//!
//! All of these are computed server-side and only ever read.

use chrono::{DateTime, NaiveDate, Utc};
use moneymate_core::CategoryId;
use moneymate_core::model::{
    AverageSpending, CategoryComparison, CategoryTotal, FinancialSummary, MonthlyFlow,
    MonthlySavings, PeriodSummary, SavingsTrends, SpendingPeriod, SpendingTrends, TopCategory,
    TransactionType,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::codec;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryTotalDto {
    pub category_id: CategoryId,
    pub category_name: String,
    pub category_type: TransactionType,
    #[serde(with = "codec::amount")]
    pub total_amount: Decimal,
    pub transaction_count: u32,
}

impl From<CategoryTotalDto> for CategoryTotal {
    fn from(dto: CategoryTotalDto) -> Self {
        Self {
            category_id: dto.category_id,
            category_name: dto.category_name,
            kind: dto.category_type,
            total_amount: dto.total_amount,
            transaction_count: dto.transaction_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PeriodSummaryDto {
    #[serde(default)]
    pub expenses: Vec<CategoryTotalDto>,
    #[serde(default)]
    pub incomes: Vec<CategoryTotalDto>,
    #[serde(with = "codec::amount")]
    pub total_expenses: Decimal,
    #[serde(with = "codec::amount")]
    pub total_incomes: Decimal,
    #[serde(with = "codec::amount")]
    pub net_flow: Decimal,
}

impl From<PeriodSummaryDto> for PeriodSummary {
    fn from(dto: PeriodSummaryDto) -> Self {
        Self {
            expenses: dto.expenses.into_iter().map(CategoryTotal::from).collect(),
            incomes: dto.incomes.into_iter().map(CategoryTotal::from).collect(),
            total_expenses: dto.total_expenses,
            total_incomes: dto.total_incomes,
            net_flow: dto.net_flow,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryComparisonDto {
    pub category_id: CategoryId,
    pub category_name: String,
    #[serde(with = "codec::amount")]
    pub current_month_amount: Decimal,
    #[serde(with = "codec::amount")]
    pub previous_month_amount: Decimal,
    #[serde(with = "codec::amount")]
    pub difference: Decimal,
    #[serde(with = "codec::amount")]
    pub percentage_change: Decimal,
}

impl From<CategoryComparisonDto> for CategoryComparison {
    fn from(dto: CategoryComparisonDto) -> Self {
        Self {
            category_id: dto.category_id,
            category_name: dto.category_name,
            current_month_amount: dto.current_month_amount,
            previous_month_amount: dto.previous_month_amount,
            difference: dto.difference,
            percentage_change: dto.percentage_change,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MonthlyFlowDto {
    pub year: i32,
    pub month: u32,
    #[serde(with = "codec::amount")]
    pub total_spent: Decimal,
    #[serde(with = "codec::amount")]
    pub total_income: Decimal,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrendTotalsDto {
    #[serde(with = "codec::amount")]
    pub total_spent: Decimal,
    #[serde(with = "codec::amount")]
    pub total_income: Decimal,
    #[serde(with = "codec::amount")]
    pub net_flow: Decimal,
    #[serde(with = "codec::amount")]
    pub average_monthly_spent: Decimal,
    pub months_analyzed: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalysisPeriodDto {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Body of `GET /api/analytics/spending-trends`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpendingTrendsDto {
    pub monthly_summary: Vec<MonthlyFlowDto>,
    pub summary: TrendTotalsDto,
    pub analysis_period: AnalysisPeriodDto,
}

impl From<SpendingTrendsDto> for SpendingTrends {
    fn from(dto: SpendingTrendsDto) -> Self {
        Self {
            months: dto
                .monthly_summary
                .into_iter()
                .map(|m| MonthlyFlow {
                    year: m.year,
                    month: m.month,
                    total_spent: m.total_spent,
                    total_income: m.total_income,
                    display_name: m.display_name,
                })
                .collect(),
            total_spent: dto.summary.total_spent,
            total_income: dto.summary.total_income,
            net_flow: dto.summary.net_flow,
            average_monthly_spent: dto.summary.average_monthly_spent,
            months_analyzed: dto.summary.months_analyzed,
            start_date: dto.analysis_period.start_date,
            end_date: dto.analysis_period.end_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TopCategoryDto {
    pub category_id: CategoryId,
    pub category_name: String,
    #[serde(with = "codec::amount")]
    pub total_amount: Decimal,
}

impl From<TopCategoryDto> for TopCategory {
    fn from(dto: TopCategoryDto) -> Self {
        Self {
            category_id: dto.category_id,
            category_name: dto.category_name,
            total_amount: dto.total_amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AverageSpendingDto {
    pub category_id: CategoryId,
    pub category_name: String,
    pub period_type: SpendingPeriod,
    #[serde(with = "codec::amount")]
    pub total_period_spent: Decimal,
    pub transactions: u32,
    #[serde(default, with = "codec::opt_amount")]
    pub average_monthly_spending: Option<Decimal>,
    #[serde(default, with = "codec::opt_amount")]
    pub average_daily_spending: Option<Decimal>,
}

impl From<AverageSpendingDto> for AverageSpending {
    fn from(dto: AverageSpendingDto) -> Self {
        Self {
            category_id: dto.category_id,
            category_name: dto.category_name,
            period: dto.period_type,
            total_period_spent: dto.total_period_spent,
            transactions: dto.transactions,
            average_monthly_spending: dto.average_monthly_spending,
            average_daily_spending: dto.average_daily_spending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MonthlySavingsDto {
    pub year: i32,
    pub month: u32,
    pub display_name: String,
    #[serde(with = "codec::amount")]
    pub saved_amount: Decimal,
    #[serde(with = "codec::amount")]
    pub target_amount: Decimal,
    #[serde(with = "codec::amount")]
    pub achievement_rate: Decimal,
}

/// Body of `GET /api/analytics/savings-trends`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SavingsTrendsDto {
    pub monthly_trends: Vec<MonthlySavingsDto>,
    pub months_analyzed: u32,
    pub analysis_period: AnalysisPeriodDto,
}

impl From<SavingsTrendsDto> for SavingsTrends {
    fn from(dto: SavingsTrendsDto) -> Self {
        Self {
            months: dto
                .monthly_trends
                .into_iter()
                .map(|m| MonthlySavings {
                    year: m.year,
                    month: m.month,
                    display_name: m.display_name,
                    saved_amount: m.saved_amount,
                    target_amount: m.target_amount,
                    achievement_rate: m.achievement_rate,
                })
                .collect(),
            months_analyzed: dto.months_analyzed,
            start_date: dto.analysis_period.start_date,
            end_date: dto.analysis_period.end_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FinancialSummaryDto {
    pub id: i64,
    pub month: u32,
    pub year: i32,
    // A freshly created summary has null totals until the first transaction.
    #[serde(default, with = "codec::opt_amount")]
    pub total_income: Option<Decimal>,
    #[serde(default, with = "codec::opt_amount")]
    pub total_spent: Option<Decimal>,
    #[serde(default, with = "codec::opt_amount")]
    pub total_saved: Option<Decimal>,
    #[serde(with = "codec::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl From<FinancialSummaryDto> for FinancialSummary {
    fn from(dto: FinancialSummaryDto) -> Self {
        Self {
            id: dto.id,
            month: dto.month,
            year: dto.year,
            total_income: dto.total_income.unwrap_or_default(),
            total_spent: dto.total_spent.unwrap_or_default(),
            total_saved: dto.total_saved.unwrap_or_default(),
            created_at: dto.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn category_summary_keeps_float_totals_exact() {
        let dto: PeriodSummaryDto = serde_json::from_str(
            r#"{"expenses":[{"category_id":3,"category_name":"Food","category_type":"expense",
                 "total_amount":12.1,"transaction_count":2}],
                "incomes":[],"total_expenses":12.1,"total_incomes":0.0,"net_flow":-12.1}"#,
        )
        .unwrap();
        let summary = PeriodSummary::from(dto);
        assert_eq!(summary.expenses[0].kind, TransactionType::Expense);
        assert_eq!(summary.total_expenses, Decimal::from_str("12.1").unwrap());
        assert_eq!(summary.net_flow, Decimal::from_str("-12.1").unwrap());
    }

    #[test]
    fn average_spending_averages_depend_on_period() {
        let year: AverageSpendingDto = serde_json::from_str(
            r#"{"category_id":1,"category_name":"Rent","total_period_spent":1200.0,
                "transactions":12,"period_type":"year"}"#,
        )
        .unwrap();
        let day: AverageSpendingDto = serde_json::from_str(
            r#"{"category_id":1,"category_name":"Rent","average_daily_spending":3.29,
                "average_monthly_spending":100.0,"total_period_spent":1200.0,
                "transactions":12,"period_type":"day"}"#,
        )
        .unwrap();
        let year = AverageSpending::from(year);
        let day = AverageSpending::from(day);
        assert_eq!(year.period, SpendingPeriod::Year);
        assert!(year.average_monthly_spending.is_none());
        assert_eq!(day.average_daily_spending, Some(Decimal::from_str("3.29").unwrap()));
    }

    #[test]
    fn spending_trends_flatten_the_summary_block() {
        let dto: SpendingTrendsDto = serde_json::from_str(
            r#"{"monthly_summary":[{"year":2025,"month":1,"total_spent":10.5,"total_income":100,
                 "month_name":"2025-01","display_name":"Jan 2025"}],
                "summary":{"total_spent":10.5,"total_income":100,"net_flow":89.5,
                 "average_monthly_spent":10.5,"months_analyzed":1},
                "analysis_period":{"start_date":"2025-01-01","end_date":"2025-01-31",
                 "months_analyzed":1}}"#,
        )
        .unwrap();
        let trends = SpendingTrends::from(dto);
        assert_eq!(trends.months.len(), 1);
        assert_eq!(trends.months[0].display_name, "Jan 2025");
        assert_eq!(trends.net_flow, Decimal::from_str("89.5").unwrap());
        assert_eq!(trends.end_date, NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
    }

    #[test]
    fn new_financial_summary_has_zero_totals() {
        let dto: FinancialSummaryDto = serde_json::from_str(
            r#"{"id":4,"month":3,"year":2025,"total_income":null,"total_spent":"12.50",
                "total_saved":null,"created_at":"2025-03-01T08:00:00"}"#,
        )
        .unwrap();
        let summary = FinancialSummary::from(dto);
        assert_eq!(summary.total_income, Decimal::ZERO);
        assert_eq!(summary.total_spent, Decimal::from_str("12.50").unwrap());
    }
}
