// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `report` command.

use clap::ValueEnum;
use moneymate_app::AppContainer;
use moneymate_core::model::SpendingPeriod;

use crate::output::{Output, money};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PeriodArg {
    Day,
    Month,
    Year,
}

impl From<PeriodArg> for SpendingPeriod {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Day => Self::Day,
            PeriodArg::Month => Self::Month,
            PeriodArg::Year => Self::Year,
        }
    }
}

pub struct ReportOptions {
    pub months: u32,
    /// `(start, end)` as typed.
    pub period: Option<(String, String)>,
    pub compare: Option<String>,
    pub average: Option<SpendingPeriod>,
}

pub async fn run_report(container: &AppContainer, out: &Output, options: ReportOptions) -> bool {
    let screen = container.analytics_screen();
    let currency = container.default_currency();
    screen.load(options.months).await;

    let mut ok = out.state("this month", &screen.summary().current(), |out, summary| {
        out.row("Month", format!("{}-{:02}", summary.year, summary.month));
        out.row("Income", money(summary.total_income, currency));
        out.row("Spent", money(summary.total_spent, currency));
        out.row("Saved", money(summary.total_saved, currency));
    });
    ok &= out.state("top categories", &screen.top_categories().current(), |out, top| {
        if top.is_empty() {
            out.line("no spending this month");
        }
        for category in top {
            out.line(format!(
                "{:<18} {}",
                category.category_name,
                money(category.total_amount, currency)
            ));
        }
    });
    ok &= out.state("spending trends", &screen.spending_trends().current(), |out, trends| {
        for month in &trends.months {
            out.line(format!(
                "{:<9} in {:>14}  out {:>14}",
                month.display_name,
                money(month.total_income, currency),
                money(month.total_spent, currency)
            ));
        }
        out.row("Net flow", out.amount(trends.net_flow, currency));
        out.row("Avg spent", money(trends.average_monthly_spent, currency));
    });
    ok &= out.state("savings trends", &screen.savings_trends().current(), |out, trends| {
        for month in &trends.months {
            out.line(format!(
                "{:<9} {} of {} ({}%)",
                month.display_name,
                money(month.saved_amount, currency),
                money(month.target_amount, currency),
                month.achievement_rate.round_dp(1)
            ));
        }
    });

    if let Some((start, end)) = options.period {
        let state = screen.select_period(&start, &end).await;
        ok &= out.state("categories", &state, |out, summary| {
            for total in summary.expenses.iter().chain(&summary.incomes) {
                out.line(format!(
                    "{:<8} {:<18} {:>14}  ({} txns)",
                    total.kind,
                    total.category_name,
                    money(total.total_amount, currency),
                    total.transaction_count
                ));
            }
            out.row("Net flow", out.amount(summary.net_flow, currency));
        });
    }
    if let Some(month) = options.compare {
        let state = screen.compare_month(&month).await;
        ok &= out.state("vs previous month", &state, |out, _| {
            let rising = screen.rising_categories();
            if rising.is_empty() {
                out.line("no category spent more than the month before");
            }
            for category in rising {
                out.line(format!(
                    "{:<18} +{} ({}%)",
                    category.category_name,
                    money(category.difference, currency),
                    category.percentage_change.round_dp(1)
                ));
            }
        });
    }
    if let Some(period) = options.average {
        let state = screen.select_average_period(period).await;
        ok &= out.state("average spending", &state, |out, rows| {
            for row in rows {
                let average = match period {
                    SpendingPeriod::Day => row.average_daily_spending,
                    SpendingPeriod::Month => row.average_monthly_spending,
                    SpendingPeriod::Year => Some(row.total_period_spent),
                };
                out.line(format!(
                    "{:<18} {} per {period}",
                    row.category_name,
                    money(average.unwrap_or_default(), currency)
                ));
            }
        });
    }
    ok
}
