// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `budget`, `limit`, `goals` and `savings` commands.

use chrono::Local;
use clap::Subcommand;
use moneymate_app::{AppContainer, ViewState};
use moneymate_app::state::Change;
use moneymate_core::CategoryId;
use moneymate_core::model::SavingsGoal;
use moneymate_core::validation::BudgetForm;
use rust_decimal::Decimal;

use crate::output::{Output, money};

#[derive(Subcommand, Debug)]
pub enum LimitCommand {
    /// Set the monthly limit of a category.
    Set { category: i64, amount: String },
    /// Remove the limit of a category.
    Remove { category: i64 },
}

pub async fn run_budget(
    container: &AppContainer,
    out: &Output,
    monthly: Option<String>,
    daily: Option<String>,
) -> bool {
    let screen = container.budget_screen();
    if monthly.is_some() || daily.is_some() {
        let form = BudgetForm {
            monthly_limit: monthly,
            daily_limit: daily,
        };
        let saved = screen.update(&form).await;
        if !out.state("budget update", &saved, |out, _| out.line(out.ok("budget saved"))) {
            return false;
        }
    }

    let (budget, limits) = screen.load().await;
    let currency = container.default_currency();
    let shown = out.state("budget", &budget, |out, budget| {
        out.row("Month", format!("{}-{:02}", budget.year, budget.month));
        out.row(
            "Monthly",
            format!(
                "{} of {} ({}%)",
                money(budget.monthly_spent, currency),
                money(budget.monthly_limit, currency),
                budget.monthly_percent().round_dp(1)
            ),
        );
        out.row("Remaining", out.amount(budget.monthly_remaining(), currency));
        out.row("Health", out.health(budget.monthly_health()));
        out.row(
            "Today",
            format!(
                "{} of {} ({})",
                money(budget.daily_spent, currency),
                money(budget.daily_limit, currency),
                out.health(budget.daily_health())
            ),
        );
    });
    shown
        && out.state("category limits", &limits, |out, limits| {
            if limits.is_empty() {
                out.line("no category limits");
            }
            for limit in limits {
                out.line(format!(
                    "#{:<4} {:<18} {} / {}  {}",
                    limit.category_id,
                    limit.category_name,
                    money(limit.monthly_spent, currency),
                    money(limit.monthly_limit, currency),
                    out.health(limit.health())
                ));
            }
        })
}

pub async fn run_limit(container: &AppContainer, out: &Output, command: LimitCommand) -> bool {
    let screen = container.budget_screen();
    let state = match command {
        LimitCommand::Set { category, amount } => {
            screen.set_limit(CategoryId(category), &amount).await
        }
        LimitCommand::Remove { category } => screen.remove_limit(CategoryId(category)).await,
    };
    out.state("limit", &state, |out, change| match change {
        Change::Saved(setting) => {
            out.line(out.ok("limit saved"));
            out.row("Category", setting.category_id);
            out.row("Monthly", setting.monthly_limit.round_dp(2));
        }
        Change::Removed => out.line(out.ok("limit removed")),
    })
}

pub async fn run_goals(container: &AppContainer, out: &Output) -> bool {
    let (goals, savings) = container.goals_screen().load().await;
    let today = Local::now().date_naive();
    let shown = out.state("goals", &goals, |out, goals| {
        if goals.is_empty() {
            out.line("no goals yet");
        }
        for goal in goals {
            let status = if goal.is_achieved() {
                out.ok("achieved")
            } else {
                match goal.days_remaining(today) {
                    Some(days) => format!("{days} days left"),
                    None => "no deadline".to_string(),
                }
            };
            out.line(format!(
                "#{:<4} {:<20} {} / {} ({}%)  {status}",
                goal.id,
                goal.title,
                money(goal.amount_saved, &goal.currency),
                money(goal.goal_amount, &goal.currency),
                (goal.progress() * Decimal::ONE_HUNDRED).round_dp(0),
            ));
        }
    });
    shown && print_savings(out, container, &savings)
}

fn print_savings(
    out: &Output,
    container: &AppContainer,
    savings: &ViewState<SavingsGoal>,
) -> bool {
    let currency = container.default_currency();
    out.state("monthly savings", savings, |out, goal| {
        out.row("Month", format!("{}-{:02}", goal.year, goal.month));
        out.row("Saved", money(goal.current_saved, currency));
        out.row("Target", money(goal.target_amount, currency));
        out.row(
            "Progress",
            format!(
                "{}%",
                (goal.progress() * Decimal::ONE_HUNDRED).round_dp(0)
            ),
        );
    })
}

pub async fn run_savings(container: &AppContainer, out: &Output, target: Option<String>) -> bool {
    let screen = container.goals_screen();
    let state = match target {
        Some(target) => screen.set_savings_target(&target).await,
        None => {
            let (_, savings) = screen.load().await;
            savings
        }
    };
    print_savings(out, container, &state)
}
