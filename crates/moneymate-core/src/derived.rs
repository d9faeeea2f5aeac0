// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Values computed on the client from loaded entities.
//!
//! These mirror the figures the screens show next to budgets, limits and
//! goals: how much is used, how much remains, and where a gauge needle sits.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use strum::Display;

use crate::model::{Budget, CategoryLimit, Goal, SavingsGoal};

const WARNING_PERCENT: Decimal = Decimal::from_parts(80, 0, 0, false, 0);
const HUNDRED: Decimal = Decimal::ONE_HUNDRED;
const GAUGE_SWEEP_DEGREES: Decimal = Decimal::from_parts(180, 0, 0, false, 0);

/// `spent / limit` as a ratio; zero when the limit is not positive.
///
/// Saturates at `Decimal::MAX` (or `MIN` for a negative spend) when the
/// quotient does not fit.
pub fn usage_ratio(spent: Decimal, limit: Decimal) -> Decimal {
    if limit <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    spent
        .checked_div(limit)
        .unwrap_or_else(|| saturated(spent.is_sign_negative()))
}

/// Usage as a percentage, unbounded above (150 means 50 % over).
pub fn usage_percent(spent: Decimal, limit: Decimal) -> Decimal {
    usage_ratio(spent, limit).saturating_mul(HUNDRED)
}

/// Usage percentage capped to `0..=100` for progress bars.
pub fn clamped_percent(spent: Decimal, limit: Decimal) -> Decimal {
    usage_percent(spent, limit).clamp(Decimal::ZERO, HUNDRED)
}

/// `limit - spent`; negative when over the limit.
pub fn remaining(limit: Decimal, spent: Decimal) -> Decimal {
    limit.saturating_sub(spent)
}

fn saturated(negative: bool) -> Decimal {
    if negative { Decimal::MIN } else { Decimal::MAX }
}

/// Needle angle in degrees for a half-circle gauge: `180 * clamp(ratio, 0, 1)`.
pub fn gauge_angle(ratio: Decimal) -> Decimal {
    GAUGE_SWEEP_DEGREES * ratio.clamp(Decimal::ZERO, Decimal::ONE)
}

/// Traffic-light state for a spending limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BudgetHealth {
    /// Below 80 % of the limit.
    OnTrack,
    /// At or above 80 % but below the limit.
    Approaching,
    /// At or above the limit.
    Exceeded,
    /// No limit set.
    Unlimited,
}

impl BudgetHealth {
    pub fn classify(spent: Decimal, limit: Decimal) -> Self {
        if limit <= Decimal::ZERO {
            return Self::Unlimited;
        }
        let percent = usage_percent(spent, limit);
        if percent >= HUNDRED {
            Self::Exceeded
        } else if percent >= WARNING_PERCENT {
            Self::Approaching
        } else {
            Self::OnTrack
        }
    }
}

impl Budget {
    pub fn monthly_remaining(&self) -> Decimal {
        remaining(self.monthly_limit, self.monthly_spent)
    }

    pub fn daily_remaining(&self) -> Decimal {
        remaining(self.daily_limit, self.daily_spent)
    }

    pub fn monthly_percent(&self) -> Decimal {
        usage_percent(self.monthly_spent, self.monthly_limit)
    }

    pub fn daily_percent(&self) -> Decimal {
        usage_percent(self.daily_spent, self.daily_limit)
    }

    pub fn monthly_health(&self) -> BudgetHealth {
        BudgetHealth::classify(self.monthly_spent, self.monthly_limit)
    }

    pub fn daily_health(&self) -> BudgetHealth {
        BudgetHealth::classify(self.daily_spent, self.daily_limit)
    }

    pub fn monthly_gauge_angle(&self) -> Decimal {
        gauge_angle(usage_ratio(self.monthly_spent, self.monthly_limit))
    }
}

impl CategoryLimit {
    pub fn remaining(&self) -> Decimal {
        remaining(self.monthly_limit, self.monthly_spent)
    }

    pub fn percent(&self) -> Decimal {
        usage_percent(self.monthly_spent, self.monthly_limit)
    }

    pub fn health(&self) -> BudgetHealth {
        BudgetHealth::classify(self.monthly_spent, self.monthly_limit)
    }
}

impl SavingsGoal {
    /// Saved fraction of the monthly target, clamped to `0..=1`.
    pub fn progress(&self) -> Decimal {
        usage_ratio(self.current_saved, self.target_amount).clamp(Decimal::ZERO, Decimal::ONE)
    }

    pub fn gauge_angle(&self) -> Decimal {
        gauge_angle(self.progress())
    }
}

impl Goal {
    /// Saved fraction, clamped to `0..=1`.
    pub fn progress(&self) -> Decimal {
        usage_ratio(self.amount_saved, self.goal_amount).clamp(Decimal::ZERO, Decimal::ONE)
    }

    /// Amount still to save, never negative.
    pub fn remaining(&self) -> Decimal {
        remaining(self.goal_amount, self.amount_saved).max(Decimal::ZERO)
    }

    pub fn is_achieved(&self) -> bool {
        self.goal_amount > Decimal::ZERO && self.amount_saved >= self.goal_amount
    }

    /// Whole days from `today` until the deadline; zero once it has passed.
    pub fn days_remaining(&self, today: NaiveDate) -> Option<i64> {
        self.deadline
            .map(|deadline| (deadline - today).num_days().max(0))
    }
}
