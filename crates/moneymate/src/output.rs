// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering of view states for the terminal.
//!
//! With `--json` the final [`ViewState`] is printed as-is for scripting.
//! Otherwise a short report is printed, coloured only when stdout is a
//! terminal and `--plain` was not given.

use std::fmt::Display;
use std::io::IsTerminal;

use colored::Colorize;
use moneymate_app::ViewState;
use moneymate_core::{BudgetHealth, ErrorInfo};
use rust_decimal::Decimal;
use serde::Serialize;

pub struct Output {
    json: bool,
    color: bool,
}

impl Output {
    pub fn new(json: bool, plain: bool) -> Self {
        Self {
            json,
            color: !json && !plain && std::io::stdout().is_terminal(),
        }
    }

    /// Print the outcome of one screen action. Returns whether it succeeded.
    pub fn state<T, F>(&self, title: &str, state: &ViewState<T>, render: F) -> bool
    where
        T: Serialize,
        F: FnOnce(&Self, &T),
    {
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(state).unwrap_or_else(|_| "{}".to_string())
            );
            return matches!(state, ViewState::Success(_));
        }
        match state {
            ViewState::Success(value) => {
                self.header(title);
                render(self, value);
                println!();
                true
            }
            ViewState::Error(info) => {
                self.error(title, info);
                false
            }
            ViewState::Idle | ViewState::Loading => {
                eprintln!("moneymate {title}: no result");
                false
            }
        }
    }

    pub fn header(&self, title: &str) {
        println!();
        println!("  moneymate {title}");
        println!("  {}", "-".repeat(40));
    }

    pub fn row(&self, label: &str, value: impl Display) {
        println!("    {:<16}{value}", format!("{label}:"));
    }

    pub fn line(&self, text: impl Display) {
        println!("    {text}");
    }

    pub fn ok(&self, text: &str) -> String {
        if self.color {
            format!("{} {}", "✓".green(), text.green())
        } else {
            format!("[OK] {text}")
        }
    }

    pub fn health(&self, health: BudgetHealth) -> String {
        let label = health.to_string();
        if !self.color {
            return label;
        }
        match health {
            BudgetHealth::OnTrack => label.green().to_string(),
            BudgetHealth::Approaching => label.yellow().to_string(),
            BudgetHealth::Exceeded => label.red().to_string(),
            BudgetHealth::Unlimited => label,
        }
    }

    /// Signed amount, red when negative.
    pub fn amount(&self, value: Decimal, currency: &str) -> String {
        let text = money(value, currency);
        if self.color && value.is_sign_negative() {
            text.red().to_string()
        } else {
            text
        }
    }

    fn error(&self, title: &str, info: &ErrorInfo) {
        let prefix = if self.color {
            "✗".red().to_string()
        } else {
            "[FAIL]".to_string()
        };
        eprintln!();
        eprintln!("  moneymate {title}");
        eprintln!("    {prefix} {}", info.message);
        if let Some(field) = &info.field {
            eprintln!("    field: {field}");
        }
        if info.requires_sign_in() {
            eprintln!();
            eprintln!("  Sign in again with: moneymate login");
        }
        eprintln!();
        tracing::debug!(kind = %info.kind, detail = %info.detail, "command failed");
    }
}

/// Two decimal places followed by the currency code.
pub fn money(value: Decimal, currency: &str) -> String {
    format!("{} {currency}", value.round_dp(2))
}
