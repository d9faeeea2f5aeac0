// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `categories` and `tags` commands.

use clap::ValueEnum;
use moneymate_app::AppContainer;
use moneymate_app::screens::CategoryScope;

use crate::output::Output;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

fn scope(kind: Option<KindArg>) -> CategoryScope {
    match kind {
        None => CategoryScope::All,
        Some(KindArg::Income) => CategoryScope::Income,
        Some(KindArg::Expense) => CategoryScope::Expense,
    }
}

pub async fn run_categories(container: &AppContainer, out: &Output, kind: Option<KindArg>) -> bool {
    let state = container.categories_screen().load(scope(kind)).await;
    out.state("categories", &state, |out, categories| {
        for category in categories {
            let owner = if category.user_id.is_some() {
                "custom"
            } else {
                "built-in"
            };
            out.line(format!(
                "#{:<4} {:<20} {:<8} {owner}",
                category.id, category.name, category.kind
            ));
        }
    })
}

pub async fn run_tags(container: &AppContainer, out: &Output, create: Option<String>) -> bool {
    let screen = container.categories_screen();
    if let Some(name) = create {
        let created = screen.create_tag(&name).await;
        return out.state("tag create", &created, |out, _| {
            out.line(out.ok("tag created"));
            if let Some(tags) = screen.tags().last_loaded() {
                for tag in tags {
                    out.line(format!("#{:<4} {}", tag.id, tag.name));
                }
            }
        });
    }
    let state = screen.load_tags().await;
    out.state("tags", &state, |out, tags| {
        if tags.is_empty() {
            out.line("no tags yet");
        }
        for tag in tags {
            out.line(format!("#{:<4} {}", tag.id, tag.name));
        }
    })
}
