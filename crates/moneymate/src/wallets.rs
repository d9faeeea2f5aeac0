// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `wallets`, `transactions` and `transfer` commands.

use clap::Subcommand;
use moneymate_app::AppContainer;
use moneymate_app::screens::TransactionFilter;
use moneymate_app::state::Change;
use moneymate_core::model::{Transaction, TransactionType, Wallet, WalletType};
use moneymate_core::validation::{TransferForm, WalletForm};
use moneymate_core::{TagId, WalletId};

use crate::output::{Output, money};

#[derive(Subcommand, Debug)]
pub enum WalletCommand {
    /// List wallets and the converted total.
    List,
    /// Show one wallet.
    Show { id: i64 },
    /// Create a wallet.
    Create {
        name: String,
        #[arg(long)]
        currency: Option<String>,
        #[arg(long = "type", default_value = "cash")]
        wallet_type: WalletType,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        balance: String,
        #[arg(long, default_value = "#3B82F6")]
        color: String,
        #[arg(long)]
        card_number: Option<String>,
    },
    /// Delete a wallet.
    Delete { id: i64 },
}

pub async fn run_wallets(container: &AppContainer, out: &Output, command: WalletCommand) -> bool {
    let screen = container.wallets_screen();
    match command {
        WalletCommand::List => {
            let (wallets, total) = screen.load().await;
            let listed = out.state("wallets", &wallets, |out, wallets| {
                for wallet in wallets {
                    print_wallet(out, wallet);
                }
                if wallets.is_empty() {
                    out.line("no wallets yet");
                }
            });
            listed
                && out.state("total balance", &total, |out, total| {
                    out.row("Total", out.amount(total.total_balance, &total.currency));
                    for part in &total.breakdown {
                        out.line(format!(
                            "{:<20} {} -> {} (rate {})",
                            part.wallet_name,
                            money(part.original_balance, &part.original_currency),
                            money(part.converted_balance, &part.converted_currency),
                            part.exchange_rate_used,
                        ));
                    }
                })
        }
        WalletCommand::Show { id } => {
            let state = screen.open(WalletId(id)).await;
            out.state("wallet", &state, |out, wallet| {
                print_wallet(out, wallet);
                out.row("Color", &wallet.color);
                out.row("Card", wallet.card_number.as_deref().unwrap_or("-"));
                out.row("Created", wallet.created_at.format("%Y-%m-%d"));
            })
        }
        WalletCommand::Create {
            name,
            currency,
            wallet_type,
            balance,
            color,
            card_number,
        } => {
            let form = WalletForm {
                name,
                currency: currency.unwrap_or_else(|| container.default_currency().to_string()),
                wallet_type,
                balance,
                card_number,
                color,
            };
            let state = screen.create(&form).await;
            out.state("wallet create", &state, print_change)
        }
        WalletCommand::Delete { id } => {
            let state = screen.delete(WalletId(id)).await;
            out.state("wallet delete", &state, print_change)
        }
    }
}

fn print_wallet(out: &Output, wallet: &Wallet) {
    out.line(format!(
        "#{:<4} {:<20} {:<14} {}",
        wallet.id,
        wallet.name,
        wallet.wallet_type,
        out.amount(wallet.balance, &wallet.currency)
    ));
}

fn print_change(out: &Output, change: &Change<Wallet>) {
    match change {
        Change::Saved(wallet) => {
            out.line(out.ok("saved"));
            print_wallet(out, wallet);
        }
        Change::Removed => out.line(out.ok("deleted")),
    }
}

pub async fn run_transactions(
    container: &AppContainer,
    out: &Output,
    wallet: Option<i64>,
    tag: Option<i64>,
) -> bool {
    let filter = match (wallet, tag) {
        (Some(wallet), _) => TransactionFilter::Wallet(WalletId(wallet)),
        (None, Some(tag)) => TransactionFilter::Tag(TagId(tag)),
        (None, None) => TransactionFilter::All,
    };
    let screen = container.transactions_screen();
    let state = screen.load(filter).await;
    let summary = screen.summary();
    out.state("transactions", &state, |out, transactions| {
        for tx in transactions {
            print_transaction(out, tx);
        }
        if transactions.is_empty() {
            out.line("no transactions");
            return;
        }
        println!();
        out.row("Income", summary.income.round_dp(2));
        out.row("Expense", summary.expense.round_dp(2));
        out.row("Net", summary.net().round_dp(2));
    })
}

fn print_transaction(out: &Output, tx: &Transaction) {
    let signed = match tx.kind {
        TransactionType::Expense => -tx.amount,
        _ => tx.amount,
    };
    out.line(format!(
        "{} {:<24} {:<9} {:>12}",
        tx.transaction_date,
        tx.name,
        tx.kind,
        signed.round_dp(2)
    ));
}

pub async fn run_transfer(
    container: &AppContainer,
    out: &Output,
    from: i64,
    to: i64,
    amount: String,
    note: Option<String>,
) -> bool {
    let form = TransferForm {
        source_wallet_id: WalletId(from),
        destination_wallet_id: WalletId(to),
        amount,
        note,
    };
    let state = container.transactions_screen().transfer(&form).await;
    out.state("transfer", &state, |out, receipt| {
        out.line(out.ok(&receipt.message));
        out.row("Sent", receipt.source_transaction.amount.round_dp(2));
        out.row("Received", receipt.converted_amount.round_dp(2));
        out.row("Rate", receipt.exchange_rate);
    })
}
