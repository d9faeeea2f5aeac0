// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use moneymate_core::model::{Transaction, TransactionType, TransferReceipt};
use moneymate_core::validation::{TransactionForm, TransferForm};
use moneymate_core::{Outcome, TagId, TransactionId, WalletId};
use rust_decimal::Decimal;
use serde::Serialize;
use tokio::sync::watch;

use crate::container::Repositories;
use crate::state::{Change, StateHolder, ViewState};
use crate::usecase::{
    CreateTransaction, CreateTransfer, DeleteTransaction, GetTransactions, GetTransactionsByTag,
    GetWalletTransactions,
};

/// Which transactions the list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransactionFilter {
    #[default]
    All,
    Wallet(WalletId),
    Tag(TagId),
}

/// Income and expense totals of a list. Transfers count toward neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TransactionSummary {
    pub income: Decimal,
    pub expense: Decimal,
}

impl TransactionSummary {
    pub fn of(transactions: &[Transaction]) -> Self {
        transactions
            .iter()
            .fold(Self::default(), |mut acc, tx| {
                match tx.kind {
                    TransactionType::Income => acc.income += tx.amount,
                    TransactionType::Expense => acc.expense += tx.amount,
                    TransactionType::Transfer => {}
                }
                acc
            })
    }

    pub fn net(&self) -> Decimal {
        self.income - self.expense
    }
}

pub struct TransactionsScreen {
    get_all: GetTransactions,
    get_by_wallet: GetWalletTransactions,
    get_by_tag: GetTransactionsByTag,
    create: CreateTransaction,
    delete: DeleteTransaction,
    transfer: CreateTransfer,
    filter: watch::Sender<TransactionFilter>,
    list: StateHolder<Vec<Transaction>>,
    change: StateHolder<Change<Transaction>>,
    transfer_state: StateHolder<TransferReceipt>,
}

impl TransactionsScreen {
    pub fn new(repos: &Repositories) -> Self {
        let (filter, _) = watch::channel(TransactionFilter::All);
        Self {
            get_all: GetTransactions::new(repos.transactions.clone()),
            get_by_wallet: GetWalletTransactions::new(repos.transactions.clone()),
            get_by_tag: GetTransactionsByTag::new(repos.transactions.clone()),
            create: CreateTransaction::new(repos.transactions.clone()),
            delete: DeleteTransaction::new(repos.transactions.clone()),
            transfer: CreateTransfer::new(repos.transactions.clone()),
            filter,
            list: StateHolder::loader("transactions"),
            change: StateHolder::mutation("transaction_change"),
            transfer_state: StateHolder::mutation("transfer"),
        }
    }

    pub fn list(&self) -> &StateHolder<Vec<Transaction>> {
        &self.list
    }

    pub fn change(&self) -> &StateHolder<Change<Transaction>> {
        &self.change
    }

    pub fn transfer_state(&self) -> &StateHolder<TransferReceipt> {
        &self.transfer_state
    }

    pub fn filter(&self) -> TransactionFilter {
        *self.filter.borrow()
    }

    /// Totals of the most recently loaded list.
    pub fn summary(&self) -> TransactionSummary {
        self.list
            .last_loaded()
            .map(|txs| TransactionSummary::of(&txs))
            .unwrap_or_default()
    }

    pub async fn load(&self, filter: TransactionFilter) -> ViewState<Vec<Transaction>> {
        self.filter.send_replace(filter);
        self.list.run(self.fetch(filter)).await
    }

    async fn fetch(&self, filter: TransactionFilter) -> Outcome<Vec<Transaction>> {
        match filter {
            TransactionFilter::All => self.get_all.execute().await,
            TransactionFilter::Wallet(wallet) => self.get_by_wallet.execute(wallet).await,
            TransactionFilter::Tag(tag) => self.get_by_tag.execute(tag).await,
        }
    }

    pub async fn create(&self, form: &TransactionForm) -> ViewState<Change<Transaction>> {
        let state = self
            .change
            .run(async { self.create.execute(form).await.map(Change::Saved) })
            .await;
        self.reload_after(&state).await;
        state
    }

    pub async fn delete(&self, id: TransactionId) -> ViewState<Change<Transaction>> {
        let state = self
            .change
            .run(async { self.delete.execute(id).await.map(|()| Change::Removed) })
            .await;
        self.reload_after(&state).await;
        state
    }

    pub async fn transfer(&self, form: &TransferForm) -> ViewState<TransferReceipt> {
        let state = self.transfer_state.run(self.transfer.execute(form)).await;
        self.reload_after(&state).await;
        state
    }

    async fn reload_after<T>(&self, state: &ViewState<T>) {
        if matches!(state, ViewState::Success(_)) {
            self.list.reload(self.fetch(self.filter())).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use moneymate_core::{CategoryId, UserId};

    fn tx(kind: TransactionType, amount: i64) -> Transaction {
        Transaction {
            id: TransactionId(1),
            name: "t".into(),
            amount: Decimal::from(amount),
            note: None,
            kind,
            transaction_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            wallet_id: WalletId(1),
            category_id: CategoryId(1),
            user_id: UserId(7),
            created_at: Utc::now(),
            tags: vec![],
            receipt_url: None,
        }
    }

    #[test]
    fn summary_ignores_transfers() {
        let summary = TransactionSummary::of(&[
            tx(TransactionType::Income, 100),
            tx(TransactionType::Expense, 30),
            tx(TransactionType::Transfer, 50),
        ]);
        assert_eq!(summary.income, Decimal::from(100));
        assert_eq!(summary.expense, Decimal::from(30));
        assert_eq!(summary.net(), Decimal::from(70));
    }
}
