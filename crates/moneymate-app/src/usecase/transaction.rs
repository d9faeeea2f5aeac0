// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use moneymate_core::model::{Transaction, TransferReceipt};
use moneymate_core::validation::{TransactionForm, TransferForm};
use moneymate_core::{Outcome, TagId, TransactionId, TransactionRepository, WalletId};

use super::rejected;

delegating_use_case!(GetTransactions => TransactionRepository::get_transactions() -> Vec<Transaction>);
delegating_use_case!(
    GetWalletTransactions => TransactionRepository::get_wallet_transactions(wallet: WalletId) -> Vec<Transaction>
);
delegating_use_case!(
    GetTransactionsByTag => TransactionRepository::get_transactions_by_tag(tag: TagId) -> Vec<Transaction>
);
delegating_use_case!(
    DeleteTransaction => TransactionRepository::delete_transaction(id: TransactionId) -> ()
);

pub struct CreateTransaction {
    repo: Arc<dyn TransactionRepository>,
}

impl CreateTransaction {
    pub fn new(repo: Arc<dyn TransactionRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, form: &TransactionForm) -> Outcome<Transaction> {
        let transaction = form
            .validate()
            .map_err(|e| rejected("create_transaction", e))?;
        self.repo.create_transaction(transaction).await
    }
}

pub struct CreateTransfer {
    repo: Arc<dyn TransactionRepository>,
}

impl CreateTransfer {
    pub fn new(repo: Arc<dyn TransactionRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, form: &TransferForm) -> Outcome<TransferReceipt> {
        let transfer = form.validate().map_err(|e| rejected("create_transfer", e))?;
        self.repo.create_transfer(transfer).await
    }
}
