// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use moneymate_core::model::{TotalBalance, Wallet};
use moneymate_core::validation::{WalletForm, WalletUpdateForm};
use moneymate_core::{Outcome, WalletId, WalletRepository};

use super::rejected;

delegating_use_case!(GetWallets => WalletRepository::get_wallets() -> Vec<Wallet>);
delegating_use_case!(GetWallet => WalletRepository::get_wallet(id: WalletId) -> Wallet);
delegating_use_case!(DeleteWallet => WalletRepository::delete_wallet(id: WalletId) -> ());
delegating_use_case!(
    /// Sum of all wallets in the user's default currency.
    GetTotalBalance => WalletRepository::get_total_balance() -> TotalBalance
);

pub struct CreateWallet {
    repo: Arc<dyn WalletRepository>,
}

impl CreateWallet {
    pub fn new(repo: Arc<dyn WalletRepository>) -> Self {
        Self { repo }
    }

    /// Balance must parse as a non-negative decimal.
    pub async fn execute(&self, form: &WalletForm) -> Outcome<Wallet> {
        let wallet = form.validate().map_err(|e| rejected("create_wallet", e))?;
        self.repo.create_wallet(wallet).await
    }
}

pub struct UpdateWallet {
    repo: Arc<dyn WalletRepository>,
}

impl UpdateWallet {
    pub fn new(repo: Arc<dyn WalletRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: WalletId, form: &WalletUpdateForm) -> Outcome<Wallet> {
        let update = form.validate().map_err(|e| rejected("update_wallet", e))?;
        self.repo.update_wallet(id, update).await
    }
}
