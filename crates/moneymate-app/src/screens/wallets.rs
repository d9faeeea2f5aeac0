// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use moneymate_core::WalletId;
use moneymate_core::model::{TotalBalance, Wallet};
use moneymate_core::validation::{WalletForm, WalletUpdateForm};

use crate::container::Repositories;
use crate::state::{Change, StateHolder, ViewState};
use crate::usecase::{
    CreateWallet, DeleteWallet, GetTotalBalance, GetWallet, GetWallets, UpdateWallet,
};

/// Wallet list, converted total and wallet editing.
pub struct WalletsScreen {
    get_wallets: GetWallets,
    get_wallet: GetWallet,
    get_total: GetTotalBalance,
    create: CreateWallet,
    update: UpdateWallet,
    delete: DeleteWallet,
    wallets: StateHolder<Vec<Wallet>>,
    total: StateHolder<TotalBalance>,
    detail: StateHolder<Wallet>,
    change: StateHolder<Change<Wallet>>,
}

impl WalletsScreen {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            get_wallets: GetWallets::new(repos.wallets.clone()),
            get_wallet: GetWallet::new(repos.wallets.clone()),
            get_total: GetTotalBalance::new(repos.wallets.clone()),
            create: CreateWallet::new(repos.wallets.clone()),
            update: UpdateWallet::new(repos.wallets.clone()),
            delete: DeleteWallet::new(repos.wallets.clone()),
            wallets: StateHolder::loader("wallets"),
            total: StateHolder::loader("total_balance"),
            detail: StateHolder::loader("wallet"),
            change: StateHolder::mutation("wallet_change"),
        }
    }

    pub fn wallets(&self) -> &StateHolder<Vec<Wallet>> {
        &self.wallets
    }

    pub fn total(&self) -> &StateHolder<TotalBalance> {
        &self.total
    }

    pub fn detail(&self) -> &StateHolder<Wallet> {
        &self.detail
    }

    pub fn change(&self) -> &StateHolder<Change<Wallet>> {
        &self.change
    }

    /// Load the list and the total side by side.
    pub async fn load(&self) -> (ViewState<Vec<Wallet>>, ViewState<TotalBalance>) {
        tokio::join!(
            self.wallets.run(self.get_wallets.execute()),
            self.total.run(self.get_total.execute()),
        )
    }

    pub async fn open(&self, id: WalletId) -> ViewState<Wallet> {
        self.detail.run(self.get_wallet.execute(id)).await
    }

    pub async fn create(&self, form: &WalletForm) -> ViewState<Change<Wallet>> {
        let state = self
            .change
            .run(async { self.create.execute(form).await.map(Change::Saved) })
            .await;
        self.reload_after(&state).await;
        state
    }

    pub async fn update(&self, id: WalletId, form: &WalletUpdateForm) -> ViewState<Change<Wallet>> {
        let state = self
            .change
            .run(async { self.update.execute(id, form).await.map(Change::Saved) })
            .await;
        self.reload_after(&state).await;
        state
    }

    pub async fn delete(&self, id: WalletId) -> ViewState<Change<Wallet>> {
        let state = self
            .change
            .run(async { self.delete.execute(id).await.map(|()| Change::Removed) })
            .await;
        self.reload_after(&state).await;
        state
    }

    async fn reload_after<T>(&self, state: &ViewState<T>) {
        if matches!(state, ViewState::Success(_)) {
            tokio::join!(
                self.wallets.reload(self.get_wallets.execute()),
                self.total.reload(self.get_total.execute()),
            );
        }
    }
}
