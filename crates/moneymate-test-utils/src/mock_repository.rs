// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory wallet repository for use-case and screen tests.
//!
//! `MockWalletRepository` implements `WalletRepository` over a `Vec`,
//! counts every call and can be told to fail or stall, so tests can assert
//! on what reached the repository without any HTTP.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use moneymate_core::model::{NewWallet, TotalBalance, Wallet, WalletUpdate};
use moneymate_core::{MoneyMateError, Outcome, UserId, WalletId, WalletRepository};
use rust_decimal::Decimal;
use tokio::sync::Mutex;

/// A wallet repository backed by a vector.
pub struct MockWalletRepository {
    wallets: Mutex<Vec<Wallet>>,
    calls: AtomicUsize,
    fail_next: Mutex<Option<MoneyMateError>>,
    delay: Mutex<Option<Duration>>,
}

impl MockWalletRepository {
    pub fn new() -> Self {
        Self::with_wallets(Vec::new())
    }

    pub fn with_wallets(wallets: Vec<Wallet>) -> Self {
        Self {
            wallets: Mutex::new(wallets),
            calls: AtomicUsize::new(0),
            fail_next: Mutex::new(None),
            delay: Mutex::new(None),
        }
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Number of repository calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The next call returns `err` instead of touching the data.
    pub async fn fail_next(&self, err: MoneyMateError) {
        *self.fail_next.lock().await = Some(err);
    }

    /// Every call sleeps for `delay` first.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.lock().await = Some(delay);
    }

    pub async fn snapshot(&self) -> Vec<Wallet> {
        self.wallets.lock().await.clone()
    }

    async fn enter(&self) -> Outcome<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.delay.lock().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match self.fail_next.lock().await.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for MockWalletRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// A wallet as the backend would return it.
pub fn wallet(id: i64, name: &str, balance: Decimal) -> Wallet {
    Wallet {
        id: WalletId(id),
        name: name.to_string(),
        currency: "USD".into(),
        wallet_type: moneymate_core::model::WalletType::DebitCard,
        balance,
        card_number: None,
        color: "#3B82F6".into(),
        user_id: UserId(7),
        created_at: DateTime::from_timestamp(1_735_787_045, 0).unwrap_or_default(),
    }
}

fn not_found() -> MoneyMateError {
    MoneyMateError::Http {
        status: 404,
        message: "Wallet not found".into(),
    }
}

#[async_trait]
impl WalletRepository for MockWalletRepository {
    async fn get_wallets(&self) -> Outcome<Vec<Wallet>> {
        self.enter().await?;
        Ok(self.wallets.lock().await.clone())
    }

    async fn get_wallet(&self, id: WalletId) -> Outcome<Wallet> {
        self.enter().await?;
        self.wallets
            .lock()
            .await
            .iter()
            .find(|w| w.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn create_wallet(&self, new: NewWallet) -> Outcome<Wallet> {
        self.enter().await?;
        let mut wallets = self.wallets.lock().await;
        let id = wallets.iter().map(|w| w.id.0).max().unwrap_or(0) + 1;
        let mut created = wallet(id, &new.name, new.balance);
        created.currency = new.currency;
        created.wallet_type = new.wallet_type;
        created.card_number = new.card_number;
        created.color = new.color;
        wallets.push(created.clone());
        Ok(created)
    }

    async fn update_wallet(&self, id: WalletId, update: WalletUpdate) -> Outcome<Wallet> {
        self.enter().await?;
        let mut wallets = self.wallets.lock().await;
        let existing = wallets.iter_mut().find(|w| w.id == id).ok_or_else(not_found)?;
        if let Some(name) = update.name {
            existing.name = name;
        }
        if let Some(currency) = update.currency {
            existing.currency = currency;
        }
        if let Some(kind) = update.wallet_type {
            existing.wallet_type = kind;
        }
        if let Some(balance) = update.balance {
            existing.balance = balance;
        }
        if let Some(card) = update.card_number {
            existing.card_number = Some(card);
        }
        if let Some(color) = update.color {
            existing.color = color;
        }
        Ok(existing.clone())
    }

    async fn delete_wallet(&self, id: WalletId) -> Outcome<()> {
        self.enter().await?;
        let mut wallets = self.wallets.lock().await;
        let before = wallets.len();
        wallets.retain(|w| w.id != id);
        if wallets.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn get_total_balance(&self) -> Outcome<TotalBalance> {
        self.enter().await?;
        let wallets = self.wallets.lock().await;
        Ok(TotalBalance {
            total_balance: wallets.iter().map(|w| w.balance).sum(),
            currency: "USD".into(),
            breakdown: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counts_calls_and_fails_once() {
        let repo = MockWalletRepository::with_wallets(vec![wallet(1, "Cash", Decimal::TEN)]);
        repo.fail_next(MoneyMateError::AuthExpired).await;

        assert!(matches!(
            repo.get_wallets().await,
            Err(MoneyMateError::AuthExpired)
        ));
        assert_eq!(repo.get_wallets().await.unwrap().len(), 1);
        assert_eq!(repo.calls(), 2);
    }

    #[tokio::test]
    async fn total_sums_balances() {
        let repo = MockWalletRepository::with_wallets(vec![
            wallet(1, "Cash", Decimal::new(1050, 2)),
            wallet(2, "Card", Decimal::new(250, 2)),
        ]);
        let total = repo.get_total_balance().await.unwrap();
        assert_eq!(total.total_balance, Decimal::new(1300, 2));
    }
}
