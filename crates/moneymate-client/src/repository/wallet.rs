// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use async_trait::async_trait;
use moneymate_core::model::{NewWallet, TotalBalance, Wallet, WalletUpdate};
use moneymate_core::{Outcome, WalletId, WalletRepository};

use crate::dto::{TotalBalanceDto, WalletCreateRequest, WalletDto, WalletUpdateRequest};
use crate::http::{ApiRequest, AuthenticatedClient};

pub struct HttpWalletRepository {
    client: Arc<AuthenticatedClient>,
}

impl HttpWalletRepository {
    pub fn new(client: Arc<AuthenticatedClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WalletRepository for HttpWalletRepository {
    async fn get_wallets(&self) -> Outcome<Vec<Wallet>> {
        let dtos: Vec<WalletDto> = self.client.fetch(ApiRequest::get("/api/wallets/")).await?;
        Ok(dtos.into_iter().map(Wallet::from).collect())
    }

    async fn get_wallet(&self, id: WalletId) -> Outcome<Wallet> {
        let dto: WalletDto = self
            .client
            .fetch(ApiRequest::get(format!("/api/wallets/{id}")))
            .await?;
        Ok(dto.into())
    }

    async fn create_wallet(&self, wallet: NewWallet) -> Outcome<Wallet> {
        let request = ApiRequest::post("/api/wallets/").json(&WalletCreateRequest::from(wallet))?;
        let dto: WalletDto = self.client.fetch(request).await?;
        Ok(dto.into())
    }

    async fn update_wallet(&self, id: WalletId, update: WalletUpdate) -> Outcome<Wallet> {
        let request = ApiRequest::put(format!("/api/wallets/{id}"))
            .json(&WalletUpdateRequest::from(update))?;
        let dto: WalletDto = self.client.fetch(request).await?;
        Ok(dto.into())
    }

    async fn delete_wallet(&self, id: WalletId) -> Outcome<()> {
        self.client
            .execute(ApiRequest::delete(format!("/api/wallets/{id}")))
            .await
    }

    async fn get_total_balance(&self) -> Outcome<TotalBalance> {
        let dto: TotalBalanceDto = self
            .client
            .fetch(ApiRequest::get("/api/wallets/user/total"))
            .await?;
        Ok(dto.into())
    }
}
