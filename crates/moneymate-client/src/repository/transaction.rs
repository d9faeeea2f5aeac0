// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use async_trait::async_trait;
use moneymate_core::model::{NewTransaction, NewTransfer, Transaction, TransferReceipt};
use moneymate_core::{Outcome, TagId, TransactionId, TransactionRepository, WalletId};

use crate::dto::{TransactionCreateRequest, TransactionDto, TransferRequest, TransferResponseDto};
use crate::http::{ApiRequest, AuthenticatedClient};

pub struct HttpTransactionRepository {
    client: Arc<AuthenticatedClient>,
}

impl HttpTransactionRepository {
    pub fn new(client: Arc<AuthenticatedClient>) -> Self {
        Self { client }
    }

    async fn list(&self, path: String) -> Outcome<Vec<Transaction>> {
        let dtos: Vec<TransactionDto> = self.client.fetch(ApiRequest::get(path)).await?;
        Ok(dtos.into_iter().map(Transaction::from).collect())
    }
}

#[async_trait]
impl TransactionRepository for HttpTransactionRepository {
    async fn get_transactions(&self) -> Outcome<Vec<Transaction>> {
        self.list("/api/transactions/".into()).await
    }

    async fn get_wallet_transactions(&self, wallet: WalletId) -> Outcome<Vec<Transaction>> {
        self.list(format!("/api/transactions/wallet/{wallet}")).await
    }

    async fn get_transactions_by_tag(&self, tag: TagId) -> Outcome<Vec<Transaction>> {
        self.list(format!("/api/transactions/filter/by-tag/{tag}"))
            .await
    }

    async fn create_transaction(&self, transaction: NewTransaction) -> Outcome<Transaction> {
        let request = ApiRequest::post("/api/transactions/")
            .json(&TransactionCreateRequest::from(transaction))?;
        let dto: TransactionDto = self.client.fetch(request).await?;
        Ok(dto.into())
    }

    async fn delete_transaction(&self, id: TransactionId) -> Outcome<()> {
        self.client
            .execute(ApiRequest::delete(format!("/api/transactions/{id}")))
            .await
    }

    async fn create_transfer(&self, transfer: NewTransfer) -> Outcome<TransferReceipt> {
        let request =
            ApiRequest::post("/api/transactions/transfer").json(&TransferRequest::from(transfer))?;
        let dto: TransferResponseDto = self.client.fetch(request).await?;
        Ok(dto.into())
    }
}
