// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transaction and transfer payloads.

use chrono::{DateTime, NaiveDate, Utc};
use moneymate_core::model::{
    NewTransaction, NewTransfer, Transaction, TransactionType, TransferReceipt,
};
use moneymate_core::{CategoryId, TransactionId, UserId, WalletId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::codec;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDto {
    pub id: TransactionId,
    pub name: String,
    #[serde(with = "codec::amount")]
    pub amount: Decimal,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub transaction_date: NaiveDate,
    pub wallet_id: WalletId,
    pub category_id: CategoryId,
    pub user_id: UserId,
    #[serde(with = "codec::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub receipt_url: Option<String>,
}

impl From<TransactionDto> for Transaction {
    fn from(dto: TransactionDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            amount: dto.amount,
            note: dto.note,
            kind: dto.kind,
            transaction_date: dto.transaction_date,
            wallet_id: dto.wallet_id,
            category_id: dto.category_id,
            user_id: dto.user_id,
            created_at: dto.created_at,
            tags: dto.tags,
            receipt_url: dto.receipt_url,
        }
    }
}

impl From<Transaction> for TransactionDto {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id,
            name: tx.name,
            amount: tx.amount,
            note: tx.note,
            kind: tx.kind,
            transaction_date: tx.transaction_date,
            wallet_id: tx.wallet_id,
            category_id: tx.category_id,
            user_id: tx.user_id,
            created_at: tx.created_at,
            tags: tx.tags,
            receipt_url: tx.receipt_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferResponseDto {
    pub message: String,
    pub source_transaction: TransactionDto,
    pub destination_transaction: TransactionDto,
    #[serde(with = "codec::amount")]
    pub exchange_rate: Decimal,
    #[serde(with = "codec::amount")]
    pub converted_amount: Decimal,
}

impl From<TransferResponseDto> for TransferReceipt {
    fn from(dto: TransferResponseDto) -> Self {
        Self {
            message: dto.message,
            source_transaction: dto.source_transaction.into(),
            destination_transaction: dto.destination_transaction.into(),
            exchange_rate: dto.exchange_rate,
            converted_amount: dto.converted_amount,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TransactionCreateRequest {
    pub name: String,
    #[serde(with = "codec::amount")]
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub transaction_date: NaiveDate,
    pub wallet_id: WalletId,
    pub category_id: CategoryId,
    pub tags: Vec<i64>,
}

impl From<NewTransaction> for TransactionCreateRequest {
    fn from(tx: NewTransaction) -> Self {
        Self {
            name: tx.name,
            amount: tx.amount,
            note: tx.note,
            kind: tx.kind,
            transaction_date: tx.transaction_date,
            wallet_id: tx.wallet_id,
            category_id: tx.category_id,
            tags: tx.tag_ids.into_iter().map(|id| id.0).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TransferRequest {
    pub source_wallet_id: WalletId,
    pub destination_wallet_id: WalletId,
    #[serde(with = "codec::amount")]
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<NewTransfer> for TransferRequest {
    fn from(transfer: NewTransfer) -> Self {
        Self {
            source_wallet_id: transfer.source_wallet_id,
            destination_wallet_id: transfer.destination_wallet_id,
            amount: transfer.amount,
            note: transfer.note,
        }
    }
}
