// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wallet payloads.

use chrono::{DateTime, Utc};
use moneymate_core::model::{
    BalanceBreakdown, NewWallet, TotalBalance, Wallet, WalletType, WalletUpdate,
};
use moneymate_core::{UserId, WalletId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::codec;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletDto {
    pub id: WalletId,
    pub name: String,
    pub currency: String,
    pub wallet_type: WalletType,
    #[serde(with = "codec::amount")]
    pub balance: Decimal,
    #[serde(default)]
    pub card_number: Option<String>,
    pub color: String,
    pub user_id: UserId,
    #[serde(with = "codec::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl From<WalletDto> for Wallet {
    fn from(dto: WalletDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            currency: dto.currency,
            wallet_type: dto.wallet_type,
            balance: dto.balance,
            card_number: dto.card_number,
            color: dto.color,
            user_id: dto.user_id,
            created_at: dto.created_at,
        }
    }
}

impl From<Wallet> for WalletDto {
    fn from(wallet: Wallet) -> Self {
        Self {
            id: wallet.id,
            name: wallet.name,
            currency: wallet.currency,
            wallet_type: wallet.wallet_type,
            balance: wallet.balance,
            card_number: wallet.card_number,
            color: wallet.color,
            user_id: wallet.user_id,
            created_at: wallet.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceBreakdownDto {
    pub wallet_id: WalletId,
    pub wallet_name: String,
    pub wallet_type: WalletType,
    #[serde(with = "codec::amount")]
    pub original_balance: Decimal,
    pub original_currency: String,
    #[serde(with = "codec::amount")]
    pub converted_balance: Decimal,
    pub converted_currency: String,
    #[serde(with = "codec::amount")]
    pub exchange_rate_used: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalBalanceDto {
    #[serde(with = "codec::amount")]
    pub total_balance: Decimal,
    pub currency: String,
    #[serde(default)]
    pub breakdown: Vec<BalanceBreakdownDto>,
}

impl From<TotalBalanceDto> for TotalBalance {
    fn from(dto: TotalBalanceDto) -> Self {
        Self {
            total_balance: dto.total_balance,
            currency: dto.currency,
            breakdown: dto
                .breakdown
                .into_iter()
                .map(|b| BalanceBreakdown {
                    wallet_id: b.wallet_id,
                    wallet_name: b.wallet_name,
                    wallet_type: b.wallet_type,
                    original_balance: b.original_balance,
                    original_currency: b.original_currency,
                    converted_balance: b.converted_balance,
                    converted_currency: b.converted_currency,
                    exchange_rate_used: b.exchange_rate_used,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WalletCreateRequest {
    pub name: String,
    pub currency: String,
    pub wallet_type: WalletType,
    #[serde(with = "codec::amount")]
    pub balance: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    pub color: String,
}

impl From<NewWallet> for WalletCreateRequest {
    fn from(wallet: NewWallet) -> Self {
        Self {
            name: wallet.name,
            currency: wallet.currency,
            wallet_type: wallet.wallet_type,
            balance: wallet.balance,
            card_number: wallet.card_number,
            color: wallet.color,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct WalletUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_type: Option<WalletType>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "codec::opt_amount::serialize"
    )]
    pub balance: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl From<WalletUpdate> for WalletUpdateRequest {
    fn from(update: WalletUpdate) -> Self {
        Self {
            name: update.name,
            currency: update.currency,
            wallet_type: update.wallet_type,
            balance: update.balance,
            card_number: update.card_number,
            color: update.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_balance_accepts_float_amounts() {
        let dto: TotalBalanceDto = serde_json::from_str(
            r#"{"total_balance":1520.75,"currency":"USD","breakdown":[
                {"wallet_id":1,"wallet_name":"Cash","wallet_type":"cash",
                 "original_balance":1400.0,"original_currency":"EUR",
                 "converted_balance":1520.75,"converted_currency":"USD",
                 "exchange_rate_used":1.08625}]}"#,
        )
        .unwrap();
        let total = TotalBalance::from(dto);
        assert_eq!(total.total_balance, Decimal::new(152075, 2));
        assert_eq!(total.breakdown[0].exchange_rate_used, Decimal::new(108625, 5));
    }

    #[test]
    fn unknown_wallet_type_is_a_decode_error_not_a_panic() {
        let result = serde_json::from_str::<WalletDto>(
            r##"{"id":1,"name":"X","currency":"USD","wallet_type":"crypto","balance":"1",
                "color":"#000000","user_id":7,"created_at":"2025-01-01T00:00:00"}"##,
        );
        assert!(result.is_err());
    }

    #[test]
    fn create_request_sends_balance_as_string() {
        let req = WalletCreateRequest::from(NewWallet {
            name: "Cash".into(),
            currency: "USD".into(),
            wallet_type: WalletType::Cash,
            balance: Decimal::new(1050, 2),
            card_number: None,
            color: "#3B82F6".into(),
        });
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["balance"], "10.50");
        assert_eq!(json["wallet_type"], "cash");
        assert!(json.get("card_number").is_none());
    }
}
