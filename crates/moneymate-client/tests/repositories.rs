// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Repository behaviour against a wiremock backend.

use std::sync::Arc;

use chrono::NaiveDate;
use moneymate_client::{
    AuthenticatedClient, HttpAnalyticsRepository, HttpAuthRepository, HttpBudgetRepository,
    HttpCategoryLimitRepository, HttpFinancialSummaryRepository, HttpGoalRepository,
    HttpTagRepository, HttpTransactionRepository, HttpUserRepository, HttpWalletRepository,
};
use moneymate_config::model::ApiConfig;
use moneymate_core::model::{NewTransfer, SpendingPeriod, TransactionType, WalletType};
use moneymate_core::validation;
use moneymate_core::{
    AnalyticsRepository, AuthRepository, BudgetRepository, CategoryId, CategoryLimitRepository,
    Credentials, ErrorKind, FinancialSummaryRepository, GoalRepository, INVALID_CREDENTIALS,
    MoneyMateError, TagId, TagRepository, Token, TokenStore, TransactionRepository,
    UserRepository, WalletId, WalletRepository,
};
use moneymate_storage::MemoryTokenStore;
use rust_decimal::Decimal;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, store: Arc<MemoryTokenStore>) -> Arc<AuthenticatedClient> {
    let config = ApiConfig {
        base_url: server.uri(),
        ..ApiConfig::default()
    };
    Arc::new(AuthenticatedClient::from_config(&config, store).unwrap())
}

fn signed_in() -> Arc<MemoryTokenStore> {
    Arc::new(MemoryTokenStore::with_credentials(Credentials {
        access_token: Some(Token::new("AT1")),
        refresh_token: Some(Token::new("RT1")),
        user_id: Some("7".into()),
    }))
}

fn user_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "email": "ana@example.com",
        "full_name": "Ana",
        "phone_number": null,
        "date_of_birth": null,
        "avatar_url": null,
        "default_currency": "USD",
        "is_active": true,
        "created_at": "2025-01-02T03:04:05.123456"
    })
}

fn wallet_json(id: i64, name: &str, balance: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "currency": "USD",
        "wallet_type": "debit_card",
        "balance": balance,
        "card_number": null,
        "color": "#3B82F6",
        "user_id": 7,
        "created_at": "2025-01-02T03:04:05"
    })
}

fn transaction_json(id: i64, wallet: i64, kind: &str, amount: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Transfer",
        "amount": amount,
        "note": null,
        "type": kind,
        "transaction_date": "2025-02-01",
        "wallet_id": wallet,
        "category_id": 1,
        "user_id": 7,
        "created_at": "2025-02-01T09:00:00",
        "tags": [],
        "receipt_url": null
    })
}

#[tokio::test]
async fn sign_in_stores_tokens_and_user_id_from_profile() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(query_param("email", "ana@example.com"))
        .and(query_param("password", "secret1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "AT1", "refresh_token": "RT1", "token_type": "bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .and(header("authorization", "Bearer AT1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(7)))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let repo = HttpAuthRepository::new(client(&server, store.clone()));
    let creds = repo.sign_in("ana@example.com", "secret1").await.unwrap();

    assert_eq!(creds.user_id.as_deref(), Some("7"));
    assert_eq!(store.read().access_token, Some(Token::new("AT1")));
    assert_eq!(store.read().refresh_token, Some(Token::new("RT1")));
    assert!(repo.is_signed_in());
    assert_eq!(repo.current_user_id().as_deref(), Some("7"));
}

#[tokio::test]
async fn sign_in_uses_user_id_from_token_response_when_present() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "AT1", "refreshToken": "RT1", "userId": "7"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(99)))
        .expect(0)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let repo = HttpAuthRepository::new(client(&server, store.clone()));
    repo.sign_in("ana@example.com", "secret1").await.unwrap();
    assert_eq!(store.read().user_id.as_deref(), Some("7"));
}

#[tokio::test]
async fn failed_sign_in_stores_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Incorrect email or password"})),
        )
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let repo = HttpAuthRepository::new(client(&server, store.clone()));
    let err = repo.sign_in("ana@example.com", "wrong1").await.unwrap_err();

    match err {
        MoneyMateError::Http { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, INVALID_CREDENTIALS);
        }
        other => panic!("expected Http error, got {other:?}"),
    }
    assert!(store.read().is_empty());
}

#[tokio::test]
async fn sign_out_clears_store_even_when_backend_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let store = signed_in();
    let repo = HttpAuthRepository::new(client(&server, store.clone()));
    repo.sign_out().await.unwrap();
    assert!(store.read().is_empty());
    assert!(!repo.is_signed_in());
}

#[tokio::test]
async fn wallets_are_mapped_to_domain() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/wallets/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            wallet_json(1, "Main", "1200.50"),
            wallet_json(2, "Savings", "0.00"),
        ])))
        .mount(&server)
        .await;

    let repo = HttpWalletRepository::new(client(&server, signed_in()));
    let wallets = repo.get_wallets().await.unwrap();
    assert_eq!(wallets.len(), 2);
    assert_eq!(wallets[0].balance, Decimal::new(120050, 2));
    assert_eq!(wallets[0].wallet_type, WalletType::DebitCard);
    assert_eq!(wallets[1].id, WalletId(2));
}

#[tokio::test]
async fn missing_wallet_surfaces_http_404_with_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/wallets/42"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Wallet not found"})))
        .mount(&server)
        .await;

    let repo = HttpWalletRepository::new(client(&server, signed_in()));
    let err = repo.get_wallet(WalletId(42)).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("Wallet not found"));
}

#[tokio::test]
async fn delete_accepts_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/wallets/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let repo = HttpWalletRepository::new(client(&server, signed_in()));
    repo.delete_wallet(WalletId(3)).await.unwrap();
}

#[tokio::test]
async fn empty_success_body_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/budget/current"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let repo = HttpBudgetRepository::new(client(&server, signed_in()));
    let err = repo.get_current_budget().await.unwrap_err();
    assert!(matches!(err, MoneyMateError::EmptyResponse));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/goals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "x"}])))
        .mount(&server)
        .await;

    let repo = HttpGoalRepository::new(client(&server, signed_in()));
    let err = repo.get_goals().await.unwrap_err();
    assert!(matches!(err, MoneyMateError::Decode { .. }));
}

#[tokio::test]
async fn transfer_sends_decimal_string_and_parses_float_rate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/transactions/transfer"))
        .and(body_json(json!({
            "source_wallet_id": 1,
            "destination_wallet_id": 2,
            "amount": "100.00"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Transfer completed",
            "source_transaction": transaction_json(10, 1, "expense", "100.00"),
            "destination_transaction": transaction_json(11, 2, "income", "92.50"),
            "exchange_rate": 0.925,
            "converted_amount": 92.5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let repo = HttpTransactionRepository::new(client(&server, signed_in()));
    let receipt = repo
        .create_transfer(NewTransfer {
            source_wallet_id: WalletId(1),
            destination_wallet_id: WalletId(2),
            amount: Decimal::new(10000, 2),
            note: None,
        })
        .await
        .unwrap();

    assert_eq!(receipt.exchange_rate, Decimal::new(925, 3));
    assert_eq!(receipt.converted_amount, Decimal::new(925, 1));
    assert_eq!(receipt.source_transaction.kind, TransactionType::Expense);
    assert_eq!(receipt.destination_transaction.wallet_id, WalletId(2));
}

#[tokio::test]
async fn transactions_by_tag_use_filter_route() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/transactions/filter/by-tag/5"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([transaction_json(1, 1, "expense", "3.20")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let repo = HttpTransactionRepository::new(client(&server, signed_in()));
    let txs = repo.get_transactions_by_tag(TagId(5)).await.unwrap();
    assert_eq!(txs.len(), 1);
}

#[tokio::test]
async fn tag_create_and_delete() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tags/"))
        .and(body_json(json!({"name": "travel"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": 4, "name": "travel", "user_id": 7})),
        )
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/tags/4"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let repo = HttpTagRepository::new(client(&server, signed_in()));
    let tag = repo.create_tag("travel").await.unwrap();
    assert_eq!(tag.id, TagId(4));
    repo.delete_tag(tag.id).await.unwrap();
}

#[tokio::test]
async fn category_limit_set_returns_setting() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/limits/3"))
        .and(body_json(json!({"monthly_limit": "250"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1, "category_id": 3, "user_id": 7, "monthly_limit": "250.00"
        })))
        .mount(&server)
        .await;

    let repo = HttpCategoryLimitRepository::new(client(&server, signed_in()));
    let setting = repo
        .set_category_limit(CategoryId(3), Decimal::from(250))
        .await
        .unwrap();
    assert_eq!(setting.category_id, CategoryId(3));
    assert_eq!(setting.monthly_limit, Decimal::new(25000, 2));
}

#[tokio::test]
async fn delete_avatar_returns_updated_user() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/me/avatar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(7)))
        .mount(&server)
        .await;

    let repo = HttpUserRepository::new(client(&server, signed_in()));
    let user = repo.delete_avatar().await.unwrap();
    assert!(user.avatar_url.is_none());
}

#[tokio::test]
async fn upload_avatar_posts_the_image_as_a_form_file() {
    let server = MockServer::start().await;
    let mut updated = user_json(7);
    updated["avatar_url"] = json!("/static/avatars/7_abc.png");
    Mock::given(method("POST"))
        .and(path("/api/users/me/avatar"))
        .and(header("authorization", "Bearer AT1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .expect(1)
        .mount(&server)
        .await;

    let repo = HttpUserRepository::new(client(&server, signed_in()));
    let upload = validation::avatar("me.png", b"\x89PNG".to_vec()).unwrap();
    let user = repo.upload_avatar(upload).await.unwrap();
    assert_eq!(user.avatar_url.as_deref(), Some("/static/avatars/7_abc.png"));

    let received = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&received[0].body);
    assert!(body.contains(r#"name="file"; filename="me.png""#));
    assert!(body.contains("Content-Type: image/png"));
}

#[tokio::test]
async fn oversized_avatar_rejection_surfaces_backend_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/me/avatar"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"detail": "File size must be less than 5MB"})),
        )
        .mount(&server)
        .await;

    let repo = HttpUserRepository::new(client(&server, signed_in()));
    let upload = validation::avatar("me.gif", vec![1; 16]).unwrap();
    let err = repo.upload_avatar(upload).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Http);
    match err {
        MoneyMateError::Http { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "File size must be less than 5MB");
        }
        other => panic!("expected Http, got {other:?}"),
    }
}

#[tokio::test]
async fn category_summary_sends_the_date_range() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/category-summary"))
        .and(query_param("start_date", "2025-01-01"))
        .and(query_param("end_date", "2025-01-31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "expenses": [{"category_id": 2, "category_name": "Food", "category_type": "expense",
                          "total_amount": 40.25, "transaction_count": 3}],
            "incomes": [{"category_id": 9, "category_name": "Salary", "category_type": "income",
                         "total_amount": 1500.0, "transaction_count": 1}],
            "total_expenses": 40.25,
            "total_incomes": 1500.0,
            "net_flow": 1459.75
        })))
        .expect(1)
        .mount(&server)
        .await;

    let repo = HttpAnalyticsRepository::new(client(&server, signed_in()));
    let range = validation::date_range("2025-01-01", "2025-01-31").unwrap();
    let summary = repo.get_category_summary(range).await.unwrap();
    assert_eq!(summary.expenses[0].category_id, CategoryId(2));
    assert_eq!(summary.incomes[0].kind, TransactionType::Income);
    assert_eq!(summary.net_flow, Decimal::new(145975, 2));
}

#[tokio::test]
async fn monthly_comparison_formats_the_month() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/monthly-comparison"))
        .and(query_param("month", "2025-03"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "category_id": 2, "category_name": "Food",
            "current_month_amount": 120.0, "previous_month_amount": 100.0,
            "difference": 20.0, "percentage_change": 20.0
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let repo = HttpAnalyticsRepository::new(client(&server, signed_in()));
    let march = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
    let rows = repo.get_monthly_comparison(march).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].difference, Decimal::from(20));
}

#[tokio::test]
async fn trend_reports_pass_the_month_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/spending-trends"))
        .and(query_param("months", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "monthly_summary": [],
            "summary": {"total_spent": 0.0, "total_income": 0.0, "net_flow": 0.0,
                        "average_monthly_spent": 0.0, "months_analyzed": 3},
            "analysis_period": {"start_date": "2025-01-01", "end_date": "2025-03-31",
                                "months_analyzed": 3}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/savings-trends"))
        .and(query_param("months", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "monthly_trends": [{"year": 2025, "month": 3, "display_name": "Mar 2025",
                                "saved_amount": 150.0, "target_amount": 200.0,
                                "achievement_rate": 75.0}],
            "months_analyzed": 3,
            "analysis_period": {"start_date": "2025-01-01", "end_date": "2025-03-31"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let repo = HttpAnalyticsRepository::new(client(&server, signed_in()));
    let spending = repo.get_spending_trends(3).await.unwrap();
    assert!(spending.months.is_empty());
    assert_eq!(spending.months_analyzed, 3);
    let savings = repo.get_savings_trends(3).await.unwrap();
    assert_eq!(savings.months[0].achievement_rate, Decimal::from(75));
    assert_eq!(savings.start_date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
}

#[tokio::test]
async fn top_and_average_spending_reports() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/top-categories/current-month"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"category_id": 2, "category_name": "Food", "total_amount": 80.5}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/average-spending"))
        .and(query_param("period", "month"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"category_id": 2, "category_name": "Food", "average_monthly_spending": 75.0,
             "total_period_spent": 900.0, "transactions": 40, "period_type": "month"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let repo = HttpAnalyticsRepository::new(client(&server, signed_in()));
    let top = repo.get_top_categories().await.unwrap();
    assert_eq!(top[0].total_amount, Decimal::new(805, 1));
    let averages = repo.get_average_spending(SpendingPeriod::Month).await.unwrap();
    assert_eq!(averages[0].average_monthly_spending, Some(Decimal::from(75)));
    assert_eq!(averages[0].average_daily_spending, None);
}

#[tokio::test]
async fn current_financial_summary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/financial_summary/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1, "month": 3, "year": 2025,
            "total_income": "2000.00", "total_spent": "450.10", "total_saved": "300.00",
            "created_at": "2025-03-01T00:00:00"
        })))
        .mount(&server)
        .await;

    let repo = HttpFinancialSummaryRepository::new(client(&server, signed_in()));
    let summary = repo.get_current_summary().await.unwrap();
    assert_eq!(summary.month, 3);
    assert_eq!(summary.total_spent, Decimal::new(45010, 2));
}
