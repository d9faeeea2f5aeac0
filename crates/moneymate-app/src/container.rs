// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Composition root.
//!
//! [`AppContainer`] wires the token store, the authenticated client and the
//! HTTP repositories once, then hands out screens that share them. Tests
//! build it from [`Repositories`] of their own.

use std::sync::Arc;

use moneymate_client::{
    AuthenticatedClient, HttpAnalyticsRepository, HttpAuthRepository, HttpBudgetRepository,
    HttpCategoryLimitRepository, HttpCategoryRepository, HttpFinancialSummaryRepository,
    HttpGoalRepository, HttpSavingsGoalRepository, HttpTagRepository, HttpTransactionRepository,
    HttpUserRepository, HttpWalletRepository,
};
use moneymate_config::model::MoneyMateConfig;
use moneymate_core::{
    AnalyticsRepository, AuthRepository, BudgetRepository, CategoryLimitRepository,
    CategoryRepository, FinancialSummaryRepository, GoalRepository, Outcome,
    SavingsGoalRepository, TagRepository, TokenStore, TransactionRepository, UserRepository,
    WalletRepository,
};
use tracing::info;

use crate::screens::{
    AnalyticsScreen, BudgetScreen, CategoriesScreen, GoalsScreen, ProfileScreen, SignInScreen,
    SignUpScreen, TransactionsScreen, WalletsScreen,
};
use crate::usecase::{CurrentSession, Session};

/// One handle per repository trait.
#[derive(Clone)]
pub struct Repositories {
    pub auth: Arc<dyn AuthRepository>,
    pub users: Arc<dyn UserRepository>,
    pub wallets: Arc<dyn WalletRepository>,
    pub transactions: Arc<dyn TransactionRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub budget: Arc<dyn BudgetRepository>,
    pub goals: Arc<dyn GoalRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub savings: Arc<dyn SavingsGoalRepository>,
    pub limits: Arc<dyn CategoryLimitRepository>,
    pub analytics: Arc<dyn AnalyticsRepository>,
    pub summary: Arc<dyn FinancialSummaryRepository>,
}

impl Repositories {
    /// HTTP repositories sharing one client.
    pub fn http(client: Arc<AuthenticatedClient>) -> Self {
        Self {
            auth: Arc::new(HttpAuthRepository::new(client.clone())),
            users: Arc::new(HttpUserRepository::new(client.clone())),
            wallets: Arc::new(HttpWalletRepository::new(client.clone())),
            transactions: Arc::new(HttpTransactionRepository::new(client.clone())),
            categories: Arc::new(HttpCategoryRepository::new(client.clone())),
            budget: Arc::new(HttpBudgetRepository::new(client.clone())),
            goals: Arc::new(HttpGoalRepository::new(client.clone())),
            tags: Arc::new(HttpTagRepository::new(client.clone())),
            savings: Arc::new(HttpSavingsGoalRepository::new(client.clone())),
            limits: Arc::new(HttpCategoryLimitRepository::new(client.clone())),
            analytics: Arc::new(HttpAnalyticsRepository::new(client.clone())),
            summary: Arc::new(HttpFinancialSummaryRepository::new(client)),
        }
    }
}

pub struct AppContainer {
    store: Arc<dyn TokenStore>,
    repos: Repositories,
    default_currency: String,
}

impl AppContainer {
    /// Opens the configured token store and builds the HTTP stack on it.
    pub async fn open(config: &MoneyMateConfig) -> Outcome<Self> {
        let store = moneymate_storage::open_token_store(&config.storage).await?;
        Self::with_store(config, store)
    }

    /// Builds the HTTP stack on an existing token store.
    pub fn with_store(config: &MoneyMateConfig, store: Arc<dyn TokenStore>) -> Outcome<Self> {
        let client = Arc::new(AuthenticatedClient::from_config(&config.api, store.clone())?);
        info!(base_url = client.base_url(), "client initialized");
        Ok(Self::from_parts(
            store,
            Repositories::http(client),
            config.app.default_currency.clone(),
        ))
    }

    pub fn from_parts(
        store: Arc<dyn TokenStore>,
        repos: Repositories,
        default_currency: impl Into<String>,
    ) -> Self {
        Self {
            store,
            repos,
            default_currency: default_currency.into(),
        }
    }

    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    pub fn repositories(&self) -> &Repositories {
        &self.repos
    }

    /// Currency used for new wallets and goals when the user gives none.
    pub fn default_currency(&self) -> &str {
        &self.default_currency
    }

    pub fn session(&self) -> Session {
        CurrentSession::new(self.repos.auth.clone()).execute()
    }

    pub fn sign_in_screen(&self) -> SignInScreen {
        SignInScreen::new(&self.repos)
    }

    pub fn sign_up_screen(&self) -> SignUpScreen {
        SignUpScreen::new(&self.repos)
    }

    pub fn wallets_screen(&self) -> WalletsScreen {
        WalletsScreen::new(&self.repos)
    }

    pub fn transactions_screen(&self) -> TransactionsScreen {
        TransactionsScreen::new(&self.repos)
    }

    pub fn goals_screen(&self) -> GoalsScreen {
        GoalsScreen::new(&self.repos)
    }

    pub fn budget_screen(&self) -> BudgetScreen {
        BudgetScreen::new(&self.repos)
    }

    pub fn categories_screen(&self) -> CategoriesScreen {
        CategoriesScreen::new(&self.repos)
    }

    pub fn profile_screen(&self) -> ProfileScreen {
        ProfileScreen::new(&self.repos)
    }

    pub fn analytics_screen(&self) -> AnalyticsScreen {
        AnalyticsScreen::new(&self.repos)
    }
}
