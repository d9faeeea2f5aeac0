// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end client tests.
//!
//! `TestHarness` assembles the full client stack (token store,
//! authenticated client, HTTP repositories, container) against a
//! [`MockBackend`], optionally starting from an existing session.

use std::sync::Arc;

use moneymate_app::{AppContainer, Repositories};
use moneymate_config::model::MoneyMateConfig;
use moneymate_core::{Credentials, Outcome, Token, TokenStore, WalletRepository};
use moneymate_storage::MemoryTokenStore;

use crate::mock_backend::MockBackend;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    credentials: Credentials,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            credentials: Credentials::default(),
        }
    }

    /// Start signed in with the given tokens and user id.
    pub fn signed_in(mut self, access: &str, refresh: &str, user_id: &str) -> Self {
        self.credentials = Credentials {
            access_token: Some(Token::new(access)),
            refresh_token: Some(Token::new(refresh)),
            user_id: Some(user_id.to_string()),
        };
        self
    }

    /// Start the backend and wire the client stack to it.
    pub async fn build(self) -> Outcome<TestHarness> {
        let backend = MockBackend::start().await;
        let config = backend.config();
        let store = Arc::new(MemoryTokenStore::with_credentials(self.credentials));
        let container = AppContainer::with_store(&config, store.clone())?;
        Ok(TestHarness {
            backend,
            store,
            container,
            config,
        })
    }
}

/// A complete test environment: scripted backend plus the real client stack.
pub struct TestHarness {
    /// The scripted backend.
    pub backend: MockBackend,
    /// Token store shared by every repository.
    pub store: Arc<MemoryTokenStore>,
    /// Container wired to `backend`.
    pub container: AppContainer,
    /// Configuration the container was built from.
    pub config: MoneyMateConfig,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    pub fn repositories(&self) -> &Repositories {
        self.container.repositories()
    }

    /// A container sharing this harness's store but with `wallets` in place
    /// of the HTTP wallet repository.
    pub fn with_wallets(&self, wallets: Arc<dyn WalletRepository>) -> AppContainer {
        let repos = Repositories {
            wallets,
            ..self.container.repositories().clone()
        };
        AppContainer::from_parts(
            self.store.clone() as Arc<dyn TokenStore>,
            repos,
            self.container.default_currency(),
        )
    }
}
