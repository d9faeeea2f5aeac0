// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-local token store.

use async_trait::async_trait;
use moneymate_core::{CredentialStream, Credentials, CredentialsUpdate, Outcome, TokenStore};
use tokio::sync::watch;
use tracing::debug;

use crate::observe::watch_stream;

/// Keeps credentials in memory only. Used for tests and `storage.in_memory`.
pub struct MemoryTokenStore {
    state: watch::Sender<Credentials>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::with_credentials(Credentials::default())
    }

    /// Starts from an existing session.
    pub fn with_credentials(credentials: Credentials) -> Self {
        let (state, _) = watch::channel(credentials);
        Self { state }
    }
}

impl Default for MemoryTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    fn read(&self) -> Credentials {
        self.state.borrow().clone()
    }

    fn observe(&self) -> CredentialStream {
        watch_stream(self.state.subscribe())
    }

    async fn write(&self, update: CredentialsUpdate) -> Outcome<()> {
        if update.is_noop() {
            return Ok(());
        }
        self.state.send_modify(|creds| update.apply_to(creds));
        debug!("memory token store updated");
        Ok(())
    }

    async fn clear(&self) -> Outcome<()> {
        self.state.send_replace(Credentials::default());
        debug!("memory token store cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use moneymate_core::Token;

    #[tokio::test]
    async fn write_then_read_returns_written_tokens() {
        let store = MemoryTokenStore::new();
        store
            .write(CredentialsUpdate::signed_in(
                Token::new("AT1"),
                Some(Token::new("RT1")),
                Some("7".into()),
            ))
            .await
            .unwrap();
        let creds = store.read();
        assert_eq!(creds.access_token, Some(Token::new("AT1")));
        assert_eq!(creds.refresh_token, Some(Token::new("RT1")));
        assert_eq!(creds.user_id.as_deref(), Some("7"));
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let store = MemoryTokenStore::with_credentials(Credentials {
            access_token: Some(Token::new("AT1")),
            refresh_token: Some(Token::new("RT1")),
            user_id: Some("7".into()),
        });
        store.clear().await.unwrap();
        assert!(store.read().is_empty());
    }

    #[tokio::test]
    async fn observe_emits_current_then_changes() {
        let store = MemoryTokenStore::new();
        let mut stream = store.observe();
        assert!(stream.next().await.unwrap().is_empty());

        store
            .write(CredentialsUpdate::rotated(Token::new("AT2"), None))
            .await
            .unwrap();
        let next = stream.next().await.unwrap();
        assert_eq!(next.access_token, Some(Token::new("AT2")));
    }

    #[tokio::test]
    async fn observe_is_restartable() {
        let store = MemoryTokenStore::new();
        store
            .write(CredentialsUpdate::rotated(Token::new("AT3"), None))
            .await
            .unwrap();
        for _ in 0..2 {
            let mut stream = store.observe();
            let first = stream.next().await.unwrap();
            assert_eq!(first.access_token, Some(Token::new("AT3")));
        }
    }
}
