// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite-backed token store.
//!
//! All writes are serialized through tokio-rusqlite's single background
//! thread. Each write or clear runs in one SQL transaction and publishes the
//! new snapshot from that same thread after commit, so a caller that is
//! cancelled mid-await never leaves the store half-written and readers never
//! see the published snapshot run ahead of the database.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use moneymate_core::{
    CredentialStream, Credentials, CredentialsUpdate, MoneyMateError, Outcome, Token, TokenStore,
};
use rusqlite::params;
use tokio::sync::watch;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::migrations;
use crate::observe::watch_stream;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_ID_KEY: &str = "user_id";

/// Convert a tokio-rusqlite error into MoneyMateError::Storage.
fn map_tr_err<E>(e: tokio_rusqlite::Error<E>) -> MoneyMateError
where
    E: std::error::Error + Send + Sync + 'static,
{
    MoneyMateError::Storage {
        source: Box::new(e),
    }
}

/// Token store persisted in a `preferences` table.
pub struct SqliteTokenStore {
    conn: tokio_rusqlite::Connection,
    state: Arc<watch::Sender<Credentials>>,
}

impl SqliteTokenStore {
    /// Open (or create) the store at `path`, running pending migrations.
    pub async fn open(path: impl AsRef<Path>) -> Outcome<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| MoneyMateError::Storage {
                source: Box::new(e),
            })?;
        }
        let conn = tokio_rusqlite::Connection::open(path)
            .await
            .map_err(|e| MoneyMateError::Storage {
                source: Box::new(e),
            })?;
        let store = Self::from_connection(conn).await?;
        info!(path = %path.display(), "token store opened");
        Ok(store)
    }

    /// Open a throwaway in-memory database.
    pub async fn open_in_memory() -> Outcome<Self> {
        let conn = tokio_rusqlite::Connection::open_in_memory()
            .await
            .map_err(|e| MoneyMateError::Storage {
                source: Box::new(e),
            })?;
        Self::from_connection(conn).await
    }

    /// Wrap an existing connection, migrating it and loading the stored session.
    pub async fn from_connection(conn: tokio_rusqlite::Connection) -> Outcome<Self> {
        conn.call(|conn| -> Result<(), refinery::Error> { migrations::run_migrations(conn) })
            .await
            .map_err(map_tr_err)?;

        let initial = conn
            .call(|conn| -> Result<Credentials, rusqlite::Error> {
                let mut stmt = conn.prepare("SELECT key, value FROM preferences")?;
                let rows = stmt.query_map([], |row| {
                    Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
                })?;
                let mut creds = Credentials::default();
                for row in rows {
                    let (key, value) = row?;
                    match key.as_str() {
                        ACCESS_TOKEN_KEY => creds.access_token = Token::from_stored(Some(value)),
                        REFRESH_TOKEN_KEY => creds.refresh_token = Token::from_stored(Some(value)),
                        USER_ID_KEY => creds.user_id = Some(value).filter(|v| !v.is_empty()),
                        _ => {}
                    }
                }
                Ok(creds)
            })
            .await
            .map_err(map_tr_err)?;

        debug!(signed_in = initial.is_signed_in(), "token store loaded");
        let (state, _) = watch::channel(initial);
        Ok(Self {
            conn,
            state: Arc::new(state),
        })
    }
}

fn update_rows(update: &CredentialsUpdate) -> Vec<(&'static str, Zeroizing<String>)> {
    let mut rows = Vec::with_capacity(3);
    if let Some(access) = &update.access_token {
        rows.push((ACCESS_TOKEN_KEY, Zeroizing::new(access.expose().to_string())));
    }
    if let Some(refresh) = &update.refresh_token {
        rows.push((REFRESH_TOKEN_KEY, Zeroizing::new(refresh.expose().to_string())));
    }
    if let Some(user_id) = &update.user_id {
        rows.push((USER_ID_KEY, Zeroizing::new(user_id.clone())));
    }
    rows
}

#[async_trait]
impl TokenStore for SqliteTokenStore {
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
        let rows = update_rows(&update);
        let state = Arc::clone(&self.state);

        self.conn
            .call(move |conn| -> Result<(), rusqlite::Error> {
                let tx = conn.transaction()?;
                for (key, value) in &rows {
                    tx.execute(
                        "INSERT INTO preferences (key, value) VALUES (?1, ?2) \
                         ON CONFLICT(key) DO UPDATE SET value = excluded.value, \
                         updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
                        params![*key, value.as_str()],
                    )?;
                }
                tx.commit()?;
                state.send_modify(|creds| update.apply_to(creds));
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;

        debug!("token store updated");
        Ok(())
    }

    async fn clear(&self) -> Outcome<()> {
        let state = Arc::clone(&self.state);

        self.conn
            .call(move |conn| -> Result<(), rusqlite::Error> {
                let tx = conn.transaction()?;
                tx.execute(
                    "DELETE FROM preferences WHERE key IN (?1, ?2, ?3)",
                    params![ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_ID_KEY],
                )?;
                tx.commit()?;
                state.send_replace(Credentials::default());
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;

        info!("token store cleared");
        Ok(())
    }
}
