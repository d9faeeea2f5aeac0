// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Token store implementations for the MoneyMate client.
//!
//! [`SqliteTokenStore`] persists the session in a small SQLite file with
//! embedded migrations and a single-writer model via `tokio-rusqlite`.
//! [`MemoryTokenStore`] keeps it in process memory.

pub mod memory;
pub mod migrations;
mod observe;
pub mod sqlite;

use std::sync::Arc;

use moneymate_config::model::StorageConfig;
use moneymate_core::{Outcome, TokenStore};

pub use memory::MemoryTokenStore;
pub use sqlite::SqliteTokenStore;

/// Open the token store described by `config`.
pub async fn open_token_store(config: &StorageConfig) -> Outcome<Arc<dyn TokenStore>> {
    if config.in_memory {
        return Ok(Arc::new(MemoryTokenStore::new()));
    }
    let store = SqliteTokenStore::open(&config.token_store_path).await?;
    Ok(Arc::new(store))
}
