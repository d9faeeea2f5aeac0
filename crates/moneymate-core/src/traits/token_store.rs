// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistent credential storage.

use std::pin::Pin;

use async_trait::async_trait;
use futures_core::Stream;

use crate::error::Outcome;
use crate::types::{Credentials, CredentialsUpdate};

/// Stream of credential snapshots returned by [`TokenStore::observe`].
pub type CredentialStream = Pin<Box<dyn Stream<Item = Credentials> + Send>>;

/// Holds the access token, refresh token and user id across restarts.
///
/// Writes are serialized by the implementation. A reader never sees a
/// state in which only some of the fields written together have changed.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Last known credentials. Never blocks on I/O.
    fn read(&self) -> Credentials;

    /// Emits the current credentials immediately, then every change.
    ///
    /// Each call returns an independent stream that lives as long as the store.
    fn observe(&self) -> CredentialStream;

    /// Persists the supplied fields and leaves the others untouched.
    async fn write(&self, update: CredentialsUpdate) -> Outcome<()>;

    /// Removes all three fields in one step.
    async fn clear(&self) -> Outcome<()>;
}
