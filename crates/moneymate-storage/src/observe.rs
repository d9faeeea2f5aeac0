// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turns a watch channel into the stream handed out by `TokenStore::observe`.

use futures::stream;
use moneymate_core::{CredentialStream, Credentials};
use tokio::sync::watch;

/// Yields the current value first, then the latest value after every change.
///
/// Rapid successive changes may be coalesced; the last one is always seen.
/// The stream ends when the owning store is dropped.
pub(crate) fn watch_stream(rx: watch::Receiver<Credentials>) -> CredentialStream {
    Box::pin(stream::unfold((rx, true), |(mut rx, first)| async move {
        if !first {
            rx.changed().await.ok()?;
        }
        let current = rx.borrow_and_update().clone();
        Some((current, (rx, false)))
    }))
}
