// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for MoneyMate integration tests.
//!
//! Provides a scripted backend and in-memory doubles for fast,
//! deterministic tests without a live server.
//!
//! # Components
//!
//! - [`MockBackend`] - wiremock server preloaded with MoneyMate routes
//! - [`MockWalletRepository`] - in-memory wallet repository with call counting
//! - [`TestHarness`] - backend, token store and container wired together
//! - [`fixtures`] - JSON bodies in the backend's wire format

pub mod fixtures;
pub mod harness;
pub mod mock_backend;
pub mod mock_repository;

pub use harness::TestHarness;
pub use mock_backend::MockBackend;
pub use mock_repository::MockWalletRepository;
