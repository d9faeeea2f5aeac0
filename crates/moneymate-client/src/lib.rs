// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backend adapter for the MoneyMate client.
//!
//! This crate provides the [`AuthenticatedClient`] with single-flight token
//! refresh, the wire DTOs and the HTTP repositories built on both.

pub mod dto;
pub mod http;
pub mod repository;

pub use http::{ApiRequest, ApiResponse, AuthenticatedClient, FilePart};
pub use repository::{
    HttpAnalyticsRepository, HttpAuthRepository, HttpBudgetRepository,
    HttpCategoryLimitRepository, HttpCategoryRepository, HttpFinancialSummaryRepository,
    HttpGoalRepository, HttpSavingsGoalRepository, HttpTagRepository, HttpTransactionRepository,
    HttpUserRepository, HttpWalletRepository,
};
