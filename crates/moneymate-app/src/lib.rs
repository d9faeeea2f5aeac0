// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application layer of the MoneyMate client.
//!
//! - [`usecase`]: one struct per user action, validating input before it
//!   reaches a repository.
//! - [`state`]: the `Idle -> Loading -> Success | Error` view state and the
//!   holder that drives it.
//! - [`screens`]: view models grouping use cases and state holders per screen.
//! - [`container`]: the composition root that wires everything to a token
//!   store and an authenticated client.

pub mod container;
pub mod screens;
pub mod state;
pub mod usecase;

pub use container::{AppContainer, Repositories};
pub use state::{Change, RunPolicy, StateHolder, ViewState};
pub use usecase::Session;
