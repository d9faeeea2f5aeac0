// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Observable view state for one screen action.
//!
//! Every action moves through `Idle -> Loading -> Success | Error`. A
//! [`StateHolder`] owns the current [`ViewState`], publishes changes through a
//! tokio watch channel, and remembers the last successful value so a failed
//! reload does not blank the screen.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use moneymate_core::{ErrorInfo, Outcome};
use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;

/// States of a screen action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum ViewState<T> {
    /// Nothing requested yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request succeeded.
    Success(T),
    /// The last request failed.
    Error(ErrorInfo),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            Self::Error(info) => Some(info),
            _ => None,
        }
    }

    /// Short lowercase name of the state, for logs.
    pub fn phase(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Error(_) => "error",
        }
    }
}

impl<T> std::fmt::Display for ViewState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.phase())
    }
}

/// What a holder does when an action starts while another is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPolicy {
    /// The new call is ignored; its caller waits for and receives the
    /// in-flight result. Used for loads.
    DropWhileInFlight,
    /// Every call runs; only the most recently started one may publish.
    /// Used for mutations.
    Independent,
}

/// Result of a mutation that may save or remove an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "change", content = "value", rename_all = "snake_case")]
pub enum Change<T> {
    Saved(T),
    Removed,
}

/// Owns one [`ViewState`] and runs actions against it.
pub struct StateHolder<T> {
    name: &'static str,
    policy: RunPolicy,
    state: watch::Sender<ViewState<T>>,
    last_loaded: watch::Sender<Option<T>>,
    generation: AtomicU64,
    in_flight: watch::Sender<bool>,
}

impl<T> StateHolder<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(name: &'static str, policy: RunPolicy) -> Self {
        let (state, _) = watch::channel(ViewState::Idle);
        let (last_loaded, _) = watch::channel(None);
        let (in_flight, _) = watch::channel(false);
        Self {
            name,
            policy,
            state,
            last_loaded,
            generation: AtomicU64::new(0),
            in_flight,
        }
    }

    /// Holder for a load action.
    pub fn loader(name: &'static str) -> Self {
        Self::new(name, RunPolicy::DropWhileInFlight)
    }

    /// Holder for a mutating action.
    pub fn mutation(name: &'static str) -> Self {
        Self::new(name, RunPolicy::Independent)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn policy(&self) -> RunPolicy {
        self.policy
    }

    pub fn current(&self) -> ViewState<T> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<T>> {
        self.state.subscribe()
    }

    /// The most recent successful value, kept across later failures.
    pub fn last_loaded(&self) -> Option<T> {
        self.last_loaded.borrow().clone()
    }

    /// Return to `Idle`, forgetting the last loaded value.
    pub fn reset(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.last_loaded.send_replace(None);
        self.publish(ViewState::Idle);
    }

    /// Run `action`, publishing `Loading` and then its outcome.
    ///
    /// Returns the state this call ended up observing.
    pub async fn run<F>(&self, action: F) -> ViewState<T>
    where
        F: Future<Output = Outcome<T>>,
    {
        match self.policy {
            RunPolicy::DropWhileInFlight => self.run_exclusive(action).await,
            RunPolicy::Independent => self.run_latest(action).await,
        }
    }

    /// Like [`run`](Self::run), but never settles for a load that was already
    /// in flight when this call started. Screens use it after a mutation so
    /// the reloaded value includes the change.
    pub async fn reload<F>(&self, action: F) -> ViewState<T>
    where
        F: Future<Output = Outcome<T>>,
    {
        if self.policy == RunPolicy::DropWhileInFlight {
            self.settled().await;
        }
        self.run(action).await
    }

    async fn run_exclusive<F>(&self, action: F) -> ViewState<T>
    where
        F: Future<Output = Outcome<T>>,
    {
        let claimed = self.in_flight.send_if_modified(|busy| !std::mem::replace(busy, true));
        if !claimed {
            debug!(holder = self.name, "action already in flight, waiting for it");
            return self.settled().await;
        }
        self.run_guarded(action, true).await
    }

    async fn run_latest<F>(&self, action: F) -> ViewState<T>
    where
        F: Future<Output = Outcome<T>>,
    {
        self.run_guarded(action, false).await
    }

    async fn run_guarded<F>(&self, action: F, exclusive: bool) -> ViewState<T>
    where
        F: Future<Output = Outcome<T>>,
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let mut guard = RunGuard {
            holder: self,
            generation,
            exclusive,
            finished: false,
        };
        self.publish(ViewState::Loading);
        let outcome = action.await;
        guard.finished = true;
        self.finish(generation, outcome)
    }

    /// Publish `outcome` if no newer run has started since `generation`.
    fn finish(&self, generation: u64, outcome: Outcome<T>) -> ViewState<T> {
        let state = match outcome {
            Ok(value) => ViewState::Success(value),
            Err(err) => ViewState::Error(ErrorInfo::from(err)),
        };
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(holder = self.name, "superseded result discarded");
            return state;
        }
        if let ViewState::Success(value) = &state {
            self.last_loaded.send_replace(Some(value.clone()));
        }
        self.publish(state.clone());
        state
    }

    /// Waits until the owning run releases the in-flight flag. The result is
    /// published before the flag is released.
    async fn settled(&self) -> ViewState<T> {
        let mut rx = self.in_flight.subscribe();
        // The sender lives in `self`, so the wait cannot fail.
        let _ = rx.wait_for(|busy| !*busy).await;
        self.current()
    }

    fn publish(&self, state: ViewState<T>) {
        debug!(holder = self.name, state = state.phase(), "view state changed");
        self.state.send_replace(state);
    }
}

/// Undoes `Loading` and releases the in-flight flag if a run is dropped
/// before its action completes.
struct RunGuard<'a, T>
where
    T: Clone + Send + Sync + 'static,
{
    holder: &'a StateHolder<T>,
    generation: u64,
    exclusive: bool,
    finished: bool,
}

impl<T> Drop for RunGuard<'_, T>
where
    T: Clone + Send + Sync + 'static,
{
    fn drop(&mut self) {
        if !self.finished
            && self.holder.generation.load(Ordering::SeqCst) == self.generation
        {
            debug!(holder = self.holder.name, "action cancelled");
            self.holder.publish(ViewState::Idle);
        }
        if self.exclusive {
            self.holder.in_flight.send_replace(false);
        }
    }
}
