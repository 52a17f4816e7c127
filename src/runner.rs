// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-Memory Execution Driver
//!
//! Holds one decider and its current state for the lifetime of the process.
//! Each submitted command is decided against the current state and the
//! resulting events are folded back in:
//!
//! ```text
//! submit(c):
//!     events ← decider.try_decide(c, state)
//!     state  ← fold(events, state, evolve)
//!     return events
//! ```
//!
//! The driver does not refuse commands on a terminal state; the decider
//! decides what a terminal state does with them (usually nothing).
//!
//! # Concurrency
//!
//! "Observe state, decide, evolve, commit" must be atomic per driver. Taking
//! `&mut self` gives that on one thread; callers sharing a driver across
//! threads wrap it in their own mutex.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut cats = InMemory::new(many::<String, _>(Cat));
//! cats.submit(("boulette".to_string(), CatCommand::GetToSleep))?;
//! cats.submit(("boulette".to_string(), CatCommand::WakeUp))?;
//! assert_eq!(cats.state().get("boulette"), Some(&CatState::Awake));
//! ```

use tracing::debug;

use crate::decider::Decider;
use crate::errors::DeciderResult;

/// Single-threaded, memory-only decider runner
pub struct InMemory<D: Decider> {
    decider: D,
    state: D::State,
}

impl<D> Clone for InMemory<D>
where
    D: Decider + Clone,
    D::State: Clone,
{
    fn clone(&self) -> Self {
        Self::with_state(self.decider.clone(), self.state.clone())
    }
}

impl<D> std::fmt::Debug for InMemory<D>
where
    D: Decider + std::fmt::Debug,
    D::State: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemory")
            .field("decider", &self.decider)
            .field("state", &self.state)
            .finish()
    }
}

impl<D: Decider> InMemory<D> {
    /// Create a runner starting from the decider's initial state
    pub fn new(decider: D) -> Self {
        let state = decider.initial_state();
        Self { decider, state }
    }

    /// Create a runner resuming from a known state
    pub fn with_state(decider: D, state: D::State) -> Self {
        Self { decider, state }
    }

    /// Handle a command, commit its events and return them
    ///
    /// On error the state is left untouched.
    pub fn submit(&mut self, command: D::Command) -> DeciderResult<Vec<D::Event>> {
        let events = self.decider.try_decide(&command, &self.state)?;

        for event in &events {
            self.state = self.decider.evolve(&self.state, event);
        }

        debug!(
            "Command produced {} events (terminal: {})",
            events.len(),
            self.decider.is_terminal(&self.state)
        );

        Ok(events)
    }

    /// Current state
    pub fn state(&self) -> &D::State {
        &self.state
    }

    /// True if the current state is terminal
    pub fn is_terminal(&self) -> bool {
        self.decider.is_terminal(&self.state)
    }

    /// The decider being driven
    pub fn decider(&self) -> &D {
        &self.decider
    }

    /// Consume the runner, keeping its final state
    pub fn into_state(self) -> D::State {
        self.state
    }
}
