// Copyright (c) 2025 - Cowboy AI, Inc.
//! Processes - Reactive Sagas over Decider Events
//!
//! A process watches the events a decider emits and answers with follow-up
//! commands. It has the same purity contract as a decider, but its
//! decision function (`react`) returns commands instead of events.
//!
//! ```text
//! evolve : (State, Event) → State
//! react  : (State, Event) → [Command]
//! resume : State          → [Command]
//! ```
//!
//! `resume` recovers the commands an in-flight saga still owes from a bare
//! state, e.g. one rebuilt from stored events after a restart. The in-memory
//! runner never calls it; it belongs to the contract for recovery tooling.
//!
//! # Coupling
//!
//! [`Combine`] joins a process and a decider into a single decider that runs
//! the react → decide loop to a fixed point. [`AdaptedProcess`] translates
//! a process's vocabulary onto the decider's.

pub mod adapt;
pub mod combine;

pub use adapt::{adapt_process, AdaptedProcess};
pub use combine::{combine, Combine};

/// Reactive state machine turning events into follow-up commands
pub trait Process {
    /// Command the process asks for
    type Command;

    /// Event the process observes
    type Event;

    /// Saga progress
    type State;

    /// Starting state of the saga
    fn initial_state(&self) -> Self::State;

    /// True when the saga has run to completion
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// State after observing `event`
    fn evolve(&self, state: &Self::State, event: &Self::Event) -> Self::State;

    /// Commands to issue in reaction to `event`
    ///
    /// Called with the state *after* `event` was applied.
    fn react(&self, state: &Self::State, event: &Self::Event) -> Vec<Self::Command>;

    /// Commands needed to continue a saga left in `state`
    fn resume(&self, state: &Self::State) -> Vec<Self::Command>;
}

impl<P: Process + ?Sized> Process for &P {
    type Command = P::Command;
    type Event = P::Event;
    type State = P::State;

    fn initial_state(&self) -> Self::State {
        (**self).initial_state()
    }

    fn is_terminal(&self, state: &Self::State) -> bool {
        (**self).is_terminal(state)
    }

    fn evolve(&self, state: &Self::State, event: &Self::Event) -> Self::State {
        (**self).evolve(state, event)
    }

    fn react(&self, state: &Self::State, event: &Self::Event) -> Vec<Self::Command> {
        (**self).react(state, event)
    }

    fn resume(&self, state: &Self::State) -> Vec<Self::Command> {
        (**self).resume(state)
    }
}

/// Fold a batch of events through a process, collecting its reactions
///
/// Starting from `state`, each event is first applied with `evolve`, then
/// `react` is asked for commands against the advanced state. Commands are
/// returned in event order.
pub fn collect_fold<P: Process>(
    process: &P,
    state: &P::State,
    events: &[P::Event],
) -> Vec<P::Command> {
    let mut commands = Vec::new();
    let mut advanced: Option<P::State> = None;

    for event in events {
        let next = process.evolve(advanced.as_ref().unwrap_or(state), event);
        commands.extend(process.react(&next, event));
        advanced = Some(next);
    }

    commands
}
