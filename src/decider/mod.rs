// Copyright (c) 2025 - Cowboy AI, Inc.
//! Deciders - Pure Event-Sourced State Machines
//!
//! A decider is the atomic unit of behaviour in an event-sourced system. It is
//! a pair of pure functions plus a starting point:
//!
//! ```text
//! decide : (Command, State) → [Event]
//! evolve : (State, Event)   → State
//! initial_state : ()        → State
//! is_terminal : State       → bool
//! ```
//!
//! # Contract
//!
//! 1. **Total**: every `(command, state)` pair has an answer. A pair with no
//!    defined transition yields no events, it is not an error.
//! 2. **Pure**: no I/O, no clocks, no mutation of the input state.
//! 3. **Deterministic**: same inputs, same outputs.
//! 4. **Closed on no-op**: `evolve` with an event that matches no transition
//!    returns the input state unchanged (or a domain-specific error state).
//!
//! Domain failure is data. A decider that cannot go on evolves into a
//! terminal state describing why, rather than raising.
//!
//! # Combinators
//!
//! - [`Compose`]: product of two deciders routed by [`Either`](crate::Either)
//! - [`Many`]: a keyed collection of one decider type
//! - [`AdaptedDecider`]: translate between command/event/state vocabularies
//! - [`Map`], [`Map2`], [`apply`]: transform the output state
//!
//! The process/decider coupling lives in [`crate::process`].
//!
//! # Example
//!
//! ```rust,ignore
//! use cim_decider::{compose, Either, InMemory};
//!
//! let mut runner = InMemory::new(compose(Cat, Bulb));
//! runner.submit(Either::Left(CatCommand::GetToSleep))?;
//! runner.submit(Either::Right(BulbCommand::Fit { max_uses: 5 }))?;
//! ```

pub mod adapt;
pub mod compose;
pub mod many;
pub mod map;

pub use adapt::{adapt, AdaptedDecider};
pub use compose::{compose, Compose};
pub use many::{many, Many};
pub use map::{apply, map, map2, Map, Map2, StateFn};

use crate::errors::DeciderResult;

/// Pure decision-making state machine
///
/// Implementors are stateless values: the state a decider works on is always
/// passed in and handed back, never stored.
pub trait Decider {
    /// Intent to change the state
    type Command;

    /// Fact that happened
    type Event;

    /// Snapshot the decider works on
    type State;

    /// Canonical starting state
    fn initial_state(&self) -> Self::State;

    /// True when no further meaningful transitions are expected
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Events produced by handling `command` in `state`
    ///
    /// Returns an empty vector for pairs with no defined transition.
    fn decide(&self, command: &Self::Command, state: &Self::State) -> Vec<Self::Event>;

    /// State after applying `event` to `state`
    fn evolve(&self, state: &Self::State, event: &Self::Event) -> Self::State;

    /// Fallible variant of [`decide`](Decider::decide)
    ///
    /// Plain deciders never fail. Deciders built on a
    /// [`Combine`](crate::process::Combine) with an iteration cap report a
    /// saga that did not converge here instead of truncating silently.
    fn try_decide(
        &self,
        command: &Self::Command,
        state: &Self::State,
    ) -> DeciderResult<Vec<Self::Event>> {
        Ok(self.decide(command, state))
    }

    /// Fold a sequence of events into a state
    ///
    /// ```text
    /// State = fold(Events, state, evolve)
    /// ```
    fn fold<'a, I>(&self, state: Self::State, events: I) -> Self::State
    where
        Self: Sized,
        Self::Event: 'a,
        I: IntoIterator<Item = &'a Self::Event>,
    {
        events
            .into_iter()
            .fold(state, |state, event| self.evolve(&state, event))
    }
}

impl<D: Decider + ?Sized> Decider for &D {
    type Command = D::Command;
    type Event = D::Event;
    type State = D::State;

    fn initial_state(&self) -> Self::State {
        (**self).initial_state()
    }

    fn is_terminal(&self, state: &Self::State) -> bool {
        (**self).is_terminal(state)
    }

    fn decide(&self, command: &Self::Command, state: &Self::State) -> Vec<Self::Event> {
        (**self).decide(command, state)
    }

    fn evolve(&self, state: &Self::State, event: &Self::Event) -> Self::State {
        (**self).evolve(state, event)
    }

    fn try_decide(
        &self,
        command: &Self::Command,
        state: &Self::State,
    ) -> DeciderResult<Vec<Self::Event>> {
        (**self).try_decide(command, state)
    }
}

/// Decider whose input and output state types may differ
///
/// This is the shape produced by [`Map`], [`Map2`], [`apply`] and
/// [`AdaptedDecider`]. Use [`Decider`] unless you need the extra freedom;
/// [`Lifted`] and [`Closed`] convert between the two.
pub trait BaseDecider {
    /// Intent to change the state
    type Command;

    /// Fact that happened
    type Event;

    /// State consumed by `decide`, `evolve` and `is_terminal`
    type StateIn;

    /// State produced by `evolve` and `initial_state`
    type StateOut;

    /// Canonical starting state
    fn initial_state(&self) -> Self::StateOut;

    /// True when no further meaningful transitions are expected
    fn is_terminal(&self, state: &Self::StateIn) -> bool;

    /// Events produced by handling `command` in `state`
    fn decide(&self, command: &Self::Command, state: &Self::StateIn) -> Vec<Self::Event>;

    /// State after applying `event` to `state`
    fn evolve(&self, state: &Self::StateIn, event: &Self::Event) -> Self::StateOut;

    /// Fallible variant of [`decide`](BaseDecider::decide)
    fn try_decide(
        &self,
        command: &Self::Command,
        state: &Self::StateIn,
    ) -> DeciderResult<Vec<Self::Event>> {
        Ok(self.decide(command, state))
    }
}

/// A [`Decider`] seen as a [`BaseDecider`] with equal in/out state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lifted<D>(pub D);

/// Lift a decider into the [`BaseDecider`] world
pub fn lift<D: Decider>(decider: D) -> Lifted<D> {
    Lifted(decider)
}

impl<D: Decider> BaseDecider for Lifted<D> {
    type Command = D::Command;
    type Event = D::Event;
    type StateIn = D::State;
    type StateOut = D::State;

    fn initial_state(&self) -> Self::StateOut {
        self.0.initial_state()
    }

    fn is_terminal(&self, state: &Self::StateIn) -> bool {
        self.0.is_terminal(state)
    }

    fn decide(&self, command: &Self::Command, state: &Self::StateIn) -> Vec<Self::Event> {
        self.0.decide(command, state)
    }

    fn evolve(&self, state: &Self::StateIn, event: &Self::Event) -> Self::StateOut {
        self.0.evolve(state, event)
    }

    fn try_decide(
        &self,
        command: &Self::Command,
        state: &Self::StateIn,
    ) -> DeciderResult<Vec<Self::Event>> {
        self.0.try_decide(command, state)
    }
}

/// A [`BaseDecider`] whose input and output state coincide, usable as a [`Decider`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Closed<B>(pub B);

/// Close a base decider back into a [`Decider`]
pub fn close<B, S>(decider: B) -> Closed<B>
where
    B: BaseDecider<StateIn = S, StateOut = S>,
{
    Closed(decider)
}

impl<B, S> Decider for Closed<B>
where
    B: BaseDecider<StateIn = S, StateOut = S>,
{
    type Command = B::Command;
    type Event = B::Event;
    type State = S;

    fn initial_state(&self) -> S {
        self.0.initial_state()
    }

    fn is_terminal(&self, state: &S) -> bool {
        self.0.is_terminal(state)
    }

    fn decide(&self, command: &Self::Command, state: &S) -> Vec<Self::Event> {
        self.0.decide(command, state)
    }

    fn evolve(&self, state: &S, event: &Self::Event) -> S {
        self.0.evolve(state, event)
    }

    fn try_decide(&self, command: &Self::Command, state: &S) -> DeciderResult<Vec<Self::Event>> {
        self.0.try_decide(command, state)
    }
}

/// Decider that never does anything
///
/// Always terminal, emits no events, carries no state. Composing with it
/// leaves the other side's behaviour unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neutral;

impl Decider for Neutral {
    type Command = ();
    type Event = ();
    type State = ();

    fn initial_state(&self) {}

    fn is_terminal(&self, _state: &()) -> bool {
        true
    }

    fn decide(&self, _command: &(), _state: &()) -> Vec<()> {
        Vec::new()
    }

    fn evolve(&self, _state: &(), _event: &()) {}
}
