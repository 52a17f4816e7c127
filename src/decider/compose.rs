// Copyright (c) 2025 - Cowboy AI, Inc.
//! Compose - Product of Two Deciders
//!
//! Runs two independent deciders side by side. Commands and events are tagged
//! with [`Either`] to say which half they belong to; the state is the pair of
//! both halves' states.
//!
//! ```text
//! Command: Either<CL, CR>     Event: Either<EL, ER>     State: (SL, SR)
//!
//! decide(Left(c),  (sl, sr)) = left.decide(c, sl)  wrapped in Left
//! decide(Right(c), (sl, sr)) = right.decide(c, sr) wrapped in Right
//! evolve((sl, sr), Left(e))  = (left.evolve(sl, e), sr)
//! evolve((sl, sr), Right(e)) = (sl, right.evolve(sr, e))
//! ```
//!
//! # Isolation
//!
//! A half is only ever read and written by its own decider. A `Left` event
//! never changes the right half of the state and vice versa.

use super::Decider;
use crate::either::Either;
use crate::errors::DeciderResult;

/// Product decider over two independent deciders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Compose<L, R> {
    left: L,
    right: R,
}

impl<L, R> Compose<L, R> {
    /// Combine `left` and `right` into one decider
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Decider handling `Left` commands
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Decider handling `Right` commands
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Split back into the two halves
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

/// Compose two deciders into one
///
/// # Examples
///
/// ```rust,ignore
/// let cat_and_bulb = compose(Cat, Bulb);
/// let events = cat_and_bulb.decide(
///     &Either::Right(BulbCommand::Fit { max_uses: 5 }),
///     &cat_and_bulb.initial_state(),
/// );
/// ```
pub fn compose<L, R>(left: L, right: R) -> Compose<L, R>
where
    L: Decider,
    R: Decider,
{
    Compose::new(left, right)
}

impl<L, R> Decider for Compose<L, R>
where
    L: Decider,
    R: Decider,
    L::State: Clone,
    R::State: Clone,
{
    type Command = Either<L::Command, R::Command>;
    type Event = Either<L::Event, R::Event>;
    type State = (L::State, R::State);

    fn initial_state(&self) -> Self::State {
        (self.left.initial_state(), self.right.initial_state())
    }

    fn is_terminal(&self, (left, right): &Self::State) -> bool {
        self.left.is_terminal(left) && self.right.is_terminal(right)
    }

    fn decide(&self, command: &Self::Command, (left, right): &Self::State) -> Vec<Self::Event> {
        match command {
            Either::Left(command) => tag(self.left.decide(command, left), Either::Left),
            Either::Right(command) => tag(self.right.decide(command, right), Either::Right),
        }
    }

    fn evolve(&self, (left, right): &Self::State, event: &Self::Event) -> Self::State {
        match event {
            Either::Left(event) => (self.left.evolve(left, event), right.clone()),
            Either::Right(event) => (left.clone(), self.right.evolve(right, event)),
        }
    }

    fn try_decide(
        &self,
        command: &Self::Command,
        (left, right): &Self::State,
    ) -> DeciderResult<Vec<Self::Event>> {
        Ok(match command {
            Either::Left(command) => tag(self.left.try_decide(command, left)?, Either::Left),
            Either::Right(command) => tag(self.right.try_decide(command, right)?, Either::Right),
        })
    }
}

fn tag<E, T>(events: Vec<E>, wrap: impl Fn(E) -> T) -> Vec<T> {
    events.into_iter().map(wrap).collect()
}
