// Copyright (c) 2025 - Cowboy AI, Inc.
//! Map, Map2 and Apply - State Transformers
//!
//! Functor and applicative combinators over the output state of a
//! [`BaseDecider`]. Commands, events and the input state are untouched; only
//! what `evolve` and `initial_state` produce is transformed.
//!
//! ```text
//! map(f, d).evolve(s, e)        = f(d.evolve(s, e))
//! map2(f, dx, dy).evolve(s, e)  = f(dx.evolve(s, e), dy.evolve(s, e))
//! map2(f, dx, dy).decide(c, s)  = dx.decide(c, s) ++ dy.decide(c, s)
//! apply(df, dx)                 = map2(|f, x| f(x), df, dx)
//! ```
//!
//! # Laws
//!
//! ```text
//! map id = id
//! map (g . f) = map g . map f
//! ```

use std::sync::Arc;

use super::BaseDecider;
use crate::errors::DeciderResult;

/// Function-valued state, as consumed by [`apply`]
pub type StateFn<A, B> = Arc<dyn Fn(A) -> B + Send + Sync>;

/// Decider whose output state is passed through `f`
#[derive(Debug, Clone, Copy)]
pub struct Map<F, D> {
    f: F,
    decider: D,
}

impl<F, D> Map<F, D> {
    /// Transform the output state of `decider` with `f`
    pub fn new(f: F, decider: D) -> Self {
        Self { f, decider }
    }
}

/// Transform the output state of a decider
pub fn map<F, D, SO>(f: F, decider: D) -> Map<F, D>
where
    D: BaseDecider,
    F: Fn(D::StateOut) -> SO,
{
    Map::new(f, decider)
}

impl<F, D, SO> BaseDecider for Map<F, D>
where
    D: BaseDecider,
    F: Fn(D::StateOut) -> SO,
{
    type Command = D::Command;
    type Event = D::Event;
    type StateIn = D::StateIn;
    type StateOut = SO;

    fn initial_state(&self) -> SO {
        (self.f)(self.decider.initial_state())
    }

    fn is_terminal(&self, state: &Self::StateIn) -> bool {
        self.decider.is_terminal(state)
    }

    fn decide(&self, command: &Self::Command, state: &Self::StateIn) -> Vec<Self::Event> {
        self.decider.decide(command, state)
    }

    fn evolve(&self, state: &Self::StateIn, event: &Self::Event) -> SO {
        (self.f)(self.decider.evolve(state, event))
    }

    fn try_decide(
        &self,
        command: &Self::Command,
        state: &Self::StateIn,
    ) -> DeciderResult<Vec<Self::Event>> {
        self.decider.try_decide(command, state)
    }
}

/// Two deciders over one vocabulary, output states merged by `f`
#[derive(Debug, Clone, Copy)]
pub struct Map2<F, DX, DY> {
    f: F,
    dx: DX,
    dy: DY,
}

impl<F, DX, DY> Map2<F, DX, DY> {
    /// Run `dx` and `dy` together, merging their output states with `f`
    pub fn new(f: F, dx: DX, dy: DY) -> Self {
        Self { f, dx, dy }
    }
}

/// Merge two deciders sharing commands, events and input state
pub fn map2<F, DX, DY, S>(f: F, dx: DX, dy: DY) -> Map2<F, DX, DY>
where
    DX: BaseDecider,
    DY: BaseDecider<Command = DX::Command, Event = DX::Event, StateIn = DX::StateIn>,
    F: Fn(DX::StateOut, DY::StateOut) -> S,
{
    Map2::new(f, dx, dy)
}

impl<F, DX, DY, S> BaseDecider for Map2<F, DX, DY>
where
    DX: BaseDecider,
    DY: BaseDecider<Command = DX::Command, Event = DX::Event, StateIn = DX::StateIn>,
    F: Fn(DX::StateOut, DY::StateOut) -> S,
{
    type Command = DX::Command;
    type Event = DX::Event;
    type StateIn = DX::StateIn;
    type StateOut = S;

    fn initial_state(&self) -> S {
        (self.f)(self.dx.initial_state(), self.dy.initial_state())
    }

    fn is_terminal(&self, state: &Self::StateIn) -> bool {
        self.dx.is_terminal(state) && self.dy.is_terminal(state)
    }

    /// Events of `dx` first, then events of `dy`
    fn decide(&self, command: &Self::Command, state: &Self::StateIn) -> Vec<Self::Event> {
        let mut events = self.dx.decide(command, state);
        events.extend(self.dy.decide(command, state));
        events
    }

    fn evolve(&self, state: &Self::StateIn, event: &Self::Event) -> S {
        (self.f)(self.dx.evolve(state, event), self.dy.evolve(state, event))
    }

    fn try_decide(
        &self,
        command: &Self::Command,
        state: &Self::StateIn,
    ) -> DeciderResult<Vec<Self::Event>> {
        let mut events = self.dx.try_decide(command, state)?;
        events.extend(self.dy.try_decide(command, state)?);
        Ok(events)
    }
}

fn call<A, B>(f: StateFn<A, B>, value: A) -> B {
    f(value)
}

/// Apply a decider producing functions to a decider producing values
pub fn apply<DF, DX, SO>(
    df: DF,
    dx: DX,
) -> Map2<fn(StateFn<DX::StateOut, SO>, DX::StateOut) -> SO, DF, DX>
where
    DX: BaseDecider,
    DF: BaseDecider<
        Command = DX::Command,
        Event = DX::Event,
        StateIn = DX::StateIn,
        StateOut = StateFn<DX::StateOut, SO>,
    >,
{
    let f: fn(StateFn<DX::StateOut, SO>, DX::StateOut) -> SO = call;
    Map2::new(f, df, dx)
}
