// Copyright (c) 2025 - Cowboy AI, Inc.
//! Adapt - Vocabulary Translation for Deciders
//!
//! Wraps an inner decider so it can be driven with an outer command, event
//! and state vocabulary:
//!
//! ```text
//!            fci                 feo
//! C_outer ─────────→ C_inner ─decide─→ E_inner ─────────→ E_outer
//!            fsi                 fei
//! S_outer ─────────→ S_inner     E_outer ─────────→ E_inner?
//! ```
//!
//! Translation into the inner vocabulary is partial. A command or event the
//! inner decider has no word for is silently ignored: `decide` yields no
//! events and `evolve` returns the translated state unchanged.
//!
//! The adapted decider consumes outer state and produces inner state, so it
//! is a [`BaseDecider`]. When the two coincide, [`close`](super::close) makes
//! it a [`Decider`] again.

use std::marker::PhantomData;

use super::{BaseDecider, Decider};
use crate::errors::DeciderResult;

/// Decider translated to an outer vocabulary
pub struct AdaptedDecider<D, FC, FE, FO, FS, C, E, S> {
    decider: D,
    command_in: FC,
    event_in: FE,
    event_out: FO,
    state_in: FS,
    _vocabulary: PhantomData<fn(&C, &E, &S)>,
}

/// Adapt `decider` to an outer vocabulary
///
/// # Arguments
///
/// * `command_in` - Outer command to inner command, `None` when irrelevant
/// * `event_in` - Outer event to inner event, `None` when irrelevant
/// * `event_out` - Inner event to outer event
/// * `state_in` - Outer state to inner state
/// * `decider` - The decider being wrapped
pub fn adapt<D, FC, FE, FO, FS, C, E, S>(
    command_in: FC,
    event_in: FE,
    event_out: FO,
    state_in: FS,
    decider: D,
) -> AdaptedDecider<D, FC, FE, FO, FS, C, E, S>
where
    D: Decider,
    FC: Fn(&C) -> Option<D::Command>,
    FE: Fn(&E) -> Option<D::Event>,
    FO: Fn(D::Event) -> E,
    FS: Fn(&S) -> D::State,
{
    AdaptedDecider {
        decider,
        command_in,
        event_in,
        event_out,
        state_in,
        _vocabulary: PhantomData,
    }
}

impl<D, FC, FE, FO, FS, C, E, S> AdaptedDecider<D, FC, FE, FO, FS, C, E, S> {
    /// The wrapped decider
    pub fn inner(&self) -> &D {
        &self.decider
    }
}

impl<D, FC, FE, FO, FS, C, E, S> BaseDecider for AdaptedDecider<D, FC, FE, FO, FS, C, E, S>
where
    D: Decider,
    FC: Fn(&C) -> Option<D::Command>,
    FE: Fn(&E) -> Option<D::Event>,
    FO: Fn(D::Event) -> E,
    FS: Fn(&S) -> D::State,
{
    type Command = C;
    type Event = E;
    type StateIn = S;
    type StateOut = D::State;

    fn initial_state(&self) -> D::State {
        self.decider.initial_state()
    }

    fn is_terminal(&self, state: &S) -> bool {
        self.decider.is_terminal(&(self.state_in)(state))
    }

    fn decide(&self, command: &C, state: &S) -> Vec<E> {
        match (self.command_in)(command) {
            Some(inner) => self
                .decider
                .decide(&inner, &(self.state_in)(state))
                .into_iter()
                .map(&self.event_out)
                .collect(),
            None => Vec::new(),
        }
    }

    fn evolve(&self, state: &S, event: &E) -> D::State {
        let inner_state = (self.state_in)(state);
        match (self.event_in)(event) {
            Some(inner) => self.decider.evolve(&inner_state, &inner),
            None => inner_state,
        }
    }

    fn try_decide(&self, command: &C, state: &S) -> DeciderResult<Vec<E>> {
        let Some(inner) = (self.command_in)(command) else {
            return Ok(Vec::new());
        };
        let events = self.decider.try_decide(&inner, &(self.state_in)(state))?;
        Ok(events.into_iter().map(&self.event_out).collect())
    }
}
