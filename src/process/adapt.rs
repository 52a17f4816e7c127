// Copyright (c) 2025 - Cowboy AI, Inc.
//! Adapt - Vocabulary Translation for Processes
//!
//! Lets a process written in its own small vocabulary listen to a decider's
//! events and issue that decider's commands:
//!
//! ```text
//!              select_event                  convert_command
//! E_outer ────────────────→ E_inner? ─react─→ C_inner ────────────────→ C_outer
//! ```
//!
//! An outer event the process does not select leaves its state unchanged and
//! triggers no commands. The process state type is not translated.

use std::marker::PhantomData;

use super::Process;

/// Process translated to an outer vocabulary
pub struct AdaptedProcess<P, FS, FC, E, C> {
    process: P,
    select_event: FS,
    convert_command: FC,
    _vocabulary: PhantomData<fn(&E) -> C>,
}

/// Adapt `process` to an outer vocabulary
///
/// # Arguments
///
/// * `select_event` - Outer event to inner event, `None` when irrelevant
/// * `convert_command` - Inner command to outer command
/// * `process` - The process being wrapped
///
/// # Examples
///
/// ```rust,ignore
/// let adapted = adapt_process(
///     |event: &Either<CatEvent, BulbEvent>| match event {
///         Either::Left(CatEvent::WokeUp) => Some(CatLightEvent::WokeUp),
///         Either::Right(BulbEvent::SwitchedOn) => Some(CatLightEvent::SwitchedOn),
///         _ => None,
///     },
///     |command: CatLightCommand| match command {
///         CatLightCommand::WakeUp => Either::Left(CatCommand::WakeUp),
///     },
///     CatLight,
/// );
/// ```
pub fn adapt_process<P, FS, FC, E, C>(
    select_event: FS,
    convert_command: FC,
    process: P,
) -> AdaptedProcess<P, FS, FC, E, C>
where
    P: Process,
    FS: Fn(&E) -> Option<P::Event>,
    FC: Fn(P::Command) -> C,
{
    AdaptedProcess {
        process,
        select_event,
        convert_command,
        _vocabulary: PhantomData,
    }
}

impl<P, FS, FC, E, C> AdaptedProcess<P, FS, FC, E, C> {
    /// The wrapped process
    pub fn inner(&self) -> &P {
        &self.process
    }
}

impl<P, FS, FC, E, C> Process for AdaptedProcess<P, FS, FC, E, C>
where
    P: Process,
    P::State: Clone,
    FS: Fn(&E) -> Option<P::Event>,
    FC: Fn(P::Command) -> C,
{
    type Command = C;
    type Event = E;
    type State = P::State;

    fn initial_state(&self) -> P::State {
        self.process.initial_state()
    }

    fn is_terminal(&self, state: &P::State) -> bool {
        self.process.is_terminal(state)
    }

    fn evolve(&self, state: &P::State, event: &E) -> P::State {
        match (self.select_event)(event) {
            Some(inner) => self.process.evolve(state, &inner),
            None => state.clone(),
        }
    }

    fn react(&self, state: &P::State, event: &E) -> Vec<C> {
        match (self.select_event)(event) {
            Some(inner) => self
                .process
                .react(state, &inner)
                .into_iter()
                .map(&self.convert_command)
                .collect(),
            None => Vec::new(),
        }
    }

    fn resume(&self, state: &P::State) -> Vec<C> {
        self.process
            .resume(state)
            .into_iter()
            .map(&self.convert_command)
            .collect()
    }
}
