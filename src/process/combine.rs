// Copyright (c) 2025 - Cowboy AI, Inc.
//! Combine - Process/Decider Fixed Point
//!
//! Couples a [`Process`] with a [`Decider`] speaking the same command and event
//! vocabulary. The result is itself a decider whose state is the pair
//! `(decider_state, process_state)`.
//!
//! # Decide Loop
//!
//! ```text
//! queue ← [command]
//! while queue not empty:
//!     c       ← pop front
//!     events  ← decider.decide(c, decider_state)
//!     queue  ++ collect_fold(process, process_state, events)
//!     output ++ events
//! ```
//!
//! Every command is decided against the state the loop was started with; the
//! caller evolves the combined state with the returned events afterwards.
//! Commands run in FIFO order, so all events of one `decide` call are
//! contiguous and precede the events of the commands they triggered.
//!
//! # Termination
//!
//! A process that keeps re-triggering commands which keep producing events
//! never reaches a fixed point. By default nothing guards against this: the
//! process author owns termination. A [`SagaConfig`] with `max_iterations`
//! bounds the loop and reports [`DeciderError::SagaDidNotConverge`] from
//! [`Decider::try_decide`].
//!
//! # Evolve
//!
//! Both halves evolve independently on every event:
//!
//! ```text
//! evolve((ds, ps), e) = (decider.evolve(ds, e), process.evolve(ps, e))
//! ```

use std::collections::VecDeque;

use tracing::{trace, warn};

use super::{collect_fold, Process};
use crate::config::SagaConfig;
use crate::decider::Decider;
use crate::errors::{DeciderError, DeciderResult};

/// Decider driven to a fixed point by a process
#[derive(Debug, Clone, Default)]
pub struct Combine<P, D> {
    process: P,
    decider: D,
    config: SagaConfig,
}

/// Events gathered by one run of the decide loop
struct SagaRun<E> {
    events: Vec<E>,
    error: Option<DeciderError>,
}

impl<P, D> Combine<P, D> {
    /// Couple `process` with `decider`, unbounded
    pub fn new(process: P, decider: D) -> Self {
        Self {
            process,
            decider,
            config: SagaConfig::default(),
        }
    }

    /// Replace the loop configuration
    pub fn with_config(mut self, config: SagaConfig) -> Self {
        self.config = config;
        self
    }

    /// The coupled process
    pub fn process(&self) -> &P {
        &self.process
    }

    /// The coupled decider
    pub fn decider(&self) -> &D {
        &self.decider
    }

    /// Active loop configuration
    pub fn config(&self) -> &SagaConfig {
        &self.config
    }
}

/// Combine a process and a decider into a single decider
pub fn combine<P, D>(process: P, decider: D) -> Combine<P, D>
where
    D: Decider,
    P: Process<Command = D::Command, Event = D::Event>,
{
    Combine::new(process, decider)
}

impl<P, D> Combine<P, D>
where
    D: Decider,
    P: Process<Command = D::Command, Event = D::Event>,
{
    /// Commands an interrupted saga still owes, from a bare combined state
    pub fn resume(&self, (_, process_state): &(D::State, P::State)) -> Vec<D::Command> {
        self.process.resume(process_state)
    }

    fn run(
        &self,
        command: &D::Command,
        (decider_state, process_state): &(D::State, P::State),
    ) -> SagaRun<D::Event> {
        let mut events = Vec::new();
        let mut pending = VecDeque::new();

        let step = |command: &D::Command,
                    events: &mut Vec<D::Event>,
                    pending: &mut VecDeque<D::Command>|
         -> DeciderResult<()> {
            let produced = self.decider.try_decide(command, decider_state)?;
            pending.extend(collect_fold(&self.process, process_state, &produced));
            events.extend(produced);
            Ok(())
        };

        if let Err(error) = step(command, &mut events, &mut pending) {
            return SagaRun {
                events,
                error: Some(error),
            };
        }

        let mut iterations = 1;
        while !pending.is_empty() {
            if let Some(max) = self.config.max_iterations {
                if iterations >= max {
                    return SagaRun {
                        events,
                        error: Some(DeciderError::SagaDidNotConverge {
                            iterations,
                            pending: pending.len(),
                        }),
                    };
                }
            }

            let Some(next) = pending.pop_front() else {
                break;
            };
            if let Err(error) = step(&next, &mut events, &mut pending) {
                return SagaRun {
                    events,
                    error: Some(error),
                };
            }
            iterations += 1;
            trace!(
                "Saga iteration {} produced {} events so far, {} commands pending",
                iterations,
                events.len(),
                pending.len()
            );
        }

        SagaRun {
            events,
            error: None,
        }
    }
}

impl<P, D> Decider for Combine<P, D>
where
    D: Decider,
    P: Process<Command = D::Command, Event = D::Event>,
{
    type Command = D::Command;
    type Event = D::Event;
    type State = (D::State, P::State);

    fn initial_state(&self) -> Self::State {
        (self.decider.initial_state(), self.process.initial_state())
    }

    fn is_terminal(&self, (decider_state, process_state): &Self::State) -> bool {
        self.decider.is_terminal(decider_state) && self.process.is_terminal(process_state)
    }

    /// Runs the saga loop; on a capped run, returns the events gathered so far
    fn decide(&self, command: &Self::Command, state: &Self::State) -> Vec<Self::Event> {
        let run = self.run(command, state);
        if let Some(error) = run.error {
            warn!("Saga stopped early, returning partial events: {}", error);
        }
        run.events
    }

    fn evolve(
        &self,
        (decider_state, process_state): &Self::State,
        event: &Self::Event,
    ) -> Self::State {
        (
            self.decider.evolve(decider_state, event),
            self.process.evolve(process_state, event),
        )
    }

    fn try_decide(
        &self,
        command: &Self::Command,
        state: &Self::State,
    ) -> DeciderResult<Vec<Self::Event>> {
        let run = self.run(command, state);
        match run.error {
            Some(error) => Err(error),
            None => Ok(run.events),
        }
    }
}
