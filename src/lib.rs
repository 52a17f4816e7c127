//! Composable event-sourced deciders for the Composable Information Machine
//!
//! This crate provides the Decide/Evolve building blocks for event-sourced
//! domains, the combinators that assemble them into larger deciders, the
//! process (saga) coupling that drives a decider to a fixed point, and an
//! in-memory runner.
//!
//! - [`decider`]: the `Decider` contract, compose, many, adapt, map/map2/apply
//! - [`process`]: the `Process` contract, process adapt, process/decider combine
//! - [`runner`]: the `InMemory` execution driver

pub mod config;
pub mod decider;
pub mod either;
pub mod errors;
pub mod process;
pub mod runner;

// Re-export commonly used types
pub use config::SagaConfig;
pub use decider::{
    adapt, apply, close, compose, lift, many, map, map2, AdaptedDecider, BaseDecider, Closed,
    Compose, Decider, Lifted, Many, Map, Map2, Neutral, StateFn,
};
pub use either::Either;
pub use errors::{DeciderError, DeciderResult};
pub use process::{adapt_process, collect_fold, combine, AdaptedProcess, Combine, Process};
pub use runner::InMemory;
