// Copyright (c) 2025 - Cowboy AI, Inc.
//! Saga execution configuration

use serde::{Deserialize, Serialize};

use crate::errors::{DeciderError, DeciderResult};

/// Environment variable holding the saga iteration cap
pub const MAX_ITERATIONS_ENV: &str = "CIM_DECIDER_SAGA_MAX_ITERATIONS";

/// Configuration for the process/decider fixed-point loop
///
/// By default the loop is unbounded: a process that keeps re-triggering
/// commands will never return. Setting `max_iterations` turns that into a
/// [`DeciderError::SagaDidNotConverge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SagaConfig {
    /// Maximum number of commands handled for a single submitted command
    #[serde(default)]
    pub max_iterations: Option<usize>,
}

impl SagaConfig {
    /// Create an unbounded configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the iteration cap
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Load configuration from environment variables
    ///
    /// An absent variable leaves the loop unbounded.
    pub fn from_env() -> DeciderResult<Self> {
        match std::env::var(MAX_ITERATIONS_ENV) {
            Ok(raw) => Self::parse_max_iterations(&raw)
                .map(|max| Self::new().with_max_iterations(max)),
            Err(std::env::VarError::NotPresent) => Ok(Self::new()),
            Err(err) => Err(DeciderError::Configuration(format!(
                "{MAX_ITERATIONS_ENV}: {err}"
            ))),
        }
    }

    /// Parse configuration from a JSON document
    pub fn from_json(json: &str) -> DeciderResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn parse_max_iterations(raw: &str) -> DeciderResult<usize> {
        raw.trim().parse::<usize>().map_err(|err| {
            DeciderError::Configuration(format!("{MAX_ITERATIONS_ENV}={raw:?}: {err}"))
        })
    }
}
