// Copyright (c) 2025 - Cowboy AI, Inc.
//! Many - Keyed Collection of One Decider Type
//!
//! Multiplexes a single decider over an identifier space. Commands and events
//! are `(id, inner)` pairs; the state maps each identifier to that instance's
//! state.
//!
//! ```text
//! decide((id, c), m) = [(id, e) | e ← d.decide(c, m[id] or d.initial_state())]
//! evolve(m, (id, e)) = m + { id ↦ d.evolve(m[id] or d.initial_state(), e) }
//! ```
//!
//! # Lazy Instances
//!
//! A missing key is equivalent to a fresh instance. `decide` reads the default
//! without inserting it; only `evolve` writes an entry. Looking up a key that
//! was never evolved therefore behaves exactly like an explicitly initialized
//! instance, and the map holds only instances that actually received events.
//!
//! The map is an `im::OrdMap`: evolving shares structure with the previous
//! state instead of copying every instance, and iteration order is the key
//! order, which keeps `is_terminal` and debug output deterministic.

use std::marker::PhantomData;

use im::OrdMap;

use super::Decider;
use crate::errors::DeciderResult;

/// Decider managing many instances of `D`, keyed by `I`
pub struct Many<I, D> {
    decider: D,
    _id: PhantomData<fn() -> I>,
}

impl<I, D> Many<I, D> {
    /// Multiplex `decider` over identifiers of type `I`
    pub fn new(decider: D) -> Self {
        Self {
            decider,
            _id: PhantomData,
        }
    }

    /// The per-instance decider
    pub fn decider(&self) -> &D {
        &self.decider
    }
}

impl<I, D> Many<I, D>
where
    I: Ord + Clone,
    D: Decider,
    D::State: Clone,
{
    /// State of instance `id`, defaulting to a fresh instance
    pub fn state_of(&self, state: &OrdMap<I, D::State>, id: &I) -> D::State {
        state
            .get(id)
            .cloned()
            .unwrap_or_else(|| self.decider.initial_state())
    }

    fn with_instance<T>(
        &self,
        state: &OrdMap<I, D::State>,
        id: &I,
        f: impl FnOnce(&D::State) -> T,
    ) -> T {
        match state.get(id) {
            Some(instance) => f(instance),
            None => f(&self.decider.initial_state()),
        }
    }
}

impl<I, D: Clone> Clone for Many<I, D> {
    fn clone(&self) -> Self {
        Self::new(self.decider.clone())
    }
}

impl<I, D: std::fmt::Debug> std::fmt::Debug for Many<I, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Many")
            .field("decider", &self.decider)
            .finish()
    }
}

/// Manage many instances of `decider`, addressed by identifier
///
/// # Examples
///
/// ```rust,ignore
/// let cats = many::<String, _>(Cat);
/// let events = cats.decide(
///     &("boulette".to_string(), CatCommand::GetToSleep),
///     &cats.initial_state(),
/// );
/// ```
pub fn many<I, D>(decider: D) -> Many<I, D>
where
    I: Ord + Clone,
    D: Decider,
    D::State: Clone,
{
    Many::new(decider)
}

impl<I, D> Decider for Many<I, D>
where
    I: Ord + Clone,
    D: Decider,
    D::State: Clone,
{
    type Command = (I, D::Command);
    type Event = (I, D::Event);
    type State = OrdMap<I, D::State>;

    fn initial_state(&self) -> Self::State {
        OrdMap::new()
    }

    /// Vacuously true for an empty collection
    fn is_terminal(&self, state: &Self::State) -> bool {
        state
            .values()
            .all(|instance| self.decider.is_terminal(instance))
    }

    fn decide(&self, (id, command): &Self::Command, state: &Self::State) -> Vec<Self::Event> {
        self.with_instance(state, id, |instance| self.decider.decide(command, instance))
            .into_iter()
            .map(|event| (id.clone(), event))
            .collect()
    }

    fn evolve(&self, state: &Self::State, (id, event): &Self::Event) -> Self::State {
        let next = self.with_instance(state, id, |instance| self.decider.evolve(instance, event));
        state.update(id.clone(), next)
    }

    fn try_decide(
        &self,
        (id, command): &Self::Command,
        state: &Self::State,
    ) -> DeciderResult<Vec<Self::Event>> {
        let events = self.with_instance(state, id, |instance| {
            self.decider.try_decide(command, instance)
        })?;
        Ok(events.into_iter().map(|event| (id.clone(), event)).collect())
    }
}
