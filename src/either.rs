// Copyright (c) 2025 - Cowboy AI, Inc.
//! Either - Two-Variant Routing Tag
//!
//! `Either<L, R>` is the command and event vocabulary of a composed decider.
//! Every value sent into a [`Compose`](crate::decider::Compose) carries a tag
//! saying which half it belongs to.
//!
//! ```text
//! Either<CL, CR> ──┬── Left(c)  → left.decide(c, state.0)
//!                  └── Right(c) → right.decide(c, state.1)
//! ```
//!
//! The sum is closed: there is no third variant, so routing is checked
//! exhaustively at compile time.

use serde::{Deserialize, Serialize};

/// Value belonging to exactly one of two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Either<L, R> {
    /// Value for the left side
    Left(L),
    /// Value for the right side
    Right(R),
}

impl<L, R> Either<L, R> {
    /// True if this is a `Left`
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// True if this is a `Right`
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Borrow the left value, if any
    pub fn left(&self) -> Option<&L> {
        match self {
            Either::Left(value) => Some(value),
            Either::Right(_) => None,
        }
    }

    /// Borrow the right value, if any
    pub fn right(&self) -> Option<&R> {
        match self {
            Either::Left(_) => None,
            Either::Right(value) => Some(value),
        }
    }

    /// Borrow both sides
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => Either::Right(value),
        }
    }

    /// Transform the left value, leaving a right value untouched
    pub fn map_left<T>(self, f: impl FnOnce(L) -> T) -> Either<T, R> {
        match self {
            Either::Left(value) => Either::Left(f(value)),
            Either::Right(value) => Either::Right(value),
        }
    }

    /// Transform the right value, leaving a left value untouched
    pub fn map_right<T>(self, f: impl FnOnce(R) -> T) -> Either<L, T> {
        match self {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => Either::Right(f(value)),
        }
    }

    /// Collapse either side into a single value
    pub fn either<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
        match self {
            Either::Left(value) => on_left(value),
            Either::Right(value) => on_right(value),
        }
    }
}
