//! Error types shared across the crate.
//!
//! Search outcomes such as [`SolverOutcome::Timeout`] are not errors;
//! see [`crate::types::outcome`].
//!
//! [`SolverOutcome::Timeout`]: crate::types::outcome::SolverOutcome::Timeout

use thiserror::Error;

/// Misuse of a [`MinHeapPQ`](crate::utils::priority_queue::MinHeapPQ).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("priority queue is empty")]
    Empty,

    #[error("item already present in priority queue: {0}")]
    DuplicateItem(String),

    #[error("item not present in priority queue: {0}")]
    MissingItem(String),
}

/// Errors raised while building or querying the routing structures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    /// A spatial index needs at least one point.
    #[error("cannot build a spatial index from an empty point set")]
    EmptyPointSet,

    #[error("node not found by id: {0}")]
    UnknownNode(i64),

    #[error(transparent)]
    Queue(#[from] QueueError),
}

pub type Result<T, E = RouterError> = std::result::Result<T, E>;
