//! Definition for the [`SolverOutcome`] type, implemented by an enum.

use serde::{Deserialize, Serialize};

/// How a search ended. Exactly one holds per solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolverOutcome {
    /// The goal was reached within the time budget.
    Solved,
    /// The time budget ran out before the goal was reached.
    Timeout,
    /// Every vertex reachable from the start was explored without
    /// reaching the goal.
    Unsolvable,
}
