//! The capability a graph must provide to be searched by
//! [`AStarSolver`](crate::AStarSolver).
//!
//! Since the data source can be anything from a street map to a small
//! synthetic graph in a test, the solver only talks to it through the
//! [`AStarGraph`] trait.

use std::fmt::Debug;
use std::hash::Hash;

use super::edge::WeightedEdge;

/// A directed, weighted graph that can estimate the remaining distance
/// to a goal.
pub trait AStarGraph {
    /// Vertex identifier. Only equality and hashing are required.
    type Vertex: Clone + Eq + Hash + Debug;

    /// Outgoing edges of `v`. Unknown vertices have none.
    fn neighbors(&self, v: &Self::Vertex) -> Vec<WeightedEdge<Self::Vertex>>;

    /// Estimated cost from `s` to `goal`.
    ///
    /// The solver treats this as a black box. Results are optimal only
    /// if the estimate never overestimates the true remaining cost.
    fn estimated_distance_to_goal(&self, s: &Self::Vertex, goal: &Self::Vertex) -> f64;
}

/// Path finding algorithms.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    /// The Dijkstra algorithm: A* with a zero heuristic.
    Dijkstra,
    /// The A Star algorithm, guided by the graph's heuristic.
    AStar,
}

/// Wraps a graph and hides its heuristic, turning A* into Dijkstra.
#[derive(Debug)]
pub struct WithoutHeuristic<'a, G>(pub &'a G);

impl<G: AStarGraph> AStarGraph for WithoutHeuristic<'_, G> {
    type Vertex = G::Vertex;

    fn neighbors(&self, v: &Self::Vertex) -> Vec<WeightedEdge<Self::Vertex>> {
        self.0.neighbors(v)
    }

    fn estimated_distance_to_goal(&self, _s: &Self::Vertex, _goal: &Self::Vertex) -> f64 {
        0.0
    }
}
