//! Street Map Routing Library.
//! Handles path-finding and nearest-vertex lookup tasks.
//!
//! The two engines are the time-bounded [`AStarSolver`] and the
//! [`KdTree`] spatial index. [`AugmentedStreetMapGraph`] wires both to a
//! [`StreetMapGraph`] so callers can go from a coordinate to a route.

#[macro_use]
extern crate log;

pub mod augmented;
pub mod config;
pub mod error;

pub mod types {
    pub mod edge;
    pub mod graph;
    pub mod location;
    pub mod node;
    pub mod outcome;
    pub mod point;
    pub mod router;
}

pub mod algorithms {
    pub mod astar;
    pub mod kdtree;
}

pub mod utils {
    pub mod generator;
    pub mod graph;
    pub mod haversine;
    pub mod priority_queue;
    pub mod trie;
}

pub use algorithms::astar::{AStarSolver, SolverResult};
pub use algorithms::kdtree::KdTree;
pub use augmented::AugmentedStreetMapGraph;
pub use config::RouterConfig;
pub use error::{QueueError, Result, RouterError};
pub use types::edge::WeightedEdge;
pub use types::graph::{AStarGraph, Algorithm};
pub use types::location::LocationRecord;
pub use types::node::Node;
pub use types::outcome::SolverOutcome;
pub use types::point::Point;
pub use types::router::StreetMapGraph;
pub use utils::priority_queue::MinHeapPQ;
