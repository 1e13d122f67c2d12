//! Helper functons for working with graphs.

use crate::types::{edge::WeightedEdge, node::Node};

/// Build edges among nodes.
///
/// The function will try to connect every node to every other node.
/// However, a constraint prevents far-apart nodes from being
/// connected: only pairs whose `constraint_function` value is within
/// `constraint` get an edge.
///
/// # Arguments
/// * `nodes` - A slice of nodes.
/// * `constraint` - Only nodes within a constraint can be connected.
/// * `constraint_function` - A function that takes two nodes and
///   returns a float to compare against `constraint`.
/// * `cost_function` - A function that computes the weight between
///   two nodes.
///
/// # Returns
/// A vector of directed edges between node ids.
///
/// # Time Complexity
/// *O*(*n^2*).
pub fn build_edges(
    nodes: &[Node],
    constraint: f64,
    constraint_function: fn(&Node, &Node) -> f64,
    cost_function: fn(&Node, &Node) -> f64,
) -> Vec<WeightedEdge<i64>> {
    let mut edges = Vec::new();
    for from in nodes {
        for to in nodes {
            if from.id != to.id && constraint_function(from, to) <= constraint {
                edges.push(WeightedEdge::new(from.id, to.id, cost_function(from, to)));
            }
        }
    }
    edges
}
