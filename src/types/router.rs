//! The street map graph.
//!
//! [`StreetMapGraph`] stores map nodes in a petgraph
//! [`StableDiGraph`] and keeps a hashmap from node id to its index in
//! the graph. It implements [`AStarGraph`] with the haversine distance
//! as heuristic, which is admissible as long as edge weights are at
//! least the great-circle distance between their endpoints (true for
//! edges added with [`StreetMapGraph::add_edge`]).

use std::collections::HashMap;

use ordered_float::OrderedFloat;
use petgraph::{graph::NodeIndex, stable_graph::StableDiGraph, visit::EdgeRef};

use crate::{
    algorithms::astar::{AStarSolver, SolverResult},
    error::{Result, RouterError},
    types::{
        edge::WeightedEdge,
        graph::{AStarGraph, Algorithm, WithoutHeuristic},
        node::Node,
    },
    utils::{graph::build_edges, haversine},
};

/// A directed street map. Edge weights are kilometers.
#[derive(Debug, Default)]
pub struct StreetMapGraph {
    graph: StableDiGraph<Node, OrderedFloat<f64>>,
    node_indices: HashMap<i64, NodeIndex>,
}

impl StreetMapGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connects every pair of `nodes` within `max_km` of each other in
    /// both directions, weighted by their haversine distance.
    ///
    /// # Time Complexity
    /// *O*(*n^2*).
    pub fn connect_within(nodes: Vec<Node>, max_km: f64) -> Result<Self> {
        info!("[1/3] Initializing the street map graph...");
        let mut graph = StreetMapGraph::new();

        info!("[2/3] Building edges...");
        let edges = build_edges(&nodes, max_km, node_distance, node_distance);

        info!("[3/3] Building the graph...");
        for node in nodes {
            graph.add_node(node);
        }
        for edge in &edges {
            graph.add_weighted_edge(*edge.from(), *edge.to(), edge.weight())?;
        }
        info!(
            "Street map graph ready: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Adds a node, replacing any node that already has its id. Edges
    /// of a replaced node are kept.
    pub fn add_node(&mut self, node: Node) {
        match self.node_indices.get(&node.id) {
            Some(&index) => self.graph[index] = node,
            None => {
                let id = node.id;
                let index = self.graph.add_node(node);
                self.node_indices.insert(id, index);
            }
        }
    }

    /// Adds a directed edge weighted by the haversine distance between
    /// its endpoints.
    pub fn add_edge(&mut self, from: i64, to: i64) -> Result<()> {
        let (a, b) = (self.index_of(from)?, self.index_of(to)?);
        let weight = node_distance(&self.graph[a], &self.graph[b]);
        self.graph.add_edge(a, b, OrderedFloat(weight));
        Ok(())
    }

    /// Adds a directed edge with an explicit weight.
    pub fn add_weighted_edge(&mut self, from: i64, to: i64, weight: f64) -> Result<()> {
        let (a, b) = (self.index_of(from)?, self.index_of(to)?);
        self.graph.add_edge(a, b, OrderedFloat(weight));
        Ok(())
    }

    /// Connects consecutive nodes of a way in both directions.
    pub fn add_way(&mut self, way: &[i64]) -> Result<()> {
        for pair in way.windows(2) {
            self.add_edge(pair[0], pair[1])?;
            self.add_edge(pair[1], pair[0])?;
        }
        Ok(())
    }

    pub fn node(&self, id: i64) -> Option<&Node> {
        self.node_indices.get(&id).map(|&index| &self.graph[index])
    }

    /// Name of the node, if it has one.
    pub fn name(&self, id: i64) -> Option<&str> {
        self.node(id).and_then(|node| node.name.as_deref())
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph
            .node_indices()
            .map(move |index| &self.graph[index])
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Find the shortest path between two nodes.
    ///
    /// # Arguments
    /// * `from` - The node id to start from.
    /// * `to` - The node id to end at.
    /// * `algorithm` - [`Algorithm::AStar`] uses the haversine
    ///   heuristic, [`Algorithm::Dijkstra`] ignores it.
    /// * `timeout_secs` - Wall-clock search budget.
    ///
    /// # Returns
    /// The [`SolverResult`]; an unknown `from` is reported as
    /// unsolvable rather than as an error.
    pub fn shortest_path(
        &self,
        from: i64,
        to: i64,
        algorithm: Algorithm,
        timeout_secs: f64,
    ) -> Result<SolverResult<i64>> {
        match algorithm {
            Algorithm::AStar => AStarSolver::solve(self, from, to, timeout_secs),
            Algorithm::Dijkstra => {
                AStarSolver::solve(&WithoutHeuristic(self), from, to, timeout_secs)
            }
        }
    }

    fn index_of(&self, id: i64) -> Result<NodeIndex> {
        self.node_indices
            .get(&id)
            .copied()
            .ok_or(RouterError::UnknownNode(id))
    }
}

fn node_distance(from: &Node, to: &Node) -> f64 {
    haversine::distance(&from.point(), &to.point())
}

impl AStarGraph for StreetMapGraph {
    type Vertex = i64;

    fn neighbors(&self, v: &i64) -> Vec<WeightedEdge<i64>> {
        let Some(&index) = self.node_indices.get(v) else {
            return Vec::new();
        };
        self.graph
            .edges(index)
            .map(|edge| {
                WeightedEdge::new(*v, self.graph[edge.target()].id, edge.weight().into_inner())
            })
            .collect()
    }

    fn estimated_distance_to_goal(&self, s: &i64, goal: &i64) -> f64 {
        match (self.node(*s), self.node(*goal)) {
            (Some(a), Some(b)) => node_distance(a, b),
            _ => 0.0,
        }
    }
}
