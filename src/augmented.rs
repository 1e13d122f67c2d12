//! A street map graph augmented with lookup indexes.
//!
//! On top of the plain [`StreetMapGraph`], [`AugmentedStreetMapGraph`]
//! answers "which vertex is closest to this coordinate" through a
//! [`KdTree`] and "which places have this name" through a
//! [`LocationTrie`]. Both indexes are built once and never change.

use std::collections::HashMap;

use crate::{
    algorithms::{astar::SolverResult, kdtree::KdTree},
    config::RouterConfig,
    error::Result,
    types::{
        edge::WeightedEdge,
        graph::{AStarGraph, Algorithm},
        location::LocationRecord,
        point::Point,
        router::StreetMapGraph,
    },
    utils::trie::{clean_string, LocationTrie},
};

#[derive(Debug)]
pub struct AugmentedStreetMapGraph {
    graph: StreetMapGraph,
    config: RouterConfig,
    point_map: HashMap<Point, i64>,
    kd_tree: KdTree,
    name_index: LocationTrie,
}

impl AugmentedStreetMapGraph {
    /// Indexes `graph` with the default [`RouterConfig`].
    ///
    /// # Errors
    /// [`RouterError::EmptyPointSet`](crate::RouterError::EmptyPointSet) if
    /// no node has an outgoing edge.
    pub fn new(graph: StreetMapGraph) -> Result<Self> {
        Self::with_config(graph, RouterConfig::default())
    }

    /// Indexes `graph`.
    ///
    /// Only nodes with at least one outgoing edge are candidates for
    /// [`closest`](Self::closest); an isolated node can never start or
    /// end a route. Every named node goes into the name index. When
    /// several nodes share a position the last one wins.
    ///
    /// # Errors
    /// [`RouterError::EmptyPointSet`](crate::RouterError::EmptyPointSet) if
    /// no node has an outgoing edge.
    pub fn with_config(graph: StreetMapGraph, config: RouterConfig) -> Result<Self> {
        info!("[1/3] Indexing {} nodes...", graph.node_count());
        let mut point_map = HashMap::new();
        let mut name_index = LocationTrie::new();
        for node in graph.nodes() {
            if !graph.neighbors(&node.id).is_empty() {
                point_map.insert(node.point(), node.id);
            }
            if let Some(record) = node.location_record() {
                name_index.add_location(&clean_string(&record.name), record);
            }
        }

        info!("[2/3] Building the k-d tree over {} points...", point_map.len());
        let points: Vec<Point> = point_map.keys().copied().collect();
        let kd_tree = if config.balanced_index {
            KdTree::new(points)?
        } else {
            KdTree::from_insertion_order(points)?
        };

        info!("[3/3] Indexed {} named locations", name_index.len());
        Ok(AugmentedStreetMapGraph {
            graph,
            config,
            point_map,
            kd_tree,
            name_index,
        })
    }

    /// Returns the id of the routable vertex closest to `(lon, lat)`.
    pub fn closest(&self, lon: f64, lat: f64) -> i64 {
        let nearest = self.kd_tree.nearest(lon, lat);
        // every tree point was taken from the map's keys
        self.point_map[&nearest]
    }

    /// Original names of every location whose cleaned name starts with
    /// the cleaned `prefix`.
    pub fn get_locations_by_prefix(&self, prefix: &str) -> Vec<String> {
        self.name_index.keys_with_prefix(&clean_string(prefix))
    }

    /// Every location whose cleaned name equals the cleaned
    /// `location_name`.
    pub fn get_locations(&self, location_name: &str) -> Vec<LocationRecord> {
        self.name_index
            .get_locations(&clean_string(location_name))
            .to_vec()
    }

    /// Routes between two vertices with A* under the configured budget.
    pub fn shortest_path(&self, start: i64, goal: i64) -> Result<SolverResult<i64>> {
        self.graph
            .shortest_path(start, goal, Algorithm::AStar, self.config.timeout_secs)
    }

    /// Routes between the vertices closest to two coordinates.
    pub fn route_between(
        &self,
        (start_lon, start_lat): (f64, f64),
        (goal_lon, goal_lat): (f64, f64),
    ) -> Result<SolverResult<i64>> {
        let start = self.closest(start_lon, start_lat);
        let goal = self.closest(goal_lon, goal_lat);
        debug!("routing from vertex {} to vertex {}", start, goal);
        self.shortest_path(start, goal)
    }

    pub fn graph(&self) -> &StreetMapGraph {
        &self.graph
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }
}

impl AStarGraph for AugmentedStreetMapGraph {
    type Vertex = i64;

    fn neighbors(&self, v: &i64) -> Vec<WeightedEdge<i64>> {
        self.graph.neighbors(v)
    }

    fn estimated_distance_to_goal(&self, s: &i64, goal: &i64) -> f64 {
        self.graph.estimated_distance_to_goal(s, goal)
    }
}
