//! Time-bounded A* search over any [`AStarGraph`].
//!
//! The solver keeps, for one invocation only, the best known distance
//! to every discovered vertex, the predecessor used to reach it, and a
//! frontier ordered by `dist_to[v] + heuristic(v, goal)`. The frontier is
//! a [`MinHeapPQ`], so a shorter route to a queued vertex lowers its
//! priority in place instead of queueing it twice.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::{
    error::Result,
    types::{edge::WeightedEdge, graph::AStarGraph, outcome::SolverOutcome},
    utils::priority_queue::MinHeapPQ,
};

/// What a solve produced.
///
/// `solution` is empty and `solution_weight` is 0 unless the outcome is
/// [`SolverOutcome::Solved`]. The explored count and exploration time
/// are reported for every outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverResult<V> {
    pub outcome: SolverOutcome,
    /// Vertices from start to goal, both inclusive.
    pub solution: Vec<V>,
    pub solution_weight: f64,
    /// Number of frontier dequeues.
    pub num_states_explored: usize,
    /// Wall-clock seconds spent in the solve.
    pub exploration_time: f64,
}

/// A* solver.
///
/// Timeout is cooperative: elapsed time is polled once per dequeue, so
/// a solve may overrun the budget by the time it takes to relax one
/// vertex's outgoing edges.
pub struct AStarSolver<'g, G: AStarGraph> {
    input: &'g G,
    goal: G::Vertex,
    frontier: MinHeapPQ<G::Vertex>,
    dist_to: HashMap<G::Vertex, f64>,
    edge_to: HashMap<G::Vertex, G::Vertex>,
}

impl<'g, G: AStarGraph> AStarSolver<'g, G> {
    /// Finds the shortest path from `start` to `goal` within
    /// `timeout_secs` seconds of wall-clock time.
    ///
    /// A `start` the graph does not know has no outgoing edges and
    /// therefore yields [`SolverOutcome::Unsolvable`] (unless it is also
    /// the goal).
    ///
    /// # Errors
    /// Only if the frontier is driven out of its contract, which the
    /// relax step rules out; callers may treat an error as a bug.
    pub fn solve(
        input: &'g G,
        start: G::Vertex,
        goal: G::Vertex,
        timeout_secs: f64,
    ) -> Result<SolverResult<G::Vertex>> {
        let stopwatch = Instant::now();
        let timeout = Duration::try_from_secs_f64(timeout_secs.max(0.0)).unwrap_or(Duration::MAX);

        let mut solver = AStarSolver {
            input,
            goal,
            frontier: MinHeapPQ::new(),
            dist_to: HashMap::new(),
            edge_to: HashMap::new(),
        };

        solver.dist_to.insert(start.clone(), 0.0);
        let priority = solver.input.estimated_distance_to_goal(&start, &solver.goal);
        solver.frontier.insert(start.clone(), priority)?;

        let mut num_states_explored = 0;
        let mut timed_out = false;
        while !solver.frontier.is_empty() && *solver.frontier.peek()? != solver.goal {
            if stopwatch.elapsed() >= timeout {
                timed_out = true;
                break;
            }
            let current = solver.frontier.poll()?;
            num_states_explored += 1;
            for edge in solver.input.neighbors(&current) {
                solver.relax(&edge)?;
            }
        }
        let elapsed = stopwatch.elapsed();
        let exploration_time = elapsed.as_secs_f64();

        // A goal surfaced by an expansion that overran the budget still
        // counts as a timeout.
        let outcome = if solver.frontier.is_empty() {
            SolverOutcome::Unsolvable
        } else if timed_out || elapsed >= timeout {
            SolverOutcome::Timeout
        } else {
            SolverOutcome::Solved
        };

        let (solution, solution_weight) = match outcome {
            SolverOutcome::Solved => solver.reconstruct(&start),
            _ => (Vec::new(), 0.0),
        };

        match outcome {
            SolverOutcome::Timeout => warn!(
                "search from {:?} to {:?} timed out after {} states",
                start, solver.goal, num_states_explored
            ),
            _ => debug!(
                "search from {:?} to {:?}: {:?}, weight {}, {} states in {:.6}s",
                start, solver.goal, outcome, solution_weight, num_states_explored, exploration_time
            ),
        }

        Ok(SolverResult {
            outcome,
            solution,
            solution_weight,
            num_states_explored,
            exploration_time,
        })
    }

    /// Records `edge` if it gives a shorter route to its head, then
    /// queues the head or lowers its priority.
    fn relax(&mut self, edge: &WeightedEdge<G::Vertex>) -> Result<()> {
        let (from, to) = (edge.from(), edge.to());
        let Some(&base) = self.dist_to.get(from) else {
            return Ok(());
        };
        let candidate = base + edge.weight();
        let improves = match self.dist_to.get(to) {
            Some(&known) => candidate < known,
            None => true,
        };
        if !improves {
            return Ok(());
        }

        self.dist_to.insert(to.clone(), candidate);
        self.edge_to.insert(to.clone(), from.clone());
        let priority = candidate + self.input.estimated_distance_to_goal(to, &self.goal);
        if self.frontier.contains(to) {
            self.frontier.change_priority(to, priority)?;
        } else {
            self.frontier.insert(to.clone(), priority)?;
        }
        Ok(())
    }

    /// Walks predecessors back from the goal.
    fn reconstruct(&self, start: &G::Vertex) -> (Vec<G::Vertex>, f64) {
        let mut path = vec![self.goal.clone()];
        let mut current = &self.goal;
        while current != start {
            match self.edge_to.get(current) {
                Some(previous) => {
                    path.push(previous.clone());
                    current = previous;
                }
                None => break,
            }
        }
        path.reverse();
        let weight = self.dist_to.get(&self.goal).copied().unwrap_or(0.0);
        (path, weight)
    }
}

#[cfg(test)]
mod astar_tests {
    use super::*;
    use crate::types::graph::WithoutHeuristic;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::collections::HashSet;

    /// A small adjacency-list graph with an optional heuristic table.
    #[derive(Default)]
    struct TestGraph {
        adjacency: HashMap<char, Vec<(char, f64)>>,
        heuristic: HashMap<char, f64>,
    }

    impl TestGraph {
        fn with_edges(edges: &[(char, char, f64)]) -> Self {
            let mut graph = TestGraph::default();
            for &(from, to, weight) in edges {
                graph.adjacency.entry(from).or_default().push((to, weight));
            }
            graph
        }
    }

    impl AStarGraph for TestGraph {
        type Vertex = char;

        fn neighbors(&self, v: &char) -> Vec<WeightedEdge<char>> {
            self.adjacency
                .get(v)
                .map(|out| {
                    out.iter()
                        .map(|&(to, weight)| WeightedEdge::new(*v, to, weight))
                        .collect()
                })
                .unwrap_or_default()
        }

        fn estimated_distance_to_goal(&self, s: &char, _goal: &char) -> f64 {
            self.heuristic.get(s).copied().unwrap_or(0.0)
        }
    }

    /// Integer-vertex graph with coordinates; the heuristic is the
    /// straight-line distance, edge weights are at least that long.
    struct GridGraph {
        coords: Vec<(f64, f64)>,
        adjacency: Vec<Vec<(usize, f64)>>,
    }

    impl AStarGraph for GridGraph {
        type Vertex = usize;

        fn neighbors(&self, v: &usize) -> Vec<WeightedEdge<usize>> {
            self.adjacency
                .get(*v)
                .map(|out| {
                    out.iter()
                        .map(|&(to, weight)| WeightedEdge::new(*v, to, weight))
                        .collect()
                })
                .unwrap_or_default()
        }

        fn estimated_distance_to_goal(&self, s: &usize, goal: &usize) -> f64 {
            let (ax, ay) = self.coords[*s];
            let (bx, by) = self.coords[*goal];
            ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
        }
    }

    fn random_grid_graph(rng: &mut StdRng, n: usize, out_degree: usize) -> GridGraph {
        let coords: Vec<(f64, f64)> = (0..n)
            .map(|_| (rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
            .collect();
        let mut adjacency = vec![Vec::new(); n];
        for (from, out) in adjacency.iter_mut().enumerate() {
            for _ in 0..out_degree {
                let to = rng.gen_range(0..n);
                let (ax, ay) = coords[from];
                let (bx, by) = coords[to];
                let straight = ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt();
                out.push((to, straight * rng.gen_range(1.0..1.5)));
            }
        }
        GridGraph { coords, adjacency }
    }

    /// Reference shortest distances from `start`, by Dijkstra.
    fn reference_distances(graph: &GridGraph, start: usize) -> Vec<Option<f64>> {
        let mut pg = petgraph::Graph::<(), f64>::new();
        let indices: Vec<_> = (0..graph.coords.len()).map(|_| pg.add_node(())).collect();
        for (from, out) in graph.adjacency.iter().enumerate() {
            for &(to, weight) in out {
                pg.add_edge(indices[from], indices[to], weight);
            }
        }
        let dist = petgraph::algo::dijkstra(&pg, indices[start], None, |e| *e.weight());
        indices.iter().map(|i| dist.get(i).copied()).collect()
    }

    fn reachable_count<G: AStarGraph>(graph: &G, start: G::Vertex) -> usize {
        let mut seen = HashSet::new();
        let mut stack = vec![start];
        while let Some(v) = stack.pop() {
            if seen.insert(v.clone()) {
                for edge in graph.neighbors(&v) {
                    stack.push(edge.to().clone());
                }
            }
        }
        seen.len()
    }

    /// Checks the path starts and ends correctly, follows real edges, and
    /// sums to the reported weight.
    fn assert_valid_path<G: AStarGraph>(
        graph: &G,
        result: &SolverResult<G::Vertex>,
        start: &G::Vertex,
        goal: &G::Vertex,
    ) {
        assert_eq!(result.outcome, SolverOutcome::Solved);
        assert_eq!(result.solution.first(), Some(start));
        assert_eq!(result.solution.last(), Some(goal));
        let mut total = 0.0;
        for pair in result.solution.windows(2) {
            let weight = graph
                .neighbors(&pair[0])
                .iter()
                .filter(|e| *e.to() == pair[1])
                .map(|e| e.weight())
                .fold(f64::INFINITY, f64::min);
            assert!(weight.is_finite(), "no edge {:?} -> {:?}", pair[0], pair[1]);
            total += weight;
        }
        let tolerance = 1e-9 * result.solution_weight.abs().max(1.0);
        assert!((total - result.solution_weight).abs() <= tolerance);
    }

    fn diamond() -> TestGraph {
        TestGraph::with_edges(&[('A', 'B', 1.0), ('B', 'D', 1.0), ('A', 'C', 5.0), ('C', 'D', 1.0)])
    }

    #[test]
    fn test_diamond_takes_the_cheap_branch() {
        let graph = diamond();
        let result = AStarSolver::solve(&graph, 'A', 'D', 1.0).unwrap();

        assert_eq!(result.outcome, SolverOutcome::Solved);
        assert_eq!(result.solution, vec!['A', 'B', 'D']);
        assert_eq!(result.solution_weight, 2.0);
        assert!(result.num_states_explored <= 4);
        assert!(result.exploration_time >= 0.0);
        assert_valid_path(&graph, &result, &'A', &'D');
    }

    #[test]
    fn test_disconnected_goal_is_unsolvable() {
        let graph = diamond();
        let result = AStarSolver::solve(&graph, 'A', 'E', 1.0).unwrap();

        assert_eq!(result.outcome, SolverOutcome::Unsolvable);
        assert!(result.solution.is_empty());
        assert_eq!(result.solution_weight, 0.0);
        // every reachable vertex is dequeued once
        assert_eq!(result.num_states_explored, 4);
    }

    #[test]
    fn test_unknown_start_is_unsolvable() {
        let graph = diamond();
        let result = AStarSolver::solve(&graph, 'Z', 'D', 1.0).unwrap();

        assert_eq!(result.outcome, SolverOutcome::Unsolvable);
        assert!(result.solution.is_empty());
        assert_eq!(result.num_states_explored, 1);
    }

    #[test]
    fn test_start_equal_to_goal() {
        let graph = diamond();
        let result = AStarSolver::solve(&graph, 'B', 'B', 1.0).unwrap();

        assert_eq!(result.outcome, SolverOutcome::Solved);
        assert_eq!(result.solution, vec!['B']);
        assert_eq!(result.solution_weight, 0.0);
        assert_eq!(result.num_states_explored, 0);
    }

    #[test]
    fn test_zero_budget_times_out() {
        let graph = diamond();
        let result = AStarSolver::solve(&graph, 'A', 'D', 0.0).unwrap();

        assert_eq!(result.outcome, SolverOutcome::Timeout);
        assert!(result.solution.is_empty());
        assert_eq!(result.solution_weight, 0.0);
        assert_eq!(result.num_states_explored, 0);
    }

    /// Expanding any vertex takes longer than the whole budget.
    struct SlowGraph(TestGraph);

    impl AStarGraph for SlowGraph {
        type Vertex = char;

        fn neighbors(&self, v: &char) -> Vec<WeightedEdge<char>> {
            std::thread::sleep(Duration::from_millis(60));
            self.0.neighbors(v)
        }

        fn estimated_distance_to_goal(&self, s: &char, goal: &char) -> f64 {
            self.0.estimated_distance_to_goal(s, goal)
        }
    }

    #[test]
    fn test_goal_found_after_budget_ran_out_is_a_timeout() {
        let graph = SlowGraph(TestGraph::with_edges(&[('A', 'D', 1.0)]));
        let result = AStarSolver::solve(&graph, 'A', 'D', 0.01).unwrap();

        assert_eq!(result.outcome, SolverOutcome::Timeout);
        assert!(result.solution.is_empty());
        assert_eq!(result.solution_weight, 0.0);
        assert_eq!(result.num_states_explored, 1);
        assert!(result.exploration_time >= 0.01);

        // the same graph solves once the budget covers the expansion
        let result = AStarSolver::solve(&graph, 'A', 'D', 5.0).unwrap();
        assert_eq!(result.outcome, SolverOutcome::Solved);
        assert_eq!(result.solution, vec!['A', 'D']);
    }

    #[test]
    fn test_decrease_key_reroutes_through_later_discovery() {
        // C is first reached directly at 10, later through B at 3.
        let graph = TestGraph::with_edges(&[
            ('A', 'C', 10.0),
            ('A', 'B', 1.0),
            ('B', 'C', 2.0),
            ('C', 'D', 1.0),
        ]);
        let result = AStarSolver::solve(&graph, 'A', 'D', 1.0).unwrap();

        assert_eq!(result.solution, vec!['A', 'B', 'C', 'D']);
        assert_eq!(result.solution_weight, 4.0);
        assert_valid_path(&graph, &result, &'A', &'D');
    }

    #[test]
    fn test_heuristic_steers_exploration() {
        let mut graph = TestGraph::with_edges(&[
            ('S', 'L', 1.0),
            ('L', 'M', 1.0),
            ('M', 'G', 1.0),
            ('S', 'R', 1.0),
            ('R', 'Q', 1.0),
            ('Q', 'P', 1.0),
        ]);
        // admissible: exact remaining cost on the left branch, large on the right
        graph.heuristic = [('S', 3.0), ('L', 2.0), ('M', 1.0), ('R', 50.0), ('Q', 50.0)]
            .into_iter()
            .collect();

        let guided = AStarSolver::solve(&graph, 'S', 'G', 1.0).unwrap();
        let blind = AStarSolver::solve(&WithoutHeuristic(&graph), 'S', 'G', 1.0).unwrap();

        assert_eq!(guided.solution, blind.solution);
        assert_eq!(guided.solution_weight, 3.0);
        assert!(guided.num_states_explored < blind.num_states_explored);
    }

    #[test]
    fn test_matches_reference_dijkstra_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let graph = random_grid_graph(&mut rng, 60, 3);
            let start = rng.gen_range(0..60);
            let reference = reference_distances(&graph, start);
            let reachable = reachable_count(&graph, start);

            for goal in 0..60 {
                let result = AStarSolver::solve(&graph, start, goal, 10.0).unwrap();
                assert!(result.num_states_explored <= reachable);
                match reference[goal] {
                    Some(expected) => {
                        assert_valid_path(&graph, &result, &start, &goal);
                        assert!((result.solution_weight - expected).abs() <= 1e-9 * expected.max(1.0));
                    }
                    None => {
                        assert_eq!(result.outcome, SolverOutcome::Unsolvable);
                        assert!(result.solution.is_empty());
                        assert_eq!(result.solution_weight, 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_repeated_solves_are_identical() {
        let mut rng = StdRng::seed_from_u64(11);
        let graph = random_grid_graph(&mut rng, 200, 4);
        let first = AStarSolver::solve(&graph, 0, 199, 10.0).unwrap();
        for _ in 0..5 {
            let again = AStarSolver::solve(&graph, 0, 199, 10.0).unwrap();
            assert_eq!(again.outcome, first.outcome);
            assert_eq!(again.solution, first.solution);
            assert_eq!(again.solution_weight, first.solution_weight);
            assert_eq!(again.num_states_explored, first.num_states_explored);
        }
    }
}
