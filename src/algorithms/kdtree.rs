//! A 2-d tree for nearest-neighbour queries over a static point set.
//!
//! Levels alternate their splitting axis, starting with x at the root.
//! A node's left subtree only holds points strictly smaller than the
//! node on its axis; equal coordinates go right.
//!
//! Two constructions are provided. [`KdTree::new`] splits recursively at
//! the median and guarantees *O*(*log n*) depth. [`KdTree::from_insertion_order`]
//! inserts points one by one, so its shape follows the input order and
//! may degrade to *O*(*n*) depth. Query results do not depend on shape.
//!
//! Nodes live in one arena and refer to their children by slot, and
//! insertion and search walk the tree with loops, so a degenerate tree
//! costs time but never stack depth.

use std::cmp::Ordering;

use crate::{
    error::{Result, RouterError},
    types::point::Point,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

impl Axis {
    fn next(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    fn coord(self, point: &Point) -> f64 {
        match self {
            Axis::X => point.x(),
            Axis::Y => point.y(),
        }
    }

    fn cmp(self, a: &Point, b: &Point) -> Ordering {
        self.coord(a).total_cmp(&self.coord(b))
    }
}

/// Slot of the root in the arena.
const ROOT: usize = 0;

#[derive(Debug)]
struct KdNode {
    point: Point,
    left: Option<usize>,
    right: Option<usize>,
}

/// Immutable spatial index over a non-empty point set.
#[derive(Debug)]
pub struct KdTree {
    nodes: Vec<KdNode>,
}

impl KdTree {
    /// Builds a balanced tree by recursive median split.
    ///
    /// # Errors
    /// [`RouterError::EmptyPointSet`] if `points` is empty.
    pub fn new(points: Vec<Point>) -> Result<KdTree> {
        if points.is_empty() {
            return Err(RouterError::EmptyPointSet);
        }
        let mut points = points;
        let mut tree = KdTree {
            nodes: Vec::with_capacity(points.len()),
        };
        tree.build_balanced(&mut points, Axis::X);
        debug!("built balanced k-d tree over {} points", tree.len());
        Ok(tree)
    }

    /// Builds a tree by taking the first point as the root and inserting
    /// the rest in order. No rebalancing is performed.
    ///
    /// # Errors
    /// [`RouterError::EmptyPointSet`] if `points` is empty.
    pub fn from_insertion_order(points: Vec<Point>) -> Result<KdTree> {
        if points.is_empty() {
            return Err(RouterError::EmptyPointSet);
        }
        let mut tree = KdTree {
            nodes: Vec::with_capacity(points.len()),
        };
        for point in points {
            tree.insert(point);
        }
        debug!("built k-d tree over {} points by insertion", tree.len());
        Ok(tree)
    }

    /// Number of points in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds at least one point.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of levels on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(ROOT, 1)];
        while let Some((slot, level)) = stack.pop() {
            deepest = deepest.max(level);
            let node = &self.nodes[slot];
            stack.extend(node.left.map(|child| (child, level + 1)));
            stack.extend(node.right.map(|child| (child, level + 1)));
        }
        deepest
    }

    /// Returns the point closest to `(x, y)`.
    ///
    /// When several points are equally close, the first one the
    /// traversal visits wins.
    ///
    /// # Time Complexity
    /// *O*(*log n*) on average for well-spread points.
    pub fn nearest(&self, x: f64, y: f64) -> Point {
        let target = Point::new(x, y);
        let mut best_point = self.nodes[ROOT].point;
        let mut best = f64::INFINITY;

        // The far side of a node is pushed before its near side, so it is
        // only looked at once the near subtree is done and `best` is tight.
        let mut stack = vec![Step::Visit(ROOT, Axis::X)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Visit(slot, axis) => {
                    let node = &self.nodes[slot];
                    let distance = node.point.distance_squared(&target);
                    if distance < best {
                        best = distance;
                        best_point = node.point;
                    }
                    let (near, far) = if axis.coord(&target) < axis.coord(&node.point) {
                        (node.left, node.right)
                    } else {
                        (node.right, node.left)
                    };
                    if let Some(far) = far {
                        stack.push(Step::Far(slot, far, axis));
                    }
                    if let Some(near) = near {
                        stack.push(Step::Visit(near, axis.next()));
                    }
                }
                Step::Far(slot, far, axis) => {
                    // Only worth it if the splitting plane is closer than the best so far.
                    let plane = axis.coord(&target) - axis.coord(&self.nodes[slot].point);
                    if plane * plane < best {
                        stack.push(Step::Visit(far, axis.next()));
                    }
                }
            }
        }
        best_point
    }

    /// Sorts `points` on `axis`, picks the median as the node, and
    /// recurses into both halves. The median is moved down to the first
    /// point sharing its coordinate so equal coordinates always land on
    /// the right. Recursion depth is logarithmic except for long runs of
    /// equal coordinates.
    fn build_balanced(&mut self, points: &mut [Point], axis: Axis) -> Option<usize> {
        if points.is_empty() {
            return None;
        }
        points.sort_by(|a, b| axis.cmp(a, b));
        let mut mid = points.len() / 2;
        while mid > 0 && axis.coord(&points[mid - 1]) == axis.coord(&points[mid]) {
            mid -= 1;
        }

        let slot = self.push(points[mid]);
        let (left, rest) = points.split_at_mut(mid);
        let left = self.build_balanced(left, axis.next());
        let right = self.build_balanced(&mut rest[1..], axis.next());
        self.nodes[slot].left = left;
        self.nodes[slot].right = right;
        Some(slot)
    }

    fn insert(&mut self, point: Point) {
        if self.nodes.is_empty() {
            self.push(point);
            return;
        }
        let mut slot = ROOT;
        let mut axis = Axis::X;
        loop {
            let node = &self.nodes[slot];
            let goes_left = axis.coord(&point) < axis.coord(&node.point);
            let child = if goes_left { node.left } else { node.right };
            match child {
                Some(next) => {
                    slot = next;
                    axis = axis.next();
                }
                None => {
                    let leaf = self.push(point);
                    let node = &mut self.nodes[slot];
                    if goes_left {
                        node.left = Some(leaf);
                    } else {
                        node.right = Some(leaf);
                    }
                    return;
                }
            }
        }
    }

    fn push(&mut self, point: Point) -> usize {
        self.nodes.push(KdNode {
            point,
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }
}

enum Step {
    /// Check a node, then descend near side first.
    Visit(usize, Axis),
    /// After the near side of `.0` is done, maybe descend into `.1`.
    Far(usize, usize, Axis),
}
