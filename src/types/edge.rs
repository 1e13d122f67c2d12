//! Definition of the `WeightedEdge` type.

/// A directed connection between two vertices.
/// The weight represents the cost of travelling the edge and must be
/// non-negative for shortest-path results to be optimal.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedEdge<V> {
    from: V,
    to: V,
    weight: f64,
}

impl<V> WeightedEdge<V> {
    pub fn new(from: V, to: V, weight: f64) -> Self {
        WeightedEdge { from, to, weight }
    }

    /// The tail of the edge.
    pub fn from(&self) -> &V {
        &self.from
    }

    /// The head of the edge.
    pub fn to(&self) -> &V {
        &self.to
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}
