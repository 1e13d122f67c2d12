//! Struct definitions and implementations for [`Point`].

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// An immutable 2-D coordinate.
///
/// Coordinates are stored as [`OrderedFloat`] so that a point can be
/// used as a [`HashMap`](std::collections::HashMap) key: two points are
/// equal, and hash alike, when both coordinates are equal.
///
/// Street map points use `x` for longitude and `y` for latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    x: OrderedFloat<f64>,
    y: OrderedFloat<f64>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point {
            x: OrderedFloat(x),
            y: OrderedFloat(y),
        }
    }

    pub fn x(&self) -> f64 {
        self.x.into_inner()
    }

    pub fn y(&self) -> f64 {
        self.y.into_inner()
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Squared Euclidean distance. Monotonic with [`Point::distance`],
    /// so it is what nearest-neighbour comparisons use.
    pub fn distance_squared(&self, other: &Point) -> f64 {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        dx * dx + dy * dy
    }
}
