//! Struct definitions and implementations for objects that represent
//! vertices in a street map.

use super::location::LocationRecord;
use super::point::Point;

/// A vertex of a [`StreetMapGraph`](super::router::StreetMapGraph).
///
/// Typically an intersection or a point along a way. Some nodes carry a
/// name (a shop, a station, a landmark) and can then be found through
/// name lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Opaque identifier, unique within one graph.
    pub id: i64,

    pub lon: f64,
    pub lat: f64,

    pub name: Option<String>,
}

impl Node {
    /// Creates an unnamed node.
    pub fn new(id: i64, lon: f64, lat: f64) -> Self {
        Node {
            id,
            lon,
            lat,
            name: None,
        }
    }

    /// Creates a named node.
    pub fn named(id: i64, lon: f64, lat: f64, name: impl Into<String>) -> Self {
        Node {
            id,
            lon,
            lat,
            name: Some(name.into()),
        }
    }

    /// The node position as an `(x = lon, y = lat)` point.
    pub fn point(&self) -> Point {
        Point::new(self.lon, self.lat)
    }

    /// Returns the lookup record for a named node.
    pub fn location_record(&self) -> Option<LocationRecord> {
        self.name.as_ref().map(|name| LocationRecord {
            name: name.clone(),
            lat: self.lat,
            lon: self.lon,
            id: self.id,
        })
    }
}
