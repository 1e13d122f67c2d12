//! Struct definitions for [`LocationRecord`].

use serde::{Deserialize, Serialize};

/// A named place returned by name lookups on an
/// [`AugmentedStreetMapGraph`](crate::AugmentedStreetMapGraph).
///
/// The record is handed to presentation layers verbatim, so it keeps
/// the original (uncleaned) name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub id: i64,
}
