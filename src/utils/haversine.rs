//! Great-circle distance between two `(lon, lat)` points.

use crate::{config::EARTH_RADIUS_KM, types::point::Point};

/// Haversine distance in kilometers between two points whose `x` is a
/// longitude and `y` a latitude, both in degrees.
pub fn distance(from: &Point, to: &Point) -> f64 {
    let (lat1, lat2) = (from.y().to_radians(), to.y().to_radians());
    let d_lat = lat2 - lat1;
    let d_lon = (to.x() - from.x()).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}
