//! Random node generation for demos and tests.

use rand::Rng;

use crate::types::node::Node;

/// Kilometers per degree of latitude.
const KM_PER_DEGREE: f64 = 111.19;

/// Generates `capacity` nodes scattered uniformly within roughly
/// `radius_km` of `(lon, lat)`. Ids run from `first_id` upward.
pub fn generate_nodes_near<R: Rng>(
    rng: &mut R,
    lon: f64,
    lat: f64,
    radius_km: f64,
    capacity: usize,
    first_id: i64,
) -> Vec<Node> {
    let lat_span = radius_km / KM_PER_DEGREE;
    let lon_span = lat_span / lat.to_radians().cos().abs().max(1e-6);
    (0..capacity)
        .map(|i| {
            // sqrt keeps the density uniform over the disc
            let r = rng.gen::<f64>().sqrt();
            let theta = rng.gen_range(0.0..std::f64::consts::TAU);
            Node::new(
                first_id + i as i64,
                lon + r * theta.cos() * lon_span,
                lat + r * theta.sin() * lat_span,
            )
        })
        .collect()
}
