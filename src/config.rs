//! Router defaults and the serde-loadable [`RouterConfig`].

use serde::{Deserialize, Serialize};

/// Search budget used when a caller does not pick one, in seconds.
pub const DEFAULT_TIMEOUT_SECS: f64 = 5.0;

/// Mean earth radius used by the haversine heuristic.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Tunables for an [`AugmentedStreetMapGraph`](crate::AugmentedStreetMapGraph).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Wall-clock budget handed to the solver by
    /// [`AugmentedStreetMapGraph::shortest_path`](crate::AugmentedStreetMapGraph::shortest_path).
    pub timeout_secs: f64,

    /// Build the k-d tree by median split. When `false` the tree is
    /// built by sequential insertion and its shape follows input order;
    /// sorted input then gives linear depth and linear-time queries.
    pub balanced_index: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        RouterConfig {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            balanced_index: true,
        }
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: RouterConfig = serde_json::from_str(r#"{"timeout_secs": 0.5}"#).unwrap();
        assert_eq!(config.timeout_secs, 0.5);
        assert!(config.balanced_index);

        let config: RouterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RouterConfig::default());
    }

    #[test]
    fn test_round_trip_through_json() {
        let config = RouterConfig {
            timeout_secs: 2.0,
            balanced_index: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<RouterConfig>(&json).unwrap(), config);
    }
}
