//! Tunable thresholds shared by the strategies.

use serde::{Deserialize, Serialize};

/// Every numeric knob the strategies read.
///
/// Defaults reproduce the standard behaviour. Any subset of fields can be
/// overridden from a config file because missing fields fall back to
/// [`Default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Maximum number of items returned by `recommend_top`
    pub result_size: usize,
    /// Number of most-similar users kept as the neighborhood
    pub neighborhood_size: usize,
    /// Shared rated items below which two users' similarity is 0.0
    pub min_shared_items: usize,
    /// Neighbors that must have rated an item before it is a candidate
    pub min_neighbors_per_item: usize,
    /// Ratings an item needs to enter the popularity ranking
    pub popularity_min_ratings: u32,
    /// Largest age difference (years) for a profile match
    pub profile_age_window: u32,
    /// Ratings from matching users an item needs in the profile ranking
    pub profile_min_ratings: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            result_size: 10,
            neighborhood_size: 10,
            min_shared_items: 10,
            min_neighbors_per_item: 5,
            popularity_min_ratings: 100,
            profile_age_window: 5,
            profile_min_ratings: 5,
        }
    }
}

impl RecommenderConfig {
    /// Configure the number of returned items (default: 10)
    pub fn with_result_size(mut self, size: usize) -> Self {
        self.result_size = size;
        self
    }

    /// Configure the neighborhood size K (default: 10)
    pub fn with_neighborhood_size(mut self, k: usize) -> Self {
        self.neighborhood_size = k;
        self
    }

    /// Configure minimum shared items for a non-zero similarity (default: 10)
    pub fn with_min_shared_items(mut self, min: usize) -> Self {
        self.min_shared_items = min;
        self
    }

    /// Configure minimum neighbors per candidate item (default: 5)
    pub fn with_min_neighbors_per_item(mut self, min: usize) -> Self {
        self.min_neighbors_per_item = min;
        self
    }

    /// Configure the popularity threshold (default: 100)
    pub fn with_popularity_min_ratings(mut self, min: u32) -> Self {
        self.popularity_min_ratings = min;
        self
    }

    /// Configure the profile age window (default: 5)
    pub fn with_profile_age_window(mut self, years: u32) -> Self {
        self.profile_age_window = years;
        self
    }

    /// Configure minimum ratings per item in the profile ranking (default: 5)
    pub fn with_profile_min_ratings(mut self, min: usize) -> Self {
        self.profile_min_ratings = min;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RecommenderConfig::default();
        assert_eq!(config.result_size, 10);
        assert_eq!(config.neighborhood_size, 10);
        assert_eq!(config.min_shared_items, 10);
        assert_eq!(config.min_neighbors_per_item, 5);
        assert_eq!(config.popularity_min_ratings, 100);
        assert_eq!(config.profile_age_window, 5);
        assert_eq!(config.profile_min_ratings, 5);
    }

    #[test]
    fn test_builder_overrides() {
        let config = RecommenderConfig::default()
            .with_result_size(3)
            .with_min_shared_items(2);
        assert_eq!(config.result_size, 3);
        assert_eq!(config.min_shared_items, 2);
        assert_eq!(config.neighborhood_size, 10);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: RecommenderConfig =
            serde_json::from_str(r#"{ "result_size": 20, "popularity_min_ratings": 50 }"#).unwrap();
        assert_eq!(config.result_size, 20);
        assert_eq!(config.popularity_min_ratings, 50);
        assert_eq!(config.min_shared_items, 10);
    }
}
