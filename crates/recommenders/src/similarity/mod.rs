//! Similarity Strategy - bias-corrected user-user collaborative filtering
//!
//! "Users whose taste deviates from the average the way yours does rated
//! these items above what their biases predict."
//!
//! ## Algorithm
//! 1. Decompose every rating into global, item and user bias plus a
//!    bias-free residual (see [`bias`])
//! 2. Score every other user by the dot product of bias-free ratings over
//!    shared items; fewer than `min_shared_items` shared items scores 0.0
//! 3. Keep the `neighborhood_size` most similar users with similarity > 0
//! 4. Candidates are items rated by at least `min_neighbors_per_item`
//!    neighbors that the user has not rated
//! 5. Predict each candidate's rating from the biases plus the
//!    similarity-weighted mean of the neighbors' bias-free ratings
//! 6. Rank the predictions with the shared ranking rule

pub mod bias;
pub mod neighbors;
pub mod predictor;

#[cfg(test)]
pub(crate) mod fixtures;

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use dataset::{Dataset, ItemId, UserId};
use tracing::{debug, instrument};

use crate::config::RecommenderConfig;
use crate::ranking::{rank, Recommendation};
use crate::traits::Recommender;

pub use bias::BiasModel;
pub use neighbors::Neighbor;

/// Bias-corrected collaborative filtering over one snapshot
pub struct SimilarityRecommender {
    /// Shared reference to the snapshot (read-only, so no Mutex needed)
    dataset: Arc<Dataset>,
    /// Bias tables, fitted once at construction
    bias: BiasModel,
    config: RecommenderConfig,
}

impl SimilarityRecommender {
    /// Create a strategy with the default thresholds
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_config(dataset, RecommenderConfig::default())
    }

    /// Create a strategy and fit its bias tables
    pub fn with_config(dataset: Arc<Dataset>, config: RecommenderConfig) -> Self {
        let bias = BiasModel::fit(dataset.ratings(), dataset.index());
        Self {
            dataset,
            bias,
            config,
        }
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    pub fn bias_model(&self) -> &BiasModel {
        &self.bias
    }

    pub fn get_global_bias(&self) -> f64 {
        self.bias.global_bias()
    }

    pub fn get_item_bias(&self, item_id: ItemId) -> f64 {
        self.bias.item_bias(item_id)
    }

    pub fn get_user_bias(&self, user_id: UserId) -> f64 {
        self.bias.user_bias(user_id)
    }

    /// Bias-free rating, 0.0 when the user never rated the item
    pub fn get_bias_free_rating(&self, user_id: UserId, item_id: ItemId) -> f64 {
        self.bias.bias_free_rating(user_id, item_id).unwrap_or(0.0)
    }

    /// Items rated by enough neighbors that `user_id` has not rated yet
    fn candidate_items(&self, user_id: UserId, neighbors: &[Neighbor]) -> Vec<ItemId> {
        let index = self.dataset.index();
        let already_rated = index.rated_items(user_id);

        let mut neighbor_counts: HashMap<ItemId, usize> = HashMap::new();
        for neighbor in neighbors {
            for &item_id in index.rated_items(neighbor.user_id) {
                *neighbor_counts.entry(item_id).or_insert(0) += 1;
            }
        }

        neighbor_counts
            .into_iter()
            .filter(|(item_id, count)| {
                *count >= self.config.min_neighbors_per_item && !already_rated.contains(item_id)
            })
            .map(|(item_id, _)| item_id)
            .collect()
    }
}

impl Recommender for SimilarityRecommender {
    fn name(&self) -> &str {
        "SimilarityRecommender"
    }

    #[instrument(skip(self))]
    fn recommend_top(&self, user_id: UserId) -> Result<Vec<Recommendation>> {
        self.dataset
            .require_user(user_id)
            .context("Cannot recommend for user")?;

        let neighbors = self.top_k_similar_users(user_id);
        debug!("Found {} similar users", neighbors.len());

        let candidates = self.candidate_items(user_id, &neighbors);
        debug!("Found {} candidate items", candidates.len());

        let scores: HashMap<ItemId, f64> = candidates
            .into_iter()
            .map(|item_id| (item_id, self.predict(user_id, item_id, &neighbors)))
            .collect();

        let recommendations = rank(scores, &self.dataset, self.config.result_size);
        debug!("Recommending {} items", recommendations.len());
        Ok(recommendations)
    }
}
