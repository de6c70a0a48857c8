//! Popularity Strategy - well-rated items with plenty of evidence
//!
//! Only items with at least `popularity_min_ratings` ratings qualify; they
//! are scored by their plain average rating. The only personalization is
//! leaving out what the user already rated.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use dataset::{Dataset, ItemId, UserId};
use tracing::{debug, instrument};

use crate::config::RecommenderConfig;
use crate::ranking::{rank, Recommendation};
use crate::traits::Recommender;

pub struct PopularityRecommender {
    dataset: Arc<Dataset>,
    config: RecommenderConfig,
}

impl PopularityRecommender {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_config(dataset, RecommenderConfig::default())
    }

    pub fn with_config(dataset: Arc<Dataset>, config: RecommenderConfig) -> Self {
        Self { dataset, config }
    }

    pub fn get_item_average_rating(&self, item_id: ItemId) -> f64 {
        self.dataset.index().item_average(item_id)
    }

    pub fn get_item_ratings_count(&self, item_id: ItemId) -> u32 {
        self.dataset.index().item_count(item_id)
    }
}

impl Recommender for PopularityRecommender {
    fn name(&self) -> &str {
        "PopularityRecommender"
    }

    #[instrument(skip(self))]
    fn recommend_top(&self, user_id: UserId) -> Result<Vec<Recommendation>> {
        self.dataset
            .require_user(user_id)
            .context("Cannot recommend for user")?;
        let index = self.dataset.index();
        let already_rated = index.rated_items(user_id);

        let scores: HashMap<ItemId, f64> = index
            .rated_item_ids()
            .filter(|&item_id| self.get_item_ratings_count(item_id) >= self.config.popularity_min_ratings)
            .filter(|item_id| !already_rated.contains(item_id))
            .map(|item_id| (item_id, self.get_item_average_rating(item_id)))
            .collect();
        debug!("{} popular items not yet rated", scores.len());

        Ok(rank(scores, &self.dataset, self.config.result_size))
    }
}
