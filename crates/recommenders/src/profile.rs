//! Profile Strategy - demographic filtering
//!
//! Recommends what people like the user rated well.
//!
//! ## Algorithm
//! 1. Matching users: same gender, age within `profile_age_window` years,
//!    not the user themself
//! 2. Average each item's ratings from matching users only
//! 3. Keep items with at least `profile_min_ratings` such ratings that the
//!    user has not rated
//! 4. Rank by that average

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use dataset::{Dataset, ItemId, User, UserId};
use tracing::{debug, instrument};

use crate::config::RecommenderConfig;
use crate::ranking::{rank, Recommendation};
use crate::traits::Recommender;

pub struct ProfileRecommender {
    dataset: Arc<Dataset>,
    config: RecommenderConfig,
}

impl ProfileRecommender {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_config(dataset, RecommenderConfig::default())
    }

    pub fn with_config(dataset: Arc<Dataset>, config: RecommenderConfig) -> Self {
        Self { dataset, config }
    }

    /// Ids of users whose profile matches `user_id`, ascending
    pub fn get_matching_profile_users(&self, user_id: UserId) -> Result<Vec<UserId>> {
        let user = self
            .dataset
            .require_user(user_id)
            .context("Cannot match profile")?;
        Ok(self.matching_profile_users(user))
    }

    fn matching_profile_users(&self, user: &User) -> Vec<UserId> {
        let mut matching: Vec<UserId> = self
            .dataset
            .users()
            .filter(|other| other.gender == user.gender)
            .filter(|other| other.age.abs_diff(user.age) <= self.config.profile_age_window)
            .filter(|other| other.id != user.id)
            .map(|other| other.id)
            .collect();
        matching.sort_unstable();
        matching
    }
}

impl Recommender for ProfileRecommender {
    fn name(&self) -> &str {
        "ProfileRecommender"
    }

    #[instrument(skip(self))]
    fn recommend_top(&self, user_id: UserId) -> Result<Vec<Recommendation>> {
        let user = self
            .dataset
            .require_user(user_id)
            .context("Cannot recommend for user")?;
        let index = self.dataset.index();

        let matching = self.matching_profile_users(user);
        debug!("Found {} users with a matching profile", matching.len());

        // (sum, count) per item over the matching users' ratings
        let mut item_totals: HashMap<ItemId, (f64, usize)> = HashMap::new();
        for &other in &matching {
            for rating in index.get_user_ratings(other) {
                let entry = item_totals.entry(rating.item_id).or_insert((0.0, 0));
                entry.0 += rating.rating as f64;
                entry.1 += 1;
            }
        }

        let already_rated = index.rated_items(user_id);
        let scores: HashMap<ItemId, f64> = item_totals
            .into_iter()
            .filter(|(item_id, (_, count))| {
                *count >= self.config.profile_min_ratings && !already_rated.contains(item_id)
            })
            .map(|(item_id, (sum, count))| (item_id, sum / count as f64))
            .collect();

        Ok(rank(scores, &self.dataset, self.config.result_size))
    }
}
