//! Bias decomposition of explicit ratings.
//!
//! Every rating is split into
//! `value = global + item_bias[item] + user_bias[user] + bias_free`.
//!
//! The tables are filled in dependency order (global, then item, then user,
//! then bias-free) and each stage reads only the finished table of the stage
//! before it.

use dataset::{mean, ItemId, Rating, RatingIndex, UserId};
use std::collections::HashMap;
use tracing::debug;

/// Precomputed bias tables for one snapshot
#[derive(Debug, Default)]
pub struct BiasModel {
    global_bias: f64,
    item_bias: HashMap<ItemId, f64>,
    user_bias: HashMap<UserId, f64>,
    bias_free: HashMap<UserId, HashMap<ItemId, f64>>,
}

impl BiasModel {
    /// Fit all four tables from the snapshot's ratings and its index
    pub fn fit(ratings: &[Rating], index: &RatingIndex) -> Self {
        let global_bias = mean(ratings.iter().map(|r| r.rating as f64));

        let item_bias: HashMap<ItemId, f64> = index
            .item_groups()
            .map(|(item_id, ratings)| {
                let bias = mean(ratings.iter().map(|r| r.rating as f64 - global_bias));
                (item_id, bias)
            })
            .collect();

        let user_bias: HashMap<UserId, f64> = index
            .user_groups()
            .map(|(user_id, ratings)| {
                let bias = mean(ratings.iter().map(|r| {
                    r.rating as f64 - global_bias - item_bias.get(&r.item_id).copied().unwrap_or(0.0)
                }));
                (user_id, bias)
            })
            .collect();

        let bias_free: HashMap<UserId, HashMap<ItemId, f64>> = index
            .user_groups()
            .map(|(user_id, ratings)| {
                let user = user_bias.get(&user_id).copied().unwrap_or(0.0);
                let residuals = ratings
                    .iter()
                    .map(|r| {
                        let item = item_bias.get(&r.item_id).copied().unwrap_or(0.0);
                        (r.item_id, r.rating as f64 - global_bias - item - user)
                    })
                    .collect();
                (user_id, residuals)
            })
            .collect();

        debug!(
            "Fitted bias model: global {:.3}, {} item biases, {} user biases",
            global_bias,
            item_bias.len(),
            user_bias.len()
        );

        Self {
            global_bias,
            item_bias,
            user_bias,
            bias_free,
        }
    }

    /// Mean of all rating values (0.0 with no ratings)
    pub fn global_bias(&self) -> f64 {
        self.global_bias
    }

    /// Item bias, 0.0 for items without ratings
    pub fn item_bias(&self, item_id: ItemId) -> f64 {
        self.item_bias.get(&item_id).copied().unwrap_or(0.0)
    }

    /// User bias, 0.0 for users without ratings
    pub fn user_bias(&self, user_id: UserId) -> f64 {
        self.user_bias.get(&user_id).copied().unwrap_or(0.0)
    }

    /// Residual of the rating `user_id` gave `item_id`, if that rating exists
    pub fn bias_free_rating(&self, user_id: UserId, item_id: ItemId) -> Option<f64> {
        self.bias_free.get(&user_id)?.get(&item_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit(ratings: &[Rating]) -> BiasModel {
        let index = RatingIndex::build(ratings);
        BiasModel::fit(ratings, &index)
    }

    fn sample_ratings() -> Vec<Rating> {
        vec![
            Rating::new(1, 1, 5.0),
            Rating::new(1, 2, 3.0),
            Rating::new(2, 1, 3.0),
        ]
    }

    #[test]
    fn test_global_bias() {
        let model = fit(&sample_ratings());
        assert!((model.global_bias() - 11.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_item_and_user_biases() {
        let model = fit(&sample_ratings());

        // item 1: mean(5, 3) - global = 4 - 11/3
        assert!((model.item_bias(1) - (4.0 - 11.0 / 3.0)).abs() < 1e-9);
        assert!((model.item_bias(2) - (3.0 - 11.0 / 3.0)).abs() < 1e-9);

        // user 1: mean(5 - 4, 3 - 3) ; user 2: 3 - 4
        assert!((model.user_bias(1) - 0.5).abs() < 1e-9);
        assert!((model.user_bias(2) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_bias_free_ratings() {
        let model = fit(&sample_ratings());

        assert!((model.bias_free_rating(1, 1).unwrap() - 0.5).abs() < 1e-9);
        assert!((model.bias_free_rating(1, 2).unwrap() + 0.5).abs() < 1e-9);
        assert!(model.bias_free_rating(2, 1).unwrap().abs() < 1e-9);
        // Only defined where a rating exists
        assert!(model.bias_free_rating(2, 2).is_none());
    }

    #[test]
    fn test_decomposition_identity() {
        let ratings: Vec<Rating> = (1..=6)
            .flat_map(|user_id| {
                (1..=5).filter(move |item_id| (user_id + item_id) % 3 != 0).map(move |item_id| {
                    Rating::new(user_id, item_id, ((user_id * item_id) % 5 + 1) as f32)
                })
            })
            .collect();
        let model = fit(&ratings);

        for r in &ratings {
            let rebuilt = model.global_bias()
                + model.item_bias(r.item_id)
                + model.user_bias(r.user_id)
                + model.bias_free_rating(r.user_id, r.item_id).unwrap();
            assert!((rebuilt - r.rating as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_ratings() {
        let model = fit(&[]);

        assert_eq!(model.global_bias(), 0.0);
        assert_eq!(model.item_bias(1), 0.0);
        assert_eq!(model.user_bias(1), 0.0);
        assert!(model.bias_free_rating(1, 1).is_none());
    }
}
