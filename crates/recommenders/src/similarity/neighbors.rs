//! Pairwise user similarity and neighborhood selection.

use dataset::{ItemId, UserId};
use rayon::prelude::*;

use super::SimilarityRecommender;

/// A similar user and how similar they are
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub user_id: UserId,
    pub similarity: f64,
}

impl SimilarityRecommender {
    /// Dot product of the two users' bias-free ratings over the items both
    /// rated.
    ///
    /// Exactly 0.0 when they share fewer than `min_shared_items` items,
    /// whatever the dot product would be. Shared items are visited in id
    /// order, so the result is symmetric bit for bit.
    pub fn get_similarity(&self, user_a: UserId, user_b: UserId) -> f64 {
        let index = self.dataset.index();
        let shared: Vec<ItemId> = index
            .rated_items(user_a)
            .intersection(index.rated_items(user_b))
            .copied()
            .collect();

        if shared.len() < self.config.min_shared_items {
            return 0.0;
        }

        shared
            .iter()
            .map(|&item_id| {
                self.get_bias_free_rating(user_a, item_id) * self.get_bias_free_rating(user_b, item_id)
            })
            .sum()
    }

    /// The `neighborhood_size` users most similar to `user_id`, best first.
    ///
    /// Users with similarity <= 0.0 never qualify. Which of several users
    /// with exactly equal similarity survives the cutoff is not part of the
    /// contract; in practice ascending user id wins because candidates are
    /// visited in that order and the sort is stable.
    pub fn top_k_similar_users(&self, user_id: UserId) -> Vec<Neighbor> {
        let mut neighbors: Vec<Neighbor> = self
            .dataset
            .sorted_user_ids()
            .par_iter()
            .filter(|&&other| other != user_id)
            .map(|&other| Neighbor {
                user_id: other,
                similarity: self.get_similarity(user_id, other),
            })
            .filter(|neighbor| neighbor.similarity > 0.0)
            .collect();

        neighbors.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        neighbors.truncate(self.config.neighborhood_size);
        neighbors
    }
}
