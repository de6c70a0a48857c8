//! Rating prediction from biases and a neighborhood.

use dataset::{ItemId, UserId};

use super::{Neighbor, SimilarityRecommender};

impl SimilarityRecommender {
    /// Predicted rating of `item_id` by `user_id`:
    ///
    /// `global + item_bias + user_bias + weighted_avg`
    ///
    /// where `weighted_avg` is the similarity-weighted mean of the bias-free
    /// ratings that neighbors gave the item. Neighbors who never rated it are
    /// ignored; with no usable weight the average term is 0.0 and the
    /// prediction is the pure bias estimate.
    pub fn predict(&self, user_id: UserId, item_id: ItemId, neighbors: &[Neighbor]) -> f64 {
        let (weighted_sum, weight_total) = neighbors
            .iter()
            .filter_map(|neighbor| {
                self.bias
                    .bias_free_rating(neighbor.user_id, item_id)
                    .map(|residual| (neighbor.similarity * residual, neighbor.similarity))
            })
            .fold((0.0, 0.0), |(sum, total), (value, weight)| {
                (sum + value, total + weight)
            });

        let weighted_avg = if weight_total == 0.0 {
            0.0
        } else {
            weighted_sum / weight_total
        };

        self.bias.global_bias() + self.bias.item_bias(item_id) + self.bias.user_bias(user_id) + weighted_avg
    }
}
