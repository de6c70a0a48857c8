//! Rating index: every lookup structure derived from a ratings collection.
//!
//! The index is built in one pass by [`RatingIndex::build`] and is never
//! partially refreshed. Lookups for ids that have no ratings return empty or
//! zero defaults instead of failing, so callers never need existence checks.

use crate::types::{ItemId, ItemStats, Rating, UserId};
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap};

static NO_ITEMS: BTreeSet<ItemId> = BTreeSet::new();

/// Grouped ratings plus per-item and per-user aggregates.
#[derive(Debug, Default)]
pub struct RatingIndex {
    /// All ratings received by each item
    ratings_by_item: HashMap<ItemId, Vec<Rating>>,
    /// All ratings made by each user
    ratings_by_user: HashMap<UserId, Vec<Rating>>,
    /// Count and average per item
    item_stats: HashMap<ItemId, ItemStats>,
    /// Items each user has rated, ordered by id
    rated_items_by_user: HashMap<UserId, BTreeSet<ItemId>>,
    total_ratings: usize,
}

impl RatingIndex {
    /// Build the full index from a ratings collection.
    ///
    /// Steps:
    /// 1. Group ratings by item and by user (insertion order is kept)
    /// 2. Collect each user's rated-item set
    /// 3. Compute item statistics in parallel
    pub fn build(ratings: &[Rating]) -> Self {
        let mut index = Self::default();

        for rating in ratings {
            index
                .ratings_by_item
                .entry(rating.item_id)
                .or_insert_with(Vec::new)
                .push(*rating);

            index
                .ratings_by_user
                .entry(rating.user_id)
                .or_insert_with(Vec::new)
                .push(*rating);

            index
                .rated_items_by_user
                .entry(rating.user_id)
                .or_insert_with(BTreeSet::new)
                .insert(rating.item_id);
        }

        index.item_stats = compute_item_stats(&index.ratings_by_item);
        index.total_ratings = ratings.len();
        index
    }

    /// Get all ratings for an item, or an empty slice
    pub fn get_item_ratings(&self, item_id: ItemId) -> &[Rating] {
        self.ratings_by_item
            .get(&item_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Get all ratings made by a user, or an empty slice
    pub fn get_user_ratings(&self, user_id: UserId) -> &[Rating] {
        self.ratings_by_user
            .get(&user_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn get_item_stats(&self, item_id: ItemId) -> Option<&ItemStats> {
        self.item_stats.get(&item_id)
    }

    /// Number of ratings an item received (0 if unknown)
    pub fn item_count(&self, item_id: ItemId) -> u32 {
        self.item_stats
            .get(&item_id)
            .map(|s| s.rating_count)
            .unwrap_or(0)
    }

    /// Average rating of an item (0.0 if unknown)
    pub fn item_average(&self, item_id: ItemId) -> f64 {
        self.item_stats
            .get(&item_id)
            .map(|s| s.avg_rating)
            .unwrap_or(0.0)
    }

    /// Items the user has rated, or an empty set
    pub fn rated_items(&self, user_id: UserId) -> &BTreeSet<ItemId> {
        self.rated_items_by_user.get(&user_id).unwrap_or(&NO_ITEMS)
    }

    pub fn has_rated(&self, user_id: UserId, item_id: ItemId) -> bool {
        self.rated_items(user_id).contains(&item_id)
    }

    /// Ids of all items with at least one rating
    pub fn rated_item_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.ratings_by_item.keys().copied()
    }

    /// Ids of all users with at least one rating
    pub fn rating_user_ids(&self) -> impl Iterator<Item = UserId> + '_ {
        self.ratings_by_user.keys().copied()
    }

    /// Iterate over (item, ratings) groups
    pub fn item_groups(&self) -> impl Iterator<Item = (ItemId, &[Rating])> + '_ {
        self.ratings_by_item
            .iter()
            .map(|(&item_id, ratings)| (item_id, ratings.as_slice()))
    }

    /// Iterate over (user, ratings) groups
    pub fn user_groups(&self) -> impl Iterator<Item = (UserId, &[Rating])> + '_ {
        self.ratings_by_user
            .iter()
            .map(|(&user_id, ratings)| (user_id, ratings.as_slice()))
    }

    pub fn total_ratings(&self) -> usize {
        self.total_ratings
    }
}

/// Compute count and mean rating for every item
fn compute_item_stats(ratings_by_item: &HashMap<ItemId, Vec<Rating>>) -> HashMap<ItemId, ItemStats> {
    ratings_by_item
        .par_iter()
        .map(|(&item_id, ratings)| {
            let rating_count = ratings.len() as u32;
            let avg_rating = mean(ratings.iter().map(|r| r.rating as f64));
            (item_id, ItemStats { avg_rating, rating_count })
        })
        .collect()
}

/// Arithmetic mean, 0.0 for an empty sequence
pub fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count > 0 { sum / count as f64 } else { 0.0 }
}
