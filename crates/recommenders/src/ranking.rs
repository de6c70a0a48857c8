//! The ranking rule every strategy ends with.
//!
//! Sort order, strictly in this priority:
//! 1. score, descending
//! 2. number of ratings the item received, descending
//! 3. item name, ascending
//!
//! then truncate to the requested size.

use dataset::{Dataset, Item, ItemId};
use std::collections::HashMap;

/// One ranked result
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub item: Item,
    pub score: f64,
    /// Ratings the item received in the snapshot
    pub rating_count: u32,
}

impl Recommendation {
    pub fn item_id(&self) -> ItemId {
        self.item.id
    }
}

/// Rank scored items and keep the best `limit`.
///
/// Ids without a catalog entry are skipped. Fewer scored items than `limit`
/// simply yields a shorter list.
pub fn rank(scores: HashMap<ItemId, f64>, dataset: &Dataset, limit: usize) -> Vec<Recommendation> {
    let index = dataset.index();

    let mut scored: Vec<(&Item, f64, u32)> = scores
        .into_iter()
        .filter_map(|(item_id, score)| {
            let item = dataset.get_item(item_id)?;
            Some((item, score, index.item_count(item_id)))
        })
        .collect();

    // total_cmp keeps the sort total even if a NaN slips in; the id only
    // separates items that agree on every other key
    scored.sort_by(|a, b| {
        b.1.total_cmp(&a.1)
            .then_with(|| b.2.cmp(&a.2))
            .then_with(|| a.0.name.cmp(&b.0.name))
            .then_with(|| a.0.id.cmp(&b.0.id))
    });
    scored.truncate(limit);

    scored
        .into_iter()
        .map(|(item, score, rating_count)| Recommendation {
            item: item.clone(),
            score,
            rating_count,
        })
        .collect()
}
