//! The capability every recommendation strategy shares.

use anyhow::Result;
use dataset::UserId;

use crate::ranking::Recommendation;

/// A strategy that ranks unseen items for a user.
///
/// ## Design Note
/// - `Send + Sync` lets one built strategy serve concurrent callers; all
///   state is read-only after construction
/// - Implementations compose the shared rating index and ranking rule
///   instead of inheriting from a common base
pub trait Recommender: Send + Sync {
    /// Returns the name of this strategy (for logging/debugging)
    fn name(&self) -> &str;

    /// Best-first recommendations for `user_id`, at most the configured
    /// result size.
    ///
    /// # Returns
    /// * `Ok(Vec<Recommendation>)` - possibly empty, never an error for a
    ///   known user
    /// * `Err` - if `user_id` is not part of the snapshot
    fn recommend_top(&self, user_id: UserId) -> Result<Vec<Recommendation>>;
}
