//! Core domain types for a ratings snapshot.
//!
//! Users, items and explicit ratings are loaded by an outside collaborator
//! and handed to [`Dataset::new`] in one piece. Everything here is plain data:
//! the derived lookups live in [`crate::index`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::index::RatingIndex;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a user
pub type UserId = u32;

/// Unique identifier for an item
pub type ItemId = u32;

/// Lowest valid rating value
pub const RATING_MIN: f32 = 1.0;

/// Highest valid rating value
pub const RATING_MAX: f32 = 5.0;

// =============================================================================
// Users and Items
// =============================================================================

/// A user of the system. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub gender: Gender,
    /// Age in years
    pub age: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Something that can be rated and recommended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Display name, only used as the final ranking tie-break
    pub name: String,
}

// =============================================================================
// Rating Type
// =============================================================================

/// A single explicit rating from a user for an item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: UserId,
    pub item_id: ItemId,
    /// Rating value from [`RATING_MIN`] to [`RATING_MAX`]
    pub rating: f32,
}

impl Rating {
    pub fn new(user_id: UserId, item_id: ItemId, rating: f32) -> Self {
        Self {
            user_id,
            item_id,
            rating,
        }
    }
}

// =============================================================================
// Statistics Types
// =============================================================================

/// Precomputed statistics for an item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemStats {
    pub avg_rating: f64,
    pub rating_count: u32,
}

// =============================================================================
// Dataset - the immutable snapshot
// =============================================================================

/// One immutable snapshot of users, items and ratings, together with the
/// [`RatingIndex`] derived from the ratings.
///
/// The index is built once in [`Dataset::new`] and never touched again, so a
/// `Dataset` can be shared behind an `Arc` and read from any number of
/// threads. A new set of ratings means a new `Dataset`.
#[derive(Debug)]
pub struct Dataset {
    pub(crate) users: HashMap<UserId, User>,
    pub(crate) items: HashMap<ItemId, Item>,
    pub(crate) ratings: Vec<Rating>,
    pub(crate) index: RatingIndex,
}
