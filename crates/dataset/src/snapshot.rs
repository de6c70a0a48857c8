//! Building and querying a [`Dataset`] snapshot.

use crate::error::{DatasetError, Result};
use crate::index::RatingIndex;
use crate::types::*;
use std::collections::{HashMap, HashSet};
use tracing::info;

impl Dataset {
    /// Build a snapshot and its rating index.
    ///
    /// The index is derived from `ratings` alone. Nothing is validated here;
    /// run [`Dataset::validate`] first if the input comes from an untrusted
    /// source.
    pub fn new(
        users: HashMap<UserId, User>,
        items: HashMap<ItemId, Item>,
        ratings: Vec<Rating>,
    ) -> Self {
        let index = RatingIndex::build(&ratings);

        info!(
            "Built dataset snapshot: {} users, {} items, {} ratings",
            users.len(),
            items.len(),
            ratings.len()
        );

        Self {
            users,
            items,
            ratings,
            index,
        }
    }

    /// Build a snapshot from plain record lists, keyed by their ids
    pub fn from_records(users: Vec<User>, items: Vec<Item>, ratings: Vec<Rating>) -> Self {
        let users = users.into_iter().map(|u| (u.id, u)).collect();
        let items = items.into_iter().map(|i| (i.id, i)).collect();
        Self::new(users, items, ratings)
    }

    pub fn get_user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// Like [`Dataset::get_user`], but an unknown id is an error
    pub fn require_user(&self, id: UserId) -> Result<&User> {
        self.users.get(&id).ok_or(DatasetError::UnknownUser(id))
    }

    pub fn get_item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// All user ids in ascending order
    pub fn sorted_user_ids(&self) -> Vec<UserId> {
        let mut ids: Vec<UserId> = self.users.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// The lookup structures derived from this snapshot's ratings
    pub fn index(&self) -> &RatingIndex {
        &self.index
    }

    /// Get counts for debugging/validation
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.users.len(), self.items.len(), self.ratings.len())
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - every rating references a known user and item
    /// - rating values lie in [`RATING_MIN`, `RATING_MAX`]
    /// - no (user, item) pair is rated twice
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashSet<(UserId, ItemId)> = HashSet::with_capacity(self.ratings.len());

        for rating in &self.ratings {
            if !self.users.contains_key(&rating.user_id) {
                return Err(DatasetError::MissingReference {
                    entity: "User".to_string(),
                    id: rating.user_id,
                });
            }
            if !self.items.contains_key(&rating.item_id) {
                return Err(DatasetError::MissingReference {
                    entity: "Item".to_string(),
                    id: rating.item_id,
                });
            }
            if !(RATING_MIN..=RATING_MAX).contains(&rating.rating) {
                return Err(DatasetError::InvalidValue {
                    field: "rating".to_string(),
                    value: rating.rating.to_string(),
                });
            }
            if !seen.insert((rating.user_id, rating.item_id)) {
                return Err(DatasetError::DuplicateRating {
                    user_id: rating.user_id,
                    item_id: rating.item_id,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_dataset(ratings: Vec<Rating>) -> Dataset {
        let users = vec![
            User {
                id: 1,
                gender: Gender::Male,
                age: 30,
            },
            User {
                id: 2,
                gender: Gender::Female,
                age: 25,
            },
        ];
        let items = vec![
            Item {
                id: 100,
                name: "Alpha".to_string(),
            },
            Item {
                id: 200,
                name: "Beta".to_string(),
            },
        ];
        Dataset::from_records(users, items, ratings)
    }

    #[test]
    fn test_snapshot_builds_index() {
        let dataset = create_test_dataset(vec![
            Rating::new(1, 100, 4.0),
            Rating::new(2, 100, 2.0),
            Rating::new(2, 200, 5.0),
        ]);

        assert_eq!(dataset.counts(), (2, 2, 3));
        assert_eq!(dataset.index().item_count(100), 2);
        assert!((dataset.index().item_average(100) - 3.0).abs() < 1e-9);
        assert_eq!(dataset.get_item(200).unwrap().name, "Beta");
        assert_eq!(dataset.sorted_user_ids(), vec![1, 2]);
    }

    #[test]
    fn test_require_user() {
        let dataset = create_test_dataset(vec![]);

        assert_eq!(dataset.require_user(1).unwrap().age, 30);
        assert_eq!(
            dataset.require_user(42).unwrap_err(),
            DatasetError::UnknownUser(42)
        );
    }

    #[test]
    fn test_validate_accepts_clean_snapshot() {
        let dataset = create_test_dataset(vec![
            Rating::new(1, 100, 1.0),
            Rating::new(1, 200, 5.0),
        ]);
        assert!(dataset.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_references() {
        let dataset = create_test_dataset(vec![Rating::new(9, 100, 3.0)]);
        assert!(matches!(
            dataset.validate(),
            Err(DatasetError::MissingReference { id: 9, .. })
        ));

        let dataset = create_test_dataset(vec![Rating::new(1, 999, 3.0)]);
        assert!(matches!(
            dataset.validate(),
            Err(DatasetError::MissingReference { id: 999, .. })
        ));
    }

    #[test]
    fn test_validate_rating_range() {
        let dataset = create_test_dataset(vec![Rating::new(1, 100, 5.5)]);
        assert!(matches!(
            dataset.validate(),
            Err(DatasetError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_validate_duplicate_rating() {
        let dataset = create_test_dataset(vec![
            Rating::new(2, 200, 3.0),
            Rating::new(2, 200, 4.0),
        ]);
        assert_eq!(
            dataset.validate(),
            Err(DatasetError::DuplicateRating {
                user_id: 2,
                item_id: 200
            })
        );
    }

    #[test]
    fn test_records_round_trip_through_json() {
        let rating = Rating::new(1, 100, 4.5);
        let json = serde_json::to_string(&rating).unwrap();
        let parsed: Rating = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rating);
    }
}
