//! Shared test snapshot for the similarity strategy.
//!
//! - User 1: rates items 1..=12 (odd items 5.0, even items 1.0)
//! - Users 2..=6: same taste on 1..=12, plus item 13 (4.0) and 14 (2.0)
//! - User 7: opposite taste on 1..=12
//! - User 8: only items 13, 14, 15, so never shares 10 items with anyone
//! - User 9: same taste on 1..=12 and already rated 13 and 14
//! - Item 15 is rated by users 2, 3, 4 and 8

use dataset::{Dataset, Gender, Item, Rating, User};

pub(crate) fn taste(item_id: u32) -> f32 {
    if item_id % 2 == 1 { 5.0 } else { 1.0 }
}

pub(crate) fn create_test_dataset() -> Dataset {
    let users: Vec<User> = (1..=9)
        .map(|id| User {
            id,
            gender: Gender::Male,
            age: 30,
        })
        .collect();

    let items: Vec<Item> = (1..=15)
        .map(|id| Item {
            id,
            name: format!("Item {:02}", id),
        })
        .collect();

    let mut ratings = Vec::new();
    for user_id in [1, 2, 3, 4, 5, 6, 9] {
        for item_id in 1..=12 {
            ratings.push(Rating::new(user_id, item_id, taste(item_id)));
        }
    }
    for item_id in 1..=12 {
        ratings.push(Rating::new(7, item_id, 6.0 - taste(item_id)));
    }
    for user_id in [2, 3, 4, 5, 6, 8, 9] {
        ratings.push(Rating::new(user_id, 13, 4.0));
        ratings.push(Rating::new(user_id, 14, 2.0));
    }
    for user_id in [2, 3, 4, 8] {
        ratings.push(Rating::new(user_id, 15, 5.0));
    }

    Dataset::from_records(users, items, ratings)
}
