//! # Recommenders Crate
//!
//! Three interchangeable strategies that rank unseen items for a user from
//! one immutable [`dataset::Dataset`] snapshot.
//!
//! ## Components
//!
//! ### Similarity Strategy
//! Bias-corrected user-user collaborative filtering:
//! - Global, item and user biases are removed from every rating
//! - Users are compared on what is left, over at least 10 shared items
//! - The 10 closest users predict ratings for items at least 5 of them rated
//!
//! ### Profile Strategy
//! Averages ratings from users of the same gender and similar age.
//!
//! ### Popularity Strategy
//! Averages ratings of items with at least 100 ratings.
//!
//! All three end with the same ranking rule (score, then rating count, then
//! name) and return at most 10 items by default. Thresholds live in
//! [`RecommenderConfig`].
//!
//! ## Example Usage
//!
//! ```ignore
//! use recommenders::{Recommender, SimilarityRecommender};
//! use std::sync::Arc;
//!
//! let dataset = Arc::new(Dataset::from_records(users, items, ratings));
//! let strategy = SimilarityRecommender::new(dataset.clone());
//!
//! for rec in strategy.recommend_top(user_id)? {
//!     println!("{} ({:.2})", rec.item.name, rec.score);
//! }
//! ```

pub mod config;
pub mod popularity;
pub mod profile;
pub mod ranking;
pub mod similarity;
pub mod traits;

// Re-export commonly used types
pub use config::RecommenderConfig;
pub use popularity::PopularityRecommender;
pub use profile::ProfileRecommender;
pub use ranking::{rank, Recommendation};
pub use similarity::{BiasModel, Neighbor, SimilarityRecommender};
pub use traits::Recommender;
