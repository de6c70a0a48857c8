//! # Dataset Crate
//!
//! Holds one immutable snapshot of users, items and explicit ratings, and the
//! rating index every recommendation strategy reads from.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (User, Item, Rating, Dataset)
//! - **index**: Grouped ratings and per-item / per-user aggregates
//! - **snapshot**: Building, querying and validating a Dataset
//! - **error**: Error types for snapshot checks
//!
//! ## Example Usage
//!
//! ```ignore
//! use dataset::{Dataset, Rating};
//!
//! let dataset = Dataset::from_records(users, items, ratings);
//! dataset.validate()?;
//!
//! let count = dataset.index().item_count(42);
//! let rated = dataset.index().rated_items(7);
//! ```
//!
//! Loading the records from files or a database is left to the caller.

pub mod error;
pub mod index;
pub mod snapshot;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DatasetError, Result};
pub use index::{mean, RatingIndex};
pub use types::{
    // Type aliases
    ItemId,
    UserId,
    // Core types
    Dataset,
    Gender,
    Item,
    ItemStats,
    Rating,
    User,
    // Rating bounds
    RATING_MAX,
    RATING_MIN,
};
