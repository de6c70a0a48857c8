//! Error types for the dataset crate.
//!
//! Building a snapshot never fails; these errors come out of
//! [`Dataset::validate`](crate::Dataset::validate) and the checked lookups
//! that callers use to verify ids before asking for recommendations.

use crate::types::{ItemId, UserId};
use thiserror::Error;

/// Errors reported while checking a ratings snapshot
///
/// The `#[derive(Error)]` macro from thiserror implements `std::error::Error`
/// and `Display` from the `#[error(...)]` attributes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DatasetError {
    /// A rating points at a user or item that is not in the snapshot
    #[error("Missing reference: {entity} with id {id}")]
    MissingReference { entity: String, id: u32 },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// The same (user, item) pair was rated more than once
    #[error("Duplicate rating: user {user_id} rated item {item_id} more than once")]
    DuplicateRating { user_id: UserId, item_id: ItemId },

    /// Lookup of a user that is not part of the snapshot
    #[error("User {0} not found")]
    UnknownUser(UserId),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DatasetError>;
