//! Error taxonomy for `ChainedHashTable`.

use thiserror::Error;

/// Failures reported by table operations. Both variants are raised before
/// any mutation, so the table is unchanged whenever one is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// An absent (`None`) key, or absent data for `put`, was supplied.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// `remove` was asked for a key with no entry.
    #[error("key does not exist")]
    KeyNotFound,
}

pub type Result<T> = core::result::Result<T, TableError>;
