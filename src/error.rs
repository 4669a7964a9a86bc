//! Error type for the matching operations.
//!
//! Not finding anything is never an error: misses are reported as `None`,
//! an empty string, or an empty [`ResultCollection`](crate::result::ResultCollection).
//! The variants here cover the cases where a call could not produce an
//! answer at all.

use std::collections::TryReserveError;

#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("allocation failed while growing results: {0}")]
    AllocationFailed(#[from] TryReserveError),

    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("null pointer passed for {0}")]
    NullPointer(&'static str),

    #[error("invalid dictionary length: {0}")]
    InvalidLength(i64),

    #[error("result contains an interior NUL byte")]
    InteriorNul,
}

pub type MatchResult<T> = std::result::Result<T, MatchError>;
