//! Errors surfaced by the recommendation engine.
//!
//! Every failure the engine can report comes from reading the membership
//! store. An empty result is never an error.

use crate::db::DbError;
use thiserror::Error;

/// Recommendation failures.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// A store read failed (connection, query, row decoding or deadline).
    #[error("store read failed: {0}")]
    StoreRead(#[from] DbError),
}

impl RecommendError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::StoreRead(DbError::Timeout(_)) => "store_timeout",
            Self::StoreRead(_) => "store_read_failure",
        }
    }
}

/// Result type for recommendation calls.
pub type RecommendResult<T> = Result<T, RecommendError>;
