//! Error types for the record store

use gt_core::AllocationError;

/// Record store errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A record could not be encoded or decoded
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No record with this id
    #[error("{collection} record not found: {id}")]
    NotFound {
        /// Collection searched
        collection: String,
        /// Missing id
        id: String,
    },

    /// A stored plan breaks the 100% invariant
    #[error("stored plan is invalid: {0}")]
    InvalidPlan(#[from] AllocationError),
}

impl StoreError {
    /// Build a not-found error
    #[inline]
    pub fn not_found(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// Whether the error only reports a missing record
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
