//! Error types for the activity store and its storage backends

use thiserror::Error;

/// Why a candidate record was refused by [`crate::ActivityListStore::add`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("activity label is empty")]
    EmptyActivity,

    /// Price must be a finite number greater than zero
    #[error("price must be a positive number, got {0}")]
    NonPositivePrice(f64),
}

/// Failures talking to a key-value storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// No storage is reachable (no window, storage disabled by the browser)
    #[error("storage is unavailable")]
    Unavailable,

    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),

    /// Mirrors the browser's `QuotaExceededError`
    #[error("storage quota exceeded ({needed} bytes needed, quota is {quota})")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("failed to encode activity list: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors surfaced by store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// A mutation was attempted before `hydrate`
    #[error("store has not been hydrated yet")]
    NotReady,

    /// `hydrate` may only run once per process
    #[error("store was already hydrated")]
    AlreadyHydrated,

    #[error("activity rejected: {0}")]
    Rejected(#[from] ValidationError),

    #[error("no activity at index {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Storage(#[from] StorageError),
}
