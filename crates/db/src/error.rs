use thiserror::Error;

/// Classified outcome of a store operation.
///
/// `NotFound` and `EditConflict` are expected, recoverable-by-retry
/// outcomes; `Storage` wraps any lower-level persistence failure and is
/// treated as non-recoverable by callers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No live record exists for the requested id.
    #[error("record not found")]
    NotFound,

    /// The persisted version no longer matches the caller's expected
    /// version; the caller's change was discarded.
    #[error("edit conflict")]
    EditConflict,

    /// Any unclassified database error.
    #[error(transparent)]
    Storage(#[from] sqlx::Error),
}
