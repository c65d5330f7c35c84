//! The book storage capability and its adapters.

pub mod memory;
pub mod pg;

use async_trait::async_trait;
use shelf_core::book::Book;
use shelf_core::types::DbId;

use crate::error::StoreError;

/// Persistence operations for books.
///
/// Implementations must make each operation a single atomic unit: `update`
/// in particular commits only if the persisted version still equals
/// `book.version`, incrementing it by exactly 1, so two callers racing from
/// the same read see exactly one winner and one [`StoreError::EditConflict`].
///
/// Callers are expected to have validated the book before `insert` and
/// `update`; the store enforces only structural constraints.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Persist a new book, assigning id, creation timestamp and version 1.
    /// Returns the fully populated entity.
    async fn insert(&self, book: &Book) -> Result<Book, StoreError>;

    /// Fetch the current persisted book for `id`.
    async fn get(&self, id: DbId) -> Result<Book, StoreError>;

    /// Commit `book` iff the persisted version equals `book.version`.
    /// Returns the new state with the incremented version.
    async fn update(&self, book: &Book) -> Result<Book, StoreError>;

    /// Hard-delete the book identified by `id`.
    async fn delete(&self, id: DbId) -> Result<(), StoreError>;
}
