//! In-memory adapter for tests and offline development.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use shelf_core::book::Book;
use shelf_core::types::DbId;

use crate::error::StoreError;
use crate::store::BookStore;

/// [`BookStore`] over a mutex-guarded map.
///
/// Mirrors the PostgreSQL adapter's semantics: ids are assigned from a
/// monotonic counter and never reused, and the version check in `update`
/// happens under the same lock as the mutation.
#[derive(Debug, Default)]
pub struct MemoryBookStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: DbId,
    rows: HashMap<DbId, Book>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn insert(&self, book: &Book) -> Result<Book, StoreError> {
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let stored = Book {
            id: inner.next_id,
            created_at: Utc::now(),
            version: 1,
            ..book.clone()
        };
        inner.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: DbId) -> Result<Book, StoreError> {
        if id < 1 {
            return Err(StoreError::NotFound);
        }
        let inner = self.inner.lock().await;
        inner.rows.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn update(&self, book: &Book) -> Result<Book, StoreError> {
        let mut inner = self.inner.lock().await;
        // Like the conditional UPDATE, a missing row and a stale version are
        // indistinguishable to the caller.
        let current = inner.rows.get_mut(&book.id).ok_or(StoreError::EditConflict)?;
        if current.version != book.version {
            return Err(StoreError::EditConflict);
        }
        current.title = book.title.clone();
        current.author = book.author.clone();
        current.year = book.year;
        current.pages = book.pages;
        current.genres = book.genres.clone();
        current.version += 1;
        Ok(current.clone())
    }

    async fn delete(&self, id: DbId) -> Result<(), StoreError> {
        if id < 1 {
            return Err(StoreError::NotFound);
        }
        let mut inner = self.inner.lock().await;
        inner.rows.remove(&id).map(|_| ()).ok_or(StoreError::NotFound)
    }
}
