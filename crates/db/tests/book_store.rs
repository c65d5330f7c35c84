//! Contract tests for the [`BookStore`] trait, run against the in-memory
//! adapter. The PostgreSQL adapter implements the same single-statement
//! conditional-write semantics, so these pin the behaviour both must share:
//! identity/version assignment on insert, the optimistic-concurrency
//! protocol on update, and the NotFound rules on get/delete.

use std::sync::Arc;

use assert_matches::assert_matches;

use shelf_core::book::Book;
use shelf_core::pages::Pages;
use shelf_db::{BookStore, MemoryBookStore, StoreError};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn draft(title: &str) -> Book {
    Book::draft(
        title.to_string(),
        "J. Doe".to_string(),
        2016,
        Pages(300),
        vec!["IT".to_string(), "education".to_string()],
    )
}

// ---------------------------------------------------------------------------
// Insert / Get
// ---------------------------------------------------------------------------

#[tokio::test]
async fn insert_assigns_identity_and_initial_version() {
    let store = MemoryBookStore::new();

    let book = store.insert(&draft("Go in Practice")).await.unwrap();

    assert!(book.id > 0);
    assert_eq!(book.version, 1);
    assert_eq!(book.title, "Go in Practice");
}

#[tokio::test]
async fn insert_assigns_distinct_ids() {
    let store = MemoryBookStore::new();

    let first = store.insert(&draft("first")).await.unwrap();
    let second = store.insert(&draft("second")).await.unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn get_returns_inserted_fields() {
    let store = MemoryBookStore::new();
    let inserted = store.insert(&draft("Go in Practice")).await.unwrap();

    let fetched = store.get(inserted.id).await.unwrap();

    assert_eq!(fetched, inserted);
}

#[tokio::test]
async fn get_missing_id_reports_not_found() {
    let store = MemoryBookStore::new();

    assert_matches!(store.get(42).await, Err(StoreError::NotFound));
}

#[tokio::test]
async fn get_non_positive_id_reports_not_found() {
    let store = MemoryBookStore::new();

    assert_matches!(store.get(0).await, Err(StoreError::NotFound));
    assert_matches!(store.get(-1).await, Err(StoreError::NotFound));
}

// ---------------------------------------------------------------------------
// Update / optimistic concurrency
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_increments_version_by_one() {
    let store = MemoryBookStore::new();
    let mut book = store.insert(&draft("Go in Practice")).await.unwrap();

    book.year = 2024;
    let updated = store.update(&book).await.unwrap();

    assert_eq!(updated.version, 2);
    assert_eq!(updated.year, 2024);
    assert_eq!(store.get(book.id).await.unwrap().version, 2);
}

#[tokio::test]
async fn update_preserves_created_at() {
    let store = MemoryBookStore::new();
    let mut book = store.insert(&draft("Go in Practice")).await.unwrap();

    book.title = "Go in Practice, 2nd ed.".to_string();
    let updated = store.update(&book).await.unwrap();

    assert_eq!(updated.created_at, book.created_at);
}

#[tokio::test]
async fn stale_update_conflicts_and_preserves_winner() {
    let store = MemoryBookStore::new();
    let inserted = store.insert(&draft("Go in Practice")).await.unwrap();

    // Two editors read the same version.
    let mut first = inserted.clone();
    let mut second = inserted.clone();

    first.title = "winner".to_string();
    let won = store.update(&first).await.unwrap();
    assert_eq!(won.version, 2);

    second.title = "loser".to_string();
    assert_matches!(store.update(&second).await, Err(StoreError::EditConflict));

    // The loser's attempt must not have touched the row.
    let current = store.get(inserted.id).await.unwrap();
    assert_eq!(current.title, "winner");
    assert_eq!(current.version, 2);
}

#[tokio::test]
async fn concurrent_updates_exactly_one_wins() {
    let store = Arc::new(MemoryBookStore::new());
    let inserted = store.insert(&draft("Go in Practice")).await.unwrap();

    let mut left = inserted.clone();
    left.title = "left".to_string();
    let mut right = inserted.clone();
    right.title = "right".to_string();

    let left_store = Arc::clone(&store);
    let right_store = Arc::clone(&store);
    let (left_result, right_result) = tokio::join!(
        tokio::spawn(async move { left_store.update(&left).await }),
        tokio::spawn(async move { right_store.update(&right).await }),
    );
    let left_result = left_result.unwrap();
    let right_result = right_result.unwrap();

    let winners = [&left_result, &right_result]
        .iter()
        .filter(|r| r.is_ok())
        .count();
    assert_eq!(winners, 1, "exactly one concurrent update must commit");

    let winner = if left_result.is_ok() { "left" } else { "right" };
    let current = store.get(inserted.id).await.unwrap();
    assert_eq!(current.title, winner);
    assert_eq!(current.version, 2);
}

#[tokio::test]
async fn update_of_missing_record_reports_conflict() {
    let store = MemoryBookStore::new();
    let mut book = draft("ghost");
    book.id = 99;
    book.version = 1;

    assert_matches!(store.update(&book).await, Err(StoreError::EditConflict));
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_removes_the_record() {
    let store = MemoryBookStore::new();
    let book = store.insert(&draft("Go in Practice")).await.unwrap();

    store.delete(book.id).await.unwrap();

    assert_matches!(store.get(book.id).await, Err(StoreError::NotFound));
}

#[tokio::test]
async fn delete_non_positive_id_reports_not_found() {
    let store = MemoryBookStore::new();

    assert_matches!(store.delete(0).await, Err(StoreError::NotFound));
    assert_matches!(store.delete(-7).await, Err(StoreError::NotFound));
}

#[tokio::test]
async fn double_delete_reports_not_found() {
    let store = MemoryBookStore::new();
    let book = store.insert(&draft("Go in Practice")).await.unwrap();

    store.delete(book.id).await.unwrap();

    assert_matches!(store.delete(book.id).await, Err(StoreError::NotFound));
}
