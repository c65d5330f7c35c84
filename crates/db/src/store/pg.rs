//! PostgreSQL adapter for the `books` table.

use async_trait::async_trait;
use sqlx::PgPool;

use shelf_core::book::Book;
use shelf_core::pages::Pages;
use shelf_core::types::{DbId, Timestamp};

use crate::error::StoreError;
use crate::store::BookStore;

/// Column list for books queries.
const COLUMNS: &str = "id, created_at, title, author, year, pages, genres, version";

/// Production [`BookStore`] backed by a PostgreSQL connection pool.
pub struct PgBookStore {
    pool: PgPool,
}

impl PgBookStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn insert(&self, book: &Book) -> Result<Book, StoreError> {
        let query = format!(
            "INSERT INTO books (title, author, year, pages, genres) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, BookRow>(&query)
            .bind(&book.title)
            .bind(&book.author)
            .bind(book.year)
            .bind(book.pages.0)
            .bind(&book.genres)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn get(&self, id: DbId) -> Result<Book, StoreError> {
        if id < 1 {
            return Err(StoreError::NotFound);
        }
        let query = format!("SELECT {COLUMNS} FROM books WHERE id = $1");
        sqlx::query_as::<_, BookRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Book::from)
            .ok_or(StoreError::NotFound)
    }

    async fn update(&self, book: &Book) -> Result<Book, StoreError> {
        // The version check and the mutation share one statement, so the
        // read-modify-write race is closed without holding locks.
        let query = format!(
            "UPDATE books \
             SET title = $1, author = $2, year = $3, pages = $4, genres = $5, \
                 version = version + 1 \
             WHERE id = $6 AND version = $7 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BookRow>(&query)
            .bind(&book.title)
            .bind(&book.author)
            .bind(book.year)
            .bind(book.pages.0)
            .bind(&book.genres)
            .bind(book.id)
            .bind(book.version)
            .fetch_optional(&self.pool)
            .await?
            .map(Book::from)
            .ok_or(StoreError::EditConflict)
    }

    async fn delete(&self, id: DbId) -> Result<(), StoreError> {
        if id < 1 {
            return Err(StoreError::NotFound);
        }
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

/// Internal row struct mapping the `books` table to the domain entity.
#[derive(Debug, sqlx::FromRow)]
struct BookRow {
    id: DbId,
    created_at: Timestamp,
    title: String,
    author: String,
    year: i32,
    pages: i32,
    genres: Vec<String>,
    version: i32,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book {
            id: row.id,
            created_at: row.created_at,
            title: row.title,
            author: row.author,
            year: row.year,
            pages: Pages(row.pages),
            genres: row.genres,
            version: row.version,
        }
    }
}
