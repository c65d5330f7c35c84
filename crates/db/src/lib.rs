//! Persistence layer for the book catalog.
//!
//! Exposes the [`store::BookStore`] capability trait with two adapters: a
//! PostgreSQL adapter for production and an in-memory adapter for tests and
//! offline development. Connection pool helpers live at the crate root.

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::memory::MemoryBookStore;
pub use store::pg::PgBookStore;
pub use store::BookStore;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

/// Apply any pending migrations from the embedded `migrations/` directory.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
