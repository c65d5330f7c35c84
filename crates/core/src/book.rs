//! The book entity and its validation rules.

use chrono::{Datelike, Utc};

use crate::pages::Pages;
use crate::types::{DbId, Timestamp};
use crate::validator::{unique, Validator};

/// Maximum length of a book title in bytes.
pub const MAX_TITLE_BYTES: usize = 500;

/// Maximum number of genres a book may carry.
pub const MAX_GENRES: usize = 5;

/// A catalog book.
///
/// `id`, `created_at` and `version` are assigned by the store: `id` and
/// `created_at` once on insert, `version` starting at 1 and incremented by
/// exactly 1 on every successful update. Clients never set any of them.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: DbId,
    pub created_at: Timestamp,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub pages: Pages,
    pub genres: Vec<String>,
    pub version: i32,
}

impl Book {
    /// Build an unsaved book from request fields.
    ///
    /// The placeholder `id`, `created_at` and `version` are overwritten by
    /// the store on insert.
    pub fn draft(
        title: String,
        author: String,
        year: i32,
        pages: Pages,
        genres: Vec<String>,
    ) -> Self {
        Self {
            id: 0,
            created_at: Utc::now(),
            title,
            author,
            year,
            pages,
            genres,
            version: 0,
        }
    }
}

/// Run every field rule against `book`, recording violations in `v`.
///
/// All checks run unconditionally so one pass surfaces every violation;
/// the caller inspects [`Validator::valid`] afterwards.
pub fn validate_book(v: &mut Validator, book: &Book) {
    v.check(!book.title.is_empty(), "title", "must be provided");
    v.check(
        book.title.len() <= MAX_TITLE_BYTES,
        "title",
        "must not be more than 500 bytes long",
    );

    v.check(!book.author.is_empty(), "author", "must be provided");

    v.check(book.year != 0, "year", "must be provided");
    v.check(
        book.year <= Utc::now().year(),
        "year",
        "must not be in the future",
    );

    v.check(book.pages != Pages(0), "pages", "must be provided");
    v.check(book.pages.0 > 0, "pages", "must be a positive integer");

    v.check(
        !book.genres.is_empty(),
        "genres",
        "must contain at least 1 genre",
    );
    v.check(
        book.genres.len() <= MAX_GENRES,
        "genres",
        "must not contain more than 5 genres",
    );
    v.check(
        unique(&book.genres),
        "genres",
        "must not contain duplicate values",
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
