//! Shared response envelope types for API handlers.
//!
//! All resource responses use a named-wrapper envelope per project
//! conventions: a book travels under the `book` key and status messages
//! under `message`. [`BookPayload`] is the outbound shape of a book;
//! `created_at` is included only when the server is configured to expose it.

use serde::Serialize;

use shelf_core::book::Book;
use shelf_core::pages::Pages;
use shelf_core::types::{DbId, Timestamp};

/// Standard `{ "book": ... }` response envelope.
#[derive(Debug, Serialize)]
pub struct BookEnvelope {
    pub book: BookPayload,
}

/// Standard `{ "message": ... }` response envelope.
#[derive(Debug, Serialize)]
pub struct MessageEnvelope {
    pub message: &'static str,
}

/// Outbound encoding of a [`Book`].
///
/// `pages` serializes through the [`Pages`] codec to its textual wire form.
#[derive(Debug, Serialize)]
pub struct BookPayload {
    pub id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub pages: Pages,
    pub genres: Vec<String>,
    pub version: i32,
}

impl BookPayload {
    pub fn new(book: Book, expose_created_at: bool) -> Self {
        Self {
            id: book.id,
            created_at: expose_created_at.then_some(book.created_at),
            title: book.title,
            author: book.author,
            year: book.year,
            pages: book.pages,
            genres: book.genres,
            version: book.version,
        }
    }
}
