//! Handlers for the book catalog resource.
//!
//! Create, show, full update, partial update, and delete. Every write path
//! validates the composed entity with [`validate_book`] before it touches
//! the store; update paths fetch first and carry the fetched version into
//! the store's conditional write, so concurrent editors fail fast with an
//! edit conflict instead of silently overwriting each other.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use shelf_core::book::{validate_book, Book};
use shelf_core::pages::Pages;
use shelf_core::validator::Validator;

use crate::error::{AppError, AppResult};
use crate::handlers::parse_id_param;
use crate::response::{BookEnvelope, BookPayload, MessageEnvelope};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Body for create and full update.
///
/// Fields default to their zero values when absent so validation reports
/// every missing field in one pass instead of failing at decode time.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct BookRequest {
    pub title: String,
    pub year: i32,
    pub author: String,
    pub pages: Pages,
    pub genres: Vec<String>,
}

/// Body for partial update; only present fields overwrite the fetched book.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct BookPatchRequest {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub pages: Option<Pages>,
    pub genres: Option<Vec<String>>,
}

fn envelope(state: &AppState, book: Book) -> Json<BookEnvelope> {
    Json(BookEnvelope {
        book: BookPayload::new(book, state.config.expose_created_at),
    })
}

fn decode<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    let Json(input) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(input)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /v1/books
///
/// Create a new book. Responds 201 with the created resource and a
/// `Location` header derived from the assigned id.
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = decode(payload)?;

    let book = Book::draft(
        input.title,
        input.author,
        input.year,
        input.pages,
        input.genres,
    );

    let mut v = Validator::new();
    validate_book(&mut v, &book);
    if !v.valid() {
        return Err(AppError::Validation(v.into_errors()));
    }

    let book = state.store.insert(&book).await?;

    tracing::info!(book_id = book.id, title = %book.title, "book created");

    let location = format!("/v1/books/{}", book.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        envelope(&state, book),
    ))
}

/// GET /v1/books/{id}
pub async fn show_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id_param(&id)?;
    let book = state.store.get(id).await?;
    Ok(envelope(&state, book))
}

/// PUT /v1/books/{id}
///
/// Full replace. The current record is fetched first; its version becomes
/// the expected version for the store's conditional write.
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id_param(&id)?;
    let current = state.store.get(id).await?;
    let input = decode(payload)?;

    let book = Book {
        id: current.id,
        created_at: current.created_at,
        title: input.title,
        author: input.author,
        year: input.year,
        pages: input.pages,
        genres: input.genres,
        version: current.version,
    };

    let mut v = Validator::new();
    validate_book(&mut v, &book);
    if !v.valid() {
        return Err(AppError::Validation(v.into_errors()));
    }

    let book = state.store.update(&book).await?;

    tracing::info!(book_id = book.id, version = book.version, "book updated");

    Ok(envelope(&state, book))
}

/// PATCH /v1/books/{id}
///
/// Partial update: only fields present in the body overwrite the fetched
/// book; the composed entity then goes through the same validate-and-update
/// path as a full replace.
pub async fn patch_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<BookPatchRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id_param(&id)?;
    let mut target = state.store.get(id).await?;
    let input = decode(payload)?;

    if let Some(title) = input.title {
        target.title = title;
    }
    if let Some(author) = input.author {
        target.author = author;
    }
    if let Some(year) = input.year {
        target.year = year;
    }
    if let Some(pages) = input.pages {
        target.pages = pages;
    }
    if let Some(genres) = input.genres {
        target.genres = genres;
    }

    let mut v = Validator::new();
    validate_book(&mut v, &target);
    if !v.valid() {
        return Err(AppError::Validation(v.into_errors()));
    }

    let book = state.store.update(&target).await?;

    tracing::info!(book_id = book.id, version = book.version, "book patched");

    Ok(envelope(&state, book))
}

/// DELETE /v1/books/{id}
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id_param(&id)?;
    state.store.delete(id).await?;

    tracing::info!(book_id = id, "book deleted");

    Ok(Json(MessageEnvelope {
        message: "book successfully deleted",
    }))
}
