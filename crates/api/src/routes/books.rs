//! Route definitions for the book catalog resource.
//!
//! Mounted at `/books` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::books;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(books::create_book))
        .route(
            "/{id}",
            get(books::show_book)
                .put(books::update_book)
                .patch(books::patch_book)
                .delete(books::delete_book),
        )
}
