pub mod books;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/v1` route tree.
///
/// ```text
/// /books                  POST   -> create_book
/// /books/{id}             GET    -> show_book
///                         PUT    -> update_book
///                         PATCH  -> patch_book
///                         DELETE -> delete_book
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/books", books::router())
}
