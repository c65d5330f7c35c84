//! HTTP request handlers.

pub mod books;

use shelf_core::types::DbId;

use crate::error::AppError;

/// Parse a path-carried resource id.
///
/// Non-numeric, zero, and negative ids all map to [`AppError::NotFound`]
/// rather than a bad-request error, per this API's convention.
pub(crate) fn parse_id_param(raw: &str) -> Result<DbId, AppError> {
    match raw.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::NotFound),
    }
}
