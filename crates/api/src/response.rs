//! API response helpers.

use axum::{http::StatusCode, response::IntoResponse};

/// Empty success response for deletions.
#[must_use]
pub fn no_content() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}
