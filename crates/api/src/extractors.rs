//! Request extractors.

use axum::extract::FromRequest;
use golos_common::AppError;

/// JSON body extractor that reports malformed bodies in the standard
/// `{"error", "timestamp"}` shape instead of axum's plain-text rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);
