use axum::{
    Json,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tracing::debug;

use super::ErrorResponse;

/// Handler for 404 Not Found errors.
///
/// Used as the router fallback by [`crate::server::create_router`].
pub async fn not_found(uri: Uri) -> Response {
    debug!(path = %uri.path(), "no route matched");

    let body = Json(ErrorResponse::new(
        "NotFound",
        "The requested resource was not found",
    ));

    (StatusCode::NOT_FOUND, body).into_response()
}
