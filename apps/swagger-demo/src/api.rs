//! Sample endpoints documented in the generated OpenAPI document

use axum::{Json, Router, extract::Path, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct Pet {
    pub id: i64,
}

/// Get string by ID
#[utoipa::path(
    get,
    path = "/testapi/get-string-by-int/{some_id}",
    tag = "testapi",
    params(
        ("some_id" = i64, Path, description = "Some ID")
    ),
    responses(
        (status = 200, description = "ok", body = Pet),
        (status = 400, description = "We need ID!!"),
        (status = 404, description = "Can not find ID", body = axum_helpers::ErrorResponse)
    )
)]
pub async fn get_string_by_int(Path(some_id): Path<i64>) -> Json<Pet> {
    Json(Pet { id: some_id })
}

/// Get struct array by ID
#[utoipa::path(
    get,
    path = "/testapi/get-struct-array-by-string/{some_id}",
    tag = "testapi",
    params(
        ("some_id" = i64, Path, description = "Some ID"),
        ("offset" = Option<i32>, Query, description = "Offset"),
        ("limit" = Option<i32>, Query, description = "Limit")
    ),
    responses(
        (status = 200, description = "ok", body = String, content_type = "text/plain"),
        (status = 400, description = "We need ID!!"),
        (status = 404, description = "Can not find ID", body = axum_helpers::ErrorResponse)
    )
)]
pub async fn get_struct_array_by_string(Path(some_id): Path<i64>) -> String {
    format!("OK: GetStructArrayByString: {some_id}")
}

/// Sample routes, mounted below `/v2`
pub fn routes() -> Router {
    Router::new()
        .route("/testapi/get-string-by-int/{some_id}", get(get_string_by_int))
        .route(
            "/testapi/get-struct-array-by-string/{some_id}",
            get(get_struct_array_by_string),
        )
}
