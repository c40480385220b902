//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api;

/// OpenAPI document served at `{prefix}/doc.json`
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Swagger Example API",
        version = "1.0",
        description = "This is a sample server Petstore server.",
        terms_of_service = "http://swagger.io/terms/",
        contact(
            name = "API Support",
            url = "http://www.swagger.io/support",
            email = "support@swagger.io"
        ),
        license(
            name = "Apache 2.0",
            url = "http://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/v2", description = "Local development server")
    ),
    paths(api::get_string_by_int, api::get_struct_array_by_string),
    components(schemas(api::Pet, axum_helpers::ErrorResponse)),
    tags(
        (name = "testapi", description = "Sample endpoints")
    )
)]
pub struct ApiDoc;
