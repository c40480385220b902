use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure of the API description source.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistryError {
    #[error("no API description registered: {0}")]
    Missing(String),

    #[error("failed to serialize API description: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised while building or serving the documentation UI.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SwaggerError {
    #[error("invalid index template: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("failed to render index page: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("failed to encode page value: {0}")]
    Encode(serde_json::Error),

    #[error("failed to read API description: {0}")]
    Registry(#[from] RegistryError),
}

/// Every failure ends the request with a bare 500; the cause only goes to
/// the log.
impl IntoResponse for SwaggerError {
    fn into_response(self) -> Response {
        tracing::error!("swagger: {}", self);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
