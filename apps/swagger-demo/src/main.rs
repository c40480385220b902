//! Swagger demo - two sample endpoints with their Swagger UI
//!
//! The UI bundle is not checked in. Fetch it once from the workspace root:
//!
//! ```text
//! apps/swagger-demo/fetch-swagger-ui.sh swagger-ui-dist
//! cargo run -p swagger_demo
//! ```
//!
//! then open <http://localhost:8080/swagger/>. `SWAGGER_ASSETS_DIR` points
//! at a bundle unpacked elsewhere; `SWAGGER_DISABLE=1` turns the docs off.

use axum::Router;
use axum_helpers::server::{create_app, create_router};
use axum_swagger_ui::config as swagger;
use axum_swagger_ui::{OpenApiDoc, StaticAssets, SwaggerHandler};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;

use self::config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let docs = &config.docs;
    let doc_url = docs.resolved_doc_url();
    let swagger_ui = SwaggerHandler::disabling_from_env(
        &docs.disable_env,
        StaticAssets::dir(&docs.assets_dir),
        OpenApiDoc::of::<openapi::ApiDoc>(),
        &[
            &swagger::url(doc_url.as_str()),
            &swagger::prefix(docs.prefix.as_str()),
            &swagger::doc_expansion(docs.doc_expansion.as_str()),
            &swagger::deep_linking(docs.deep_linking),
            &swagger::filter(docs.filter),
        ],
    )?;

    let api_routes = Router::new().nest("/v2", api::routes());
    let router = create_router(api_routes, swagger_ui.router());

    info!(
        "Starting Swagger demo on port {}, docs at {} (disabled: {})",
        config.server.port,
        docs.prefix,
        swagger_ui.is_disabled()
    );

    create_app(router, &config.server).await?;

    info!("Swagger demo shutdown complete");
    Ok(())
}
