use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use axum::Router;
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};

/// Starts the Axum server with graceful shutdown.
///
/// # Arguments
/// * `router` - The configured Axum router
/// * `server_config` - Server configuration with host and port
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use core_config::server::ServerConfig;
/// use axum_helpers::server::create_app;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let router = Router::new();
///     let config = ServerConfig::default();
///     create_app(router, &config).await?;
///     Ok(())
/// }
/// ```
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = TcpListener::bind(server_config.address()).await?;
    serve(listener, router, shutdown_signal()).await
}

/// Serves `router` on an already bound listener until `signal` completes.
pub async fn serve<F>(listener: TcpListener, router: Router, signal: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Server starting on {}", listener.local_addr()?);

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(signal)
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    info!("Server stopped");
    Ok(())
}

/// Combines the API routes and the documentation routes with the common
/// middleware.
///
/// This function sets up:
/// - `apis` and `docs` merged at the root
/// - Request tracing at INFO level
/// - Response compression based on `Accept-Encoding`
/// - JSON 404 fallback handler
///
/// Routes are merged, so both routers must use disjoint paths.
pub fn create_router(apis: Router, docs: Router) -> Router {
    Router::new()
        .merge(apis)
        .merge(docs)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CompressionLayer::new())
}
