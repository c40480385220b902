//! # Axum Helpers
//!
//! Server bootstrap shared by the applications in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, serving, graceful shutdown
//! - **[`errors`]**: JSON error body and fallback handlers
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let docs = Router::new(); // e.g. SwaggerHandler::router()
//!     let router = create_router(api_routes, docs);
//!
//!     let config = ServerConfig::default();
//!     create_app(router, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod server;

// Re-export server types
pub use server::{create_app, create_router, serve, shutdown_signal};

// Re-export error types
pub use errors::ErrorResponse;
