//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with tracing, compression and a JSON 404 fallback
//! - Serving with graceful shutdown on SIGINT/SIGTERM
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//!
//! let router = create_router(api_routes, swagger.router());
//! create_app(router, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod shutdown;

pub use app::{create_app, create_router, serve};
pub use shutdown::shutdown_signal;
