//! # Axum Swagger UI
//!
//! Serves the Swagger UI bundle and an API description document through an
//! axum router.
//!
//! ## Modules
//!
//! - **[`config`]**: `Config`, the `Configurator` trait and option setters
//! - **[`handler`]**: `SwaggerHandler`, dispatch and the disabling wrapper
//! - **[`assets`]**: `StaticAssets`, the bundle file delegate
//! - **[`registry`]**: `DocRegistry` sources for `doc.json`
//! - **[`template`]**: the index page
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_swagger_ui::{config, OpenApiDoc, StaticAssets, SwaggerHandler};
//!
//! let swagger = SwaggerHandler::build(
//!     StaticAssets::dir("swagger-ui-dist"),
//!     OpenApiDoc::of::<ApiDoc>(),
//!     &[
//!         &config::url("http://localhost:8080/swagger/doc.json"),
//!         &config::deep_linking(true),
//!         &config::prefix("/swagger"),
//!     ],
//! )?;
//!
//! // GET /swagger and GET /swagger/{*path}
//! let app: Router = Router::new().merge(swagger.router());
//! ```
//!
//! Set `SWAGGER_DISABLE=true` and build with
//! [`SwaggerHandler::disabling_from_env`] to turn every docs route into a
//! 404 without touching the code.

pub mod assets;
pub mod config;
pub mod error;
pub mod handler;
pub mod registry;
pub mod template;

pub use assets::StaticAssets;
pub use config::{Config, ConfigFn, Configurator, DocExpansion, build_config, config_fn};
pub use error::{RegistryError, SwaggerError};
pub use handler::SwaggerHandler;
pub use registry::{DocFn, DocRegistry, OpenApiDoc, StaticDoc};
