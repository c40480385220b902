//! The request handler: path classification, content types and dispatch.
//!
//! ```text
//! GET {prefix}/...  →  strip prefix
//!                   →  content type from extension
//!                   →  "", "/", "/index.html"  → rendered index page
//!                      "/doc.json"             → DocRegistry
//!                      anything else           → StaticAssets
//! ```

use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get_service,
};
use futures::future::BoxFuture;
use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::Service;
use tracing::{debug, info};

use crate::assets::StaticAssets;
use crate::config::{Config, Configurator, build_config};
use crate::error::SwaggerError;
use crate::registry::DocRegistry;
use crate::template::IndexPage;

/// Comparison prefix used when the UI is served relative to the route.
const RELATIVE_PREFIX: &str = ".";

/// Serves the documentation UI. Cloning is cheap; all clones share one
/// immutable snapshot built at construction time.
#[derive(Clone)]
pub struct SwaggerHandler {
    mode: Mode,
}

#[derive(Clone)]
enum Mode {
    Enabled(Arc<Inner>),
    /// Mount prefix kept for `router()`; `None` mounts at the root.
    Disabled { prefix: Option<String> },
}

struct Inner {
    config: Config,
    /// `Some` when the handler owns its prefix; `None` in relative mode,
    /// where the delegate keeps its own.
    asset_prefix: Option<String>,
    assets: StaticAssets,
    registry: Arc<dyn DocRegistry>,
    page: IndexPage,
}

impl SwaggerHandler {
    /// Handler with the default configuration.
    pub fn new<R>(assets: StaticAssets, registry: R) -> Result<Self, SwaggerError>
    where
        R: DocRegistry + 'static,
    {
        Self::build(assets, registry, &[])
    }

    /// Handler configured by `configurators`, applied in order over the
    /// defaults.
    pub fn build<R>(
        assets: StaticAssets,
        registry: R,
        configurators: &[&dyn Configurator],
    ) -> Result<Self, SwaggerError>
    where
        R: DocRegistry + 'static,
    {
        let mut config = build_config(Config::default(), configurators);
        let asset_prefix = normalize_prefix(&mut config);

        let page = IndexPage::new()?;

        debug!(
            prefix = %config.prefix,
            url = %config.url,
            delegate_prefix = asset_prefix.as_deref().unwrap_or(assets.prefix()),
            "Swagger UI handler configured"
        );

        Ok(Self {
            mode: Mode::Enabled(Arc::new(Inner {
                config,
                asset_prefix,
                assets,
                registry: Arc::new(registry),
                page,
            })),
        })
    }

    /// Like [`SwaggerHandler::build`], but answers 404 for every path when
    /// `disabled` is set.
    pub fn disabling<R>(
        disabled: bool,
        assets: StaticAssets,
        registry: R,
        configurators: &[&dyn Configurator],
    ) -> Result<Self, SwaggerError>
    where
        R: DocRegistry + 'static,
    {
        if disabled {
            let mut config = build_config(Config::default(), configurators);
            return Ok(Self {
                mode: Mode::Disabled {
                    prefix: normalize_prefix(&mut config),
                },
            });
        }

        Self::build(assets, registry, configurators)
    }

    /// Reads `env_name` once, now. A non-empty value disables the handler;
    /// later changes to the variable have no effect on the result.
    pub fn disabling_from_env<R>(
        env_name: &str,
        assets: StaticAssets,
        registry: R,
        configurators: &[&dyn Configurator],
    ) -> Result<Self, SwaggerError>
    where
        R: DocRegistry + 'static,
    {
        let disabled = core_config::env_flag(env_name);
        if disabled {
            info!(env = env_name, "Swagger UI disabled by environment");
        }

        Self::disabling(disabled, assets, registry, configurators)
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self.mode, Mode::Disabled { .. })
    }

    /// Effective configuration, `None` when disabled.
    pub fn config(&self) -> Option<&Config> {
        match &self.mode {
            Mode::Enabled(inner) => Some(&inner.config),
            Mode::Disabled { .. } => None,
        }
    }

    /// Routes `GET {prefix}`, `GET {prefix}/` and `GET {prefix}/{*path}` to
    /// this handler. The prefix is normalized at construction, so `swagger`,
    /// `/swagger` and `/swagger/` mount the same routes.
    ///
    /// In relative mode the handler is mounted at the root; nest the router
    /// yourself to place it elsewhere.
    pub fn router<S>(&self) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let prefix = match &self.mode {
            Mode::Enabled(inner) => inner.asset_prefix.as_deref(),
            Mode::Disabled { prefix } => prefix.as_deref(),
        };

        let service = get_service(self.clone());
        let Some(base) = prefix else {
            return Router::new()
                .route("/", service.clone())
                .route("/{*path}", service);
        };

        // The catch-all does not match an empty tail, so "{base}/" needs its own route.
        Router::new()
            .route(base, service.clone())
            .route(&format!("{base}/"), service.clone())
            .route(&format!("{base}/{{*path}}"), service)
    }

    /// Handle one request.
    pub async fn handle(&self, request: Request) -> Response {
        match &self.mode {
            Mode::Enabled(inner) => inner.dispatch(request).await,
            Mode::Disabled { .. } => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

impl Inner {
    async fn dispatch(&self, request: Request) -> Response {
        let path = request.uri().path().to_owned();
        let relative = path.strip_prefix(self.config.prefix.as_str()).unwrap_or(&path);
        let content_type = content_type_for(relative);

        let mut response = match relative {
            "" | "/" | "/index.html" => self.index(),
            "/doc.json" => self.doc(),
            _ => {
                self.assets
                    .serve(self.asset_prefix.as_deref(), request)
                    .await
            }
        };

        if let Some(content_type) = content_type {
            if response.status().is_success() {
                response
                    .headers_mut()
                    .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
            }
        }

        response
    }

    fn index(&self) -> Response {
        match self.page.render(&self.config) {
            Ok(html) => Html(html).into_response(),
            Err(err) => err.into_response(),
        }
    }

    fn doc(&self) -> Response {
        match self.registry.read_doc() {
            Ok(doc) => doc.into_response(),
            Err(err) => SwaggerError::from(err).into_response(),
        }
    }
}

/// Brings the prefix into the one form used for routing, comparison,
/// delegation and page links: a leading "/" and no trailing "/". A relative
/// prefix (empty, "." or "/") becomes the "." sentinel.
///
/// Returns the prefix the delegate must strip, or `None` when the delegate
/// keeps its own.
fn normalize_prefix(config: &mut Config) -> Option<String> {
    let trimmed = config.prefix.trim_end_matches('/');
    if config.is_relative() || trimmed.is_empty() {
        config.prefix = RELATIVE_PREFIX.to_string();
        return None;
    }

    let prefix = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    };
    config.prefix = prefix.clone();
    Some(prefix)
}

/// Content type forced for the extension of the last path segment.
fn content_type_for(path: &str) -> Option<&'static str> {
    let segment = path.rsplit('/').next().unwrap_or(path);
    let (_, extension) = segment.rsplit_once('.')?;

    match extension {
        "html" => Some("text/html; charset=utf-8"),
        "css" => Some("text/css; charset=utf-8"),
        "js" => Some("application/javascript"),
        "json" => Some("application/json"),
        _ => None,
    }
}

impl Service<Request> for SwaggerHandler {
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let handler = self.clone();
        Box::pin(async move { Ok(handler.handle(request).await) })
    }
}
