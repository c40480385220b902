//! Delegate for the UI bundle files (JS, CSS, images).
//!
//! The descriptor is immutable once built. A handler that owns a URL prefix
//! passes it to [`StaticAssets::serve`] on every call instead of rewriting
//! the descriptor, so one descriptor can back any number of handlers.

use axum::{
    body::Body,
    extract::Request,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use std::path::{Path, PathBuf};
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tracing::{debug, warn};

#[derive(Clone, Debug)]
pub struct StaticAssets {
    root: PathBuf,
    dir: ServeDir,
    prefix: String,
}

impl StaticAssets {
    /// Serve files below `root`, for example an unpacked `swagger-ui-dist`.
    ///
    /// A missing root is logged at warn level; every asset request then
    /// answers 404 and the page renders without its bundle.
    pub fn dir(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let assets = Self {
            dir: ServeDir::new(&root),
            root,
            prefix: String::new(),
        };

        if !assets.is_available() {
            warn!(
                root = %assets.root.display(),
                "Swagger UI bundle directory not found, assets will return 404"
            );
        }

        assets
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// True when the root exists and is a directory.
    pub fn is_available(&self) -> bool {
        self.root.is_dir()
    }

    /// Prefix stripped from request paths when the handler runs in relative
    /// mode and supplies no prefix of its own.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Serve `request`, stripping `prefix_override` (or the own prefix) from
    /// its path first. Paths outside the prefix are answered with 404.
    pub async fn serve(&self, prefix_override: Option<&str>, request: Request) -> Response {
        let prefix = prefix_override.unwrap_or(&self.prefix);

        let Some(relative) = strip_prefix(prefix, request.uri().path()) else {
            debug!(path = %request.uri().path(), prefix, "asset path outside of prefix");
            return StatusCode::NOT_FOUND.into_response();
        };

        let request = match rewrite_path(request, &relative) {
            Ok(request) => request,
            Err(err) => {
                debug!(error = %err, "asset path could not be rewritten");
                return StatusCode::NOT_FOUND.into_response();
            }
        };

        match self.dir.clone().oneshot(request).await {
            Ok(response) => response.map(Body::new),
            Err(never) => match never {},
        }
    }
}

fn strip_prefix(prefix: &str, path: &str) -> Option<String> {
    if prefix.is_empty() {
        return Some(path.to_string());
    }

    let prefix = prefix.trim_end_matches('/');
    match path.strip_prefix(prefix)? {
        "" => Some("/".to_string()),
        relative if relative.starts_with('/') => Some(relative.to_string()),
        _ => None,
    }
}

fn rewrite_path(request: Request, path: &str) -> Result<Request, axum::http::uri::InvalidUri> {
    let (mut parts, body) = request.into_parts();

    let path_and_query = match parts.uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    };
    parts.uri = path_and_query.parse::<Uri>()?;

    Ok(Request::from_parts(parts, body))
}
