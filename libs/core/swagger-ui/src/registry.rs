//! Sources of the API description served at `{prefix}/doc.json`.
//!
//! Lookups are synchronous and local: a fixed string, a utoipa document
//! serialized on demand, or a closure.

use std::fmt;
use std::sync::Arc;
use utoipa::openapi::OpenApi;

use crate::error::RegistryError;

/// Produces the API description document on demand.
pub trait DocRegistry: Send + Sync {
    fn read_doc(&self) -> Result<String, RegistryError>;
}

impl<T: DocRegistry + ?Sized> DocRegistry for Arc<T> {
    fn read_doc(&self) -> Result<String, RegistryError> {
        (**self).read_doc()
    }
}

/// A document fixed at startup.
#[derive(Clone, Debug)]
pub struct StaticDoc(String);

impl StaticDoc {
    pub fn new(doc: impl Into<String>) -> Self {
        Self(doc.into())
    }
}

impl DocRegistry for StaticDoc {
    fn read_doc(&self) -> Result<String, RegistryError> {
        Ok(self.0.clone())
    }
}

/// A utoipa document, serialized as pretty JSON on every read.
#[derive(Clone)]
pub struct OpenApiDoc(OpenApi);

impl fmt::Debug for OpenApiDoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenApiDoc")
            .field("title", &self.0.info.title)
            .field("version", &self.0.info.version)
            .finish()
    }
}

impl OpenApiDoc {
    pub fn new(api: OpenApi) -> Self {
        Self(api)
    }

    /// Build from a `#[derive(utoipa::OpenApi)]` type.
    pub fn of<T: utoipa::OpenApi>() -> Self {
        Self(T::openapi())
    }
}

impl DocRegistry for OpenApiDoc {
    fn read_doc(&self) -> Result<String, RegistryError> {
        Ok(self.0.to_pretty_json()?)
    }
}

/// Registry backed by a closure.
pub struct DocFn<F>(F);

impl<F> DocFn<F>
where
    F: Fn() -> Result<String, RegistryError> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> DocRegistry for DocFn<F>
where
    F: Fn() -> Result<String, RegistryError> + Send + Sync,
{
    fn read_doc(&self) -> Result<String, RegistryError> {
        (self.0)()
    }
}
