//! Handler configuration and the configurator mechanism.
//!
//! A [`Config`] starts from [`Config::default`] and is then mutated by a
//! sequence of [`Configurator`]s, in order. Two styles are supported and can
//! be mixed:
//!
//! ```ignore
//! use axum_swagger_ui::config::{self, Config, Configurator};
//!
//! // Single-option setters
//! let options: [&dyn Configurator; 2] = [&config::url("/swagger/doc.json"), &config::deep_linking(false)];
//!
//! // A whole value, overriding everything except the font CDN
//! let whole = Config { prefix: "/docs".into(), ..Config::default() };
//! ```

use std::fmt;

/// Tunable parameters of the documentation handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// URL pointing to the API definition, normally `doc.json`.
    pub url: String,
    /// Prefix the UI is registered on. Empty or `"."` means relative.
    pub prefix: String,
    pub deep_linking: bool,
    /// Passed to the page verbatim; `list`, `full` and `none` are understood
    /// by the viewer.
    pub doc_expansion: String,
    /// Mount element selector.
    pub dom_id: String,
    /// Base URL of the web font stylesheet, without a trailing slash.
    pub font_cdn: String,
    /// Enables tag filtering in the viewer.
    pub filter: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: "doc.json".to_string(),
            prefix: "/swagger".to_string(),
            deep_linking: true,
            doc_expansion: DocExpansion::List.to_string(),
            dom_id: "#swagger-ui".to_string(),
            font_cdn: "https://fonts.googleapis.com".to_string(),
            filter: true,
        }
    }
}

impl Config {
    /// True when the prefix asks for relative serving.
    pub fn is_relative(&self) -> bool {
        self.prefix.is_empty() || self.prefix == "."
    }
}

/// Expansion level of operations and tags in the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocExpansion {
    List,
    Full,
    None,
}

impl DocExpansion {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocExpansion::List => "list",
            DocExpansion::Full => "full",
            DocExpansion::None => "none",
        }
    }
}

impl fmt::Display for DocExpansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DocExpansion> for String {
    fn from(value: DocExpansion) -> Self {
        value.as_str().to_string()
    }
}

/// Applies a partial or full change to a configuration.
pub trait Configurator {
    fn configure(&self, config: &mut Config);
}

/// A whole value overrides every field it exposes. The font CDN is kept,
/// so it can only be changed with [`font_cdn`].
impl Configurator for Config {
    fn configure(&self, config: &mut Config) {
        config.url = self.url.clone();
        config.prefix = self.prefix.clone();
        config.deep_linking = self.deep_linking;
        config.doc_expansion = self.doc_expansion.clone();
        config.dom_id = self.dom_id.clone();
        config.filter = self.filter;
    }
}

/// Configurator backed by a closure.
pub struct ConfigFn<F>(F);

impl<F> Configurator for ConfigFn<F>
where
    F: Fn(&mut Config),
{
    fn configure(&self, config: &mut Config) {
        (self.0)(config)
    }
}

/// Wrap an arbitrary mutation as a configurator.
pub fn config_fn<F>(f: F) -> ConfigFn<F>
where
    F: Fn(&mut Config),
{
    ConfigFn(f)
}

/// Apply `configurators` in order over `defaults`. Later ones win.
pub fn build_config(defaults: Config, configurators: &[&dyn Configurator]) -> Config {
    let mut config = defaults;
    for configurator in configurators {
        configurator.configure(&mut config);
    }
    config
}

/// URL pointing to the API definition (normally `doc.json` or a full URL).
pub fn url(url: impl Into<String>) -> ConfigFn<impl Fn(&mut Config)> {
    let url = url.into();
    config_fn(move |c| c.url = url.clone())
}

/// URL prefix of the UI, normally `/swagger` or `"."`.
pub fn prefix(prefix: impl Into<String>) -> ConfigFn<impl Fn(&mut Config)> {
    let prefix = prefix.into();
    config_fn(move |c| c.prefix = prefix.clone())
}

/// Web font CDN. A trailing slash is dropped.
pub fn font_cdn(cdn: impl Into<String>) -> ConfigFn<impl Fn(&mut Config)> {
    let mut cdn = cdn.into();
    if cdn.ends_with('/') {
        cdn.pop();
    }
    config_fn(move |c| c.font_cdn = cdn.clone())
}

/// Expansion level; accepts a [`DocExpansion`] or any string.
pub fn doc_expansion(expansion: impl Into<String>) -> ConfigFn<impl Fn(&mut Config)> {
    let expansion = expansion.into();
    config_fn(move |c| c.doc_expansion = expansion.clone())
}

/// Mount element selector, `#swagger-ui` by default.
pub fn dom_id(dom_id: impl Into<String>) -> ConfigFn<impl Fn(&mut Config)> {
    let dom_id = dom_id.into();
    config_fn(move |c| c.dom_id = dom_id.clone())
}

pub fn deep_linking(enabled: bool) -> ConfigFn<impl Fn(&mut Config)> {
    config_fn(move |c| c.deep_linking = enabled)
}

pub fn filter(enabled: bool) -> ConfigFn<impl Fn(&mut Config)> {
    config_fn(move |c| c.filter = enabled)
}
