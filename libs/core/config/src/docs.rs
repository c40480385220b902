use crate::{env_or_default, env_parse, ConfigError, FromEnv};

/// Settings for the API documentation route.
///
/// Each field maps to one environment variable:
/// - `SWAGGER_PREFIX` (default `/swagger`)
/// - `SWAGGER_DOC_URL` (default `doc.json`)
/// - `SWAGGER_DOC_EXPANSION` (default `list`)
/// - `SWAGGER_DEEP_LINKING` (default `true`)
/// - `SWAGGER_FILTER` (default `true`)
/// - `SWAGGER_ASSETS_DIR` (default `swagger-ui-dist`, an unpacked
///   `swagger-ui-dist` npm package relative to the working directory)
/// - `SWAGGER_DISABLE_ENV` (default `SWAGGER_DISABLE`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocsConfig {
    pub prefix: String,
    pub doc_url: String,
    pub doc_expansion: String,
    pub deep_linking: bool,
    pub filter: bool,
    pub assets_dir: String,
    /// Name of the variable whose non-empty value turns the route off.
    pub disable_env: String,
}

impl DocsConfig {
    /// Document URL as the page should request it. A bare file name is
    /// resolved against the prefix so it works with and without a
    /// trailing slash on the page URL.
    pub fn resolved_doc_url(&self) -> String {
        let url = self.doc_url.as_str();
        if url.starts_with('/') || url.contains("://") {
            return url.to_string();
        }

        let prefix = self.prefix.trim_end_matches('/');
        if prefix.is_empty() || prefix == "." {
            url.to_string()
        } else {
            format!("{prefix}/{url}")
        }
    }
}

impl FromEnv for DocsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            prefix: env_or_default("SWAGGER_PREFIX", &defaults.prefix),
            doc_url: env_or_default("SWAGGER_DOC_URL", &defaults.doc_url),
            doc_expansion: env_or_default("SWAGGER_DOC_EXPANSION", &defaults.doc_expansion),
            deep_linking: env_parse("SWAGGER_DEEP_LINKING", defaults.deep_linking)?,
            filter: env_parse("SWAGGER_FILTER", defaults.filter)?,
            assets_dir: env_or_default("SWAGGER_ASSETS_DIR", &defaults.assets_dir),
            disable_env: env_or_default("SWAGGER_DISABLE_ENV", &defaults.disable_env),
        })
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            prefix: "/swagger".to_string(),
            doc_url: "doc.json".to_string(),
            doc_expansion: "list".to_string(),
            deep_linking: true,
            filter: true,
            assets_dir: "swagger-ui-dist".to_string(),
            disable_env: "SWAGGER_DISABLE".to_string(),
        }
    }
}
