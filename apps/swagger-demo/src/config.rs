//! Configuration for the Swagger demo

use core_config::{FromEnv, docs::DocsConfig, server::ServerConfig};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub docs: DocsConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let docs = DocsConfig::from_env()?;

        Ok(Self {
            server,
            docs,
            environment,
        })
    }
}
