use std::{env, net::SocketAddr, path::PathBuf};

use anyhow::Context;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Replaces the embedded city catalog when set.
    pub catalog_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            catalog_path: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(host) = lookup("SARATHI_HOST") {
            config.host = host;
        }

        if let Some(port) = lookup("SARATHI_PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("SARATHI_PORT is not a valid port: {port}"))?;
        }

        config.catalog_path = lookup("SARATHI_CATALOG").map(PathBuf::from);

        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, anyhow::Error> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}
