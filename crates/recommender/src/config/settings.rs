//! Process settings read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::config::agents::DEFAULT_AGENTS_PATH;
use crate::error::ConfigError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 7777;
pub const DEFAULT_GATEWAY_URL: &str = "mcp-gateway:8811";

/// Which recommendation generator backs `/analyze`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GeneratorKind {
    #[default]
    Static,
    Personalized,
}

impl std::str::FromStr for GeneratorKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "static" | "template" => Ok(Self::Static),
            "personalized" => Ok(Self::Personalized),
            other => Err(ConfigError::Invalid(format!(
                "unknown recommendation generator '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub host: String,
    pub port: u16,
    pub agents_path: PathBuf,
    /// Tool gateway address. Reported but never called.
    pub gateway_url: String,
    pub generator: GeneratorKind,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            agents_path: PathBuf::from(DEFAULT_AGENTS_PATH),
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            generator: GeneratorKind::default(),
        }
    }
}

impl ServiceSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|error| ConfigError::Invalid(format!("PORT '{raw}': {error}")))?,
            None => defaults.port,
        };
        let generator = match get("RECOMMENDER_GENERATOR") {
            Some(raw) => raw.parse()?,
            None => defaults.generator,
        };

        Ok(Self {
            host: get("RECOMMENDER_HOST").unwrap_or(defaults.host),
            port,
            agents_path: get("AGENTS_CONFIG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.agents_path),
            gateway_url: get("MCPGATEWAY_URL").unwrap_or(defaults.gateway_url),
            generator,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|error| ConfigError::Invalid(format!("bind address: {error}")))
    }
}
