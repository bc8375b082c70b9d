//! Presentation app settings read from the environment.

use std::net::SocketAddr;
use std::time::Duration;

use recommender::DEFAULT_AGENT;

use crate::error::ProxyError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3003;
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:7777";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct WebSettings {
    pub host: String,
    pub port: u16,
    /// Base URL of the recommendation service.
    pub service_url: String,
    /// Agent sent with every forwarded request.
    pub agent: String,
    pub upstream_timeout: Duration,
}

impl Default for WebSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            service_url: DEFAULT_SERVICE_URL.to_string(),
            agent: DEFAULT_AGENT.to_string(),
            upstream_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl WebSettings {
    pub fn from_env() -> Result<Self, ProxyError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ProxyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|error| ProxyError::Config(format!("PORT '{raw}': {error}")))?,
            None => defaults.port,
        };
        let upstream_timeout = match get("UPSTREAM_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|error| {
                    ProxyError::Config(format!("UPSTREAM_TIMEOUT_SECONDS '{raw}': {error}"))
                })?,
            None => defaults.upstream_timeout,
        };

        Ok(Self {
            host: get("WEB_HOST").unwrap_or(defaults.host),
            port,
            service_url: get("AGENTS_SERVICE_URL").unwrap_or(defaults.service_url),
            agent: get("RECOMMENDER_AGENT").unwrap_or(defaults.agent),
            upstream_timeout,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ProxyError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|error| ProxyError::Config(format!("bind address: {error}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = WebSettings::from_lookup(|_| None).expect("settings");
        assert_eq!(settings.port, 3003);
        assert_eq!(settings.service_url, "http://localhost:7777");
        assert_eq!(settings.agent, "hackathon_recommender");
        assert_eq!(settings.upstream_timeout, Duration::from_secs(60));
    }

    #[test]
    fn overrides() {
        let settings = WebSettings::from_lookup(|key| match key {
            "PORT" => Some("4000".to_string()),
            "AGENTS_SERVICE_URL" => Some("http://agents:7777".to_string()),
            "UPSTREAM_TIMEOUT_SECONDS" => Some("5".to_string()),
            _ => None,
        })
        .expect("settings");
        assert_eq!(settings.bind_addr().expect("addr").port(), 4000);
        assert_eq!(settings.service_url, "http://agents:7777");
        assert_eq!(settings.upstream_timeout, Duration::from_secs(5));
    }

    #[test]
    fn rejects_bad_timeout() {
        let result = WebSettings::from_lookup(|key| {
            (key == "UPSTREAM_TIMEOUT_SECONDS").then(|| "soon".to_string())
        });
        assert!(matches!(result, Err(ProxyError::Config(_))));
    }
}
