//! Configuration loading and resolution.
//!
//! Every setting resolves as: explicit flag, then environment, then default.

use clap::ValueEnum;

use siege_stats::{DEFAULT_STATS_URL, DEFAULT_USER_AGENT};

use crate::types::{ServerError, ServerResult};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

pub const PORT_ENV: &str = "SIEGE_STATS_PORT";
pub const UPSTREAM_ENV: &str = "SIEGE_STATS_UPSTREAM";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Fully resolved server settings, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub upstream_url: String,
    pub user_agent: String,
}

impl ServerConfig {
    pub fn resolve(
        host: Option<&str>,
        port: Option<u16>,
        upstream: Option<&str>,
        user_agent: Option<&str>,
    ) -> ServerResult<Self> {
        Ok(Self {
            host: host.unwrap_or(DEFAULT_HOST).to_string(),
            port: resolve_port(port)?,
            upstream_url: resolve_upstream_url(upstream),
            user_agent: user_agent.unwrap_or(DEFAULT_USER_AGENT).to_string(),
        })
    }

    /// `host:port` for the listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Resolve the listening port.
pub fn resolve_port(explicit: Option<u16>) -> ServerResult<u16> {
    resolve_port_from(explicit, std::env::var(PORT_ENV).ok())
}

fn resolve_port_from(explicit: Option<u16>, env_value: Option<String>) -> ServerResult<u16> {
    if let Some(port) = explicit {
        return Ok(port);
    }

    match env_value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ServerError::Config(format!("{PORT_ENV}={raw} is not a valid port"))),
        None => Ok(DEFAULT_PORT),
    }
}

/// Resolve the upstream stats page URL.
pub fn resolve_upstream_url(explicit: Option<&str>) -> String {
    resolve_upstream_from(explicit, std::env::var(UPSTREAM_ENV).ok())
}

fn resolve_upstream_from(explicit: Option<&str>, env_value: Option<String>) -> String {
    if let Some(url) = explicit {
        return url.to_string();
    }

    env_value
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_STATS_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_precedence() {
        assert_eq!(resolve_port_from(Some(8080), Some("9000".into())).unwrap(), 8080);
        assert_eq!(resolve_port_from(None, Some(" 9000 ".into())).unwrap(), 9000);
        assert_eq!(resolve_port_from(None, None).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn test_invalid_port_env() {
        let err = resolve_port_from(None, Some("http".into())).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn test_upstream_precedence() {
        assert_eq!(
            resolve_upstream_from(Some("http://a/"), Some("http://b/".into())),
            "http://a/"
        );
        assert_eq!(resolve_upstream_from(None, Some("http://b/".into())), "http://b/");
        assert_eq!(resolve_upstream_from(None, Some("  ".into())), DEFAULT_STATS_URL);
        assert_eq!(resolve_upstream_from(None, None), DEFAULT_STATS_URL);
    }

    #[test]
    fn test_listen_addr() {
        let config = ServerConfig::resolve(Some("0.0.0.0"), Some(3100), None, None).unwrap();
        assert_eq!(config.listen_addr(), "0.0.0.0:3100");
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }
}
