//! Client configuration

use polygrand_core::{PolygrandError, PolygrandResult};
use std::env;
use std::time::Duration;
use url::Url;

/// Backend address used when nothing is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api/v1";

/// Request timeout used when nothing is configured
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to, without trailing slash
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Config pointing at `base_url` with the default timeout
    pub fn with_base_url(base_url: &str) -> PolygrandResult<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            ..Self::default()
        })
    }

    /// Load from the environment (and `.env.local` if present)
    ///
    /// Reads `POLYGRAND_API_BASE_URL` and `POLYGRAND_HTTP_TIMEOUT_SECS`.
    pub fn from_env() -> PolygrandResult<Self> {
        dotenvy::from_filename(".env.local").ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> PolygrandResult<Self> {
        let base_url = match lookup("POLYGRAND_API_BASE_URL") {
            Some(raw) => normalize_base_url(&raw)?,
            None => DEFAULT_API_BASE_URL.to_string(),
        };

        let timeout = match lookup("POLYGRAND_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map(Duration::from_secs).map_err(|e| {
                PolygrandError::config(format!("POLYGRAND_HTTP_TIMEOUT_SECS must be seconds: {}", e))
            })?,
            None => DEFAULT_HTTP_TIMEOUT,
        };

        Ok(Self { base_url, timeout })
    }
}

fn normalize_base_url(raw: &str) -> PolygrandResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed)
        .map_err(|e| PolygrandError::config(format!("Invalid API base URL '{}': {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(PolygrandError::config(format!(
            "API base URL must be http(s), got '{}'",
            raw
        )));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "http://localhost:3000/api/v1");
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_lookup(|key| match key {
            "POLYGRAND_API_BASE_URL" => Some("https://api.polygrand.io/api/v1/".to_string()),
            "POLYGRAND_HTTP_TIMEOUT_SECS" => Some("5".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.base_url, "https://api.polygrand.io/api/v1");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_values() {
        let bad_url = ClientConfig::from_lookup(|key| {
            (key == "POLYGRAND_API_BASE_URL").then(|| "localhost:3000".to_string())
        });
        assert!(matches!(bad_url, Err(PolygrandError::Config(_))));

        let bad_timeout = ClientConfig::from_lookup(|key| {
            (key == "POLYGRAND_HTTP_TIMEOUT_SECS").then(|| "soon".to_string())
        });
        assert!(matches!(bad_timeout, Err(PolygrandError::Config(_))));
    }
}
