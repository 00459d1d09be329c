//! Runtime Configuration
//!
//! Settings are read once from the process environment at startup:
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `PORT` | `3000` | HTTP listen port (bound on `0.0.0.0`) |
//! | `ELASTICSEARCH_URL` | `http://localhost:9200` | Base URL of the engine |
//! | `ELASTICSEARCH_TIMEOUT_SECS` | unset | Per-request timeout for engine calls |

use anyhow::{Context, Result};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

pub const ENV_PORT: &str = "PORT";
pub const ENV_ELASTICSEARCH_URL: &str = "ELASTICSEARCH_URL";
pub const ENV_ELASTICSEARCH_TIMEOUT: &str = "ELASTICSEARCH_TIMEOUT_SECS";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ELASTICSEARCH_URL: &str = "http://localhost:9200";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub elasticsearch_url: String,
    /// `None` means engine calls wait as long as the connection allows.
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            elasticsearch_url: DEFAULT_ELASTICSEARCH_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match get(ENV_PORT) {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid {} value: {:?}", ENV_PORT, raw))?,
            None => DEFAULT_PORT,
        };

        let elasticsearch_url = get(ENV_ELASTICSEARCH_URL)
            .map(|raw| normalize_base_url(&raw))
            .unwrap_or_else(|| DEFAULT_ELASTICSEARCH_URL.to_string());

        let request_timeout = match get(ENV_ELASTICSEARCH_TIMEOUT) {
            Some(raw) => {
                let secs = raw.parse::<u64>().with_context(|| {
                    format!("invalid {} value: {:?}", ENV_ELASTICSEARCH_TIMEOUT, raw)
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            port,
            elasticsearch_url,
            request_timeout,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port)
    }
}

/// Adds a missing `http://` scheme and strips trailing slashes.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim();

    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    normalized.trim_end_matches('/').to_string()
}
