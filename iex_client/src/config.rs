//! Client configuration.
//!
//! The transport is normally configured by the caller and handed to
//! `IexClient::new`. `ClientConfig` covers the common case of building a
//! reqwest client from a base URL, a timeout and a user agent, optionally
//! taken from the environment:
//!
//! - `IEX_BASE_URL` — API root, defaults to [`DEFAULT_BASE_URL`].
//! - `IEX_TIMEOUT_SECS` — whole-request timeout in seconds, defaults to 10.
use std::time::Duration;

use iex_common::{IexError, Result};
use log::debug;
use url::Url;

/// Root of the IEX 1.0 API.
pub const DEFAULT_BASE_URL: &str = "https://api.iextrading.com/1.0";
/// Default whole-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const ENV_BASE_URL: &str = "IEX_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "IEX_TIMEOUT_SECS";

/// Settings used to build the default reqwest transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root every route is joined onto.
    pub base_url: String,
    /// Whole-request timeout applied by the transport.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("iex_client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ClientConfig::default();

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            let base_url = base_url.trim();
            if base_url.is_empty() {
                return Err(IexError::Config(format!("{} is empty", ENV_BASE_URL)));
            }
            parse_base_url(base_url)?;
            config.base_url = base_url.to_string();
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                IexError::Config(format!(
                    "{} must be a whole number of seconds, got {:?}",
                    ENV_TIMEOUT_SECS, raw
                ))
            })?;
            if secs == 0 {
                return Err(IexError::Config(format!("{} must be positive", ENV_TIMEOUT_SECS)));
            }
            config.timeout = Duration::from_secs(secs);
        }

        debug!("Client config: base_url={} timeout={:?}", config.base_url, config.timeout);
        Ok(config)
    }

    /// Builds the blocking reqwest client described by this config.
    pub fn build_http(&self) -> Result<reqwest::blocking::Client> {
        reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone())
            .build()
            .map_err(IexError::transport)
    }
}

/// Parses an API root. Routes are appended to its path, so it may not carry a
/// query or a fragment.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url> {
    let url = Url::parse(base_url.trim())?;
    if url.cannot_be_a_base() {
        return Err(IexError::Config(format!("{:?} cannot be an API root", base_url)));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(IexError::Config(format!(
            "API root {:?} may not carry a query or fragment",
            base_url
        )));
    }
    Ok(url)
}
