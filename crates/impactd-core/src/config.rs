//! Gateway configuration.
//!
//! An explicit configuration struct constructed once at process start
//! from the environment and passed by injection to handlers; no ad-hoc
//! environment lookups anywhere else. The NASA API key falls back to the
//! public demo key when unset so the gateway runs out of the box,
//! rate-limited.

use std::time::Duration;

use thiserror::Error;

/// Public demo key accepted by api.nasa.gov with tight rate limits.
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";

/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 5001;

/// Bound on every outbound upstream call.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable was set to a value that does not parse.
    ///
    /// Deliberately a startup error rather than a silent fallback: a
    /// typoed `PORT` should stop the process, not bind somewhere else.
    #[error("invalid value for {var}: {value:?}")]
    Invalid {
        /// The offending variable name.
        var: &'static str,
        /// The raw value found.
        value: String,
    },
}

/// Process-wide gateway configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// API key injected into keyed upstream requests.
    pub nasa_api_key: String,
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Timeout applied to each outbound upstream call.
    pub upstream_timeout: Duration,
}

impl GatewayConfig {
    /// Read configuration from the process environment.
    ///
    /// Recognized variables: `NASA_API_KEY`, `HOST`, `PORT`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `PORT` is set but not a valid
    /// port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an injectable variable lookup.
    ///
    /// `from_env` delegates here; tests pass a closure over a map
    /// instead of mutating the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `PORT` does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            nasa_api_key: lookup("NASA_API_KEY").unwrap_or_else(|| DEFAULT_API_KEY.to_string()),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            upstream_timeout: UPSTREAM_TIMEOUT,
        })
    }

    /// The address string the daemon binds, `host:port`.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
