use std::time::Duration;

use thiserror::Error;

/// Default upper bound for a whole request, body included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default upper bound for establishing the TCP/TLS connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable overriding the request timeout, in whole seconds.
///
/// A value of `0` disables the timeout.
pub const TIMEOUT_ENV_VAR: &str = "WELLKNOWNOIDC_HTTP_TIMEOUT";

/// Errors raised while assembling a [`ClientConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The timeout override is not a whole number of seconds.
    #[error("invalid value {value:?} for WELLKNOWNOIDC_HTTP_TIMEOUT, expected whole seconds")]
    InvalidTimeout {
        /// The rejected raw value.
        value: String,
    },

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Settings for the HTTP client used by both data sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            timeout: Some(DEFAULT_TIMEOUT),
            connect_timeout: Some(DEFAULT_CONNECT_TIMEOUT),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Default configuration with the timeout override from
    /// [`TIMEOUT_ENV_VAR`] applied, if set.
    pub fn from_env() -> Result<ClientConfig, ConfigError> {
        let config = ClientConfig::default();
        match std::env::var(TIMEOUT_ENV_VAR) {
            Ok(raw) => Ok(config.timeout(parse_timeout(&raw)?)),
            Err(_) => Ok(config),
        }
    }

    /// Sets the request timeout. `None` waits indefinitely.
    #[must_use]
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the connect timeout. `None` waits indefinitely.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the `User-Agent` header sent with every request.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The request timeout, if any.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// The connect timeout, if any.
    pub fn connection_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }

    /// The `User-Agent` header value.
    pub fn user_agent_value(&self) -> &str {
        &self.user_agent
    }

    pub(crate) fn build_http_client(&self) -> Result<reqwest::Client, ConfigError> {
        let mut builder = reqwest::Client::builder().user_agent(&self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        builder.build().map_err(ConfigError::HttpClient)
    }
}

/// Parses a timeout given in whole seconds, where `0` means no timeout.
pub(crate) fn parse_timeout(value: &str) -> Result<Option<Duration>, ConfigError> {
    let secs = value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidTimeout {
            value: value.to_owned(),
        })?;

    Ok((secs > 0).then(|| Duration::from_secs(secs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bound_every_request() {
        let config = ClientConfig::default();
        assert_eq!(config.request_timeout(), Some(DEFAULT_TIMEOUT));
        assert_eq!(config.connection_timeout(), Some(DEFAULT_CONNECT_TIMEOUT));
        assert!(config.user_agent_value().starts_with("wellknown-oidc/"));
    }

    #[test]
    fn parses_timeout_seconds() {
        assert_eq!(parse_timeout("45").unwrap(), Some(Duration::from_secs(45)));
        assert_eq!(parse_timeout(" 5 ").unwrap(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn zero_disables_timeout() {
        assert_eq!(parse_timeout("0").unwrap(), None);
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        let err = parse_timeout("ten").unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidTimeout { ref value } if value == "ten"),
            "Expected InvalidTimeout, got {err:?}"
        );
    }

    #[test]
    fn setters_override_defaults() {
        let config = ClientConfig::default()
            .timeout(None)
            .connect_timeout(Some(Duration::from_secs(1)))
            .user_agent("terraform-provider-wellknownoidc/dev");

        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.connection_timeout(), Some(Duration::from_secs(1)));
        assert_eq!(
            config.user_agent_value(),
            "terraform-provider-wellknownoidc/dev"
        );
        assert!(config.build_http_client().is_ok());
    }
}
