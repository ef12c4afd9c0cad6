//! Client configuration: target environment, credentials and timeout.

use std::fmt;
use std::time::Duration;

/// Base URL of the production API.
pub const PRODUCTION_URL: &str = "https://api.longswipe.com";

/// Base URL of the sandbox API.
pub const SANDBOX_URL: &str = "https://sandbox.api.longswipe.com";

/// Timeout applied when none is configured, or when a zero timeout is given.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("longswipe-rust-sdk/", env!("CARGO_PKG_VERSION"));

/// The LongSwipe deployment a client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    /// Live merchant API.
    #[default]
    Production,
    /// Test API; no real funds move.
    Sandbox,
}

impl Environment {
    /// Returns the base URL for this environment.
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_URL,
            Environment::Sandbox => SANDBOX_URL,
        }
    }
}

/// Immutable settings owned by a [`Client`](crate::Client).
///
/// Construct one explicitly and hand it to [`Client::new`](crate::Client::new),
/// or let [`ClientBuilder`](crate::ClientBuilder) assemble it.
///
/// ```
/// use longswipe::{ClientConfig, Environment, DEFAULT_TIMEOUT};
/// use std::time::Duration;
///
/// let config = ClientConfig::new(Environment::Sandbox, "pk_test", "sk_test");
/// assert_eq!(config.base_url, "https://sandbox.api.longswipe.com");
/// assert_eq!(config.effective_timeout(), DEFAULT_TIMEOUT);
///
/// let config = config.with_timeout(Duration::from_secs(5));
/// assert_eq!(config.effective_timeout(), Duration::from_secs(5));
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL every request path is appended to, without a trailing slash.
    pub base_url: String,
    /// Public key, sent as the bearer credential.
    pub public_key: String,
    /// Private key, sent in the `X-API-Private-Key` header.
    pub private_key: String,
    /// Request timeout. `None` or zero means [`DEFAULT_TIMEOUT`].
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a configuration targeting `environment` with the given keys.
    pub fn new(
        environment: Environment,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: environment.base_url().to_string(),
            public_key: public_key.into(),
            private_key: private_key.into(),
            timeout: None,
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The timeout the HTTP client is built with.
    pub fn effective_timeout(&self) -> Duration {
        match self.timeout {
            Some(timeout) if !timeout.is_zero() => timeout,
            _ => DEFAULT_TIMEOUT,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("public_key", &"<redacted>")
            .field("private_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeout_falls_back_to_default() {
        let config =
            ClientConfig::new(Environment::Production, "pk", "sk").with_timeout(Duration::ZERO);
        assert_eq!(config.effective_timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.base_url, PRODUCTION_URL);
    }

    #[test]
    fn debug_output_hides_keys() {
        let config = ClientConfig::new(Environment::Sandbox, "pk_live_abc", "sk_live_xyz");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("pk_live_abc"));
        assert!(!rendered.contains("sk_live_xyz"));
        assert!(rendered.contains("sandbox.api.longswipe.com"));
    }

    #[test]
    fn default_environment_is_production() {
        assert_eq!(Environment::default(), Environment::Production);
        assert!(USER_AGENT.starts_with("longswipe-rust-sdk/"));
    }
}
