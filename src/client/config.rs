//! Client configuration options.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use super::rate_limit::{PacedRateLimiter, RateLimiter};
use super::ScryfallClient;
use crate::Result;

/// Root of the public Scryfall API.
pub const DEFAULT_BASE_URI: &str = "https://api.scryfall.com";

/// Default sustained request quota, in requests per second.
pub const DEFAULT_REQUESTS_PER_SECOND: f64 = 10.0;

/// Default HTTP timeout applied to the built-in transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How outbound requests are throttled.
#[derive(Clone)]
pub enum RateLimit {
    /// Pace requests at this many per second.
    PerSecond(f64),
    /// Use a caller-supplied limiter.
    Custom(Arc<dyn RateLimiter>),
    /// No throttling.
    Disabled,
}

impl fmt::Debug for RateLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateLimit::PerSecond(rate) => f.debug_tuple("PerSecond").field(rate).finish(),
            RateLimit::Custom(_) => f.write_str("Custom(..)"),
            RateLimit::Disabled => f.write_str("Disabled"),
        }
    }
}

impl RateLimit {
    pub(crate) fn into_limiter(self) -> Result<Option<Arc<dyn RateLimiter>>> {
        match self {
            RateLimit::PerSecond(rate) => {
                let limiter = PacedRateLimiter::new(rate).ok_or_else(|| {
                    crate::Error::Config(format!(
                        "rate limit must be a positive, representable number of requests per second, got {}",
                        rate
                    ))
                })?;
                Ok(Some(Arc::new(limiter)))
            }
            RateLimit::Custom(limiter) => Ok(Some(limiter)),
            RateLimit::Disabled => Ok(None),
        }
    }
}

/// Configuration for the Scryfall client.
///
/// Defaults are applied first; `with_*` methods override them. Nothing is
/// validated until [`build`](Self::build), which either returns a ready
/// client or a [`Error::Config`](crate::Error::Config).
///
/// # Example
///
/// ```
/// use scryfall_rs::ClientConfig;
/// use std::time::Duration;
///
/// let client = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0")
///     .with_requests_per_second(5.0)
///     .build()
///     .expect("valid configuration");
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URI endpoint paths are resolved against
    pub base_uri: String,
    /// User-Agent header value
    pub user_agent: String,
    /// Timeout for the built-in HTTP transport
    pub timeout: Duration,
    /// Request throttling
    pub rate_limit: RateLimit,
    /// Caller-supplied transport; replaces the built-in one
    pub http_client: Option<reqwest::Client>,
    /// Application client secret
    pub client_secret: Option<SecretString>,
    /// Grant secret issued to an end user
    pub grant_secret: Option<SecretString>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_uri: DEFAULT_BASE_URI.to_string(),
            user_agent: format!("scryfall-rs/{}", env!("CARGO_PKG_VERSION")),
            timeout: DEFAULT_TIMEOUT,
            rate_limit: RateLimit::PerSecond(DEFAULT_REQUESTS_PER_SECOND),
            http_client: None,
            client_secret: None,
            grant_secret: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URI.
    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = base_uri.into();
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout of the built-in transport.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pace requests at `requests_per_second`.
    pub fn with_requests_per_second(mut self, requests_per_second: f64) -> Self {
        self.rate_limit = RateLimit::PerSecond(requests_per_second);
        self
    }

    /// Use a custom rate limiter.
    pub fn with_rate_limiter(mut self, limiter: Arc<dyn RateLimiter>) -> Self {
        self.rate_limit = RateLimit::Custom(limiter);
        self
    }

    /// Send requests without throttling.
    pub fn disable_rate_limit(mut self) -> Self {
        self.rate_limit = RateLimit::Disabled;
        self
    }

    /// Use an existing `reqwest::Client` as transport.
    ///
    /// The configured [`timeout`](Self::with_timeout) does not apply to it.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Authenticate with an application client secret.
    pub fn with_client_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = Some(SecretString::from(secret.into()));
        self
    }

    /// Authenticate with a grant secret.
    pub fn with_grant_secret(mut self, secret: impl Into<String>) -> Self {
        self.grant_secret = Some(SecretString::from(secret.into()));
        self
    }

    /// Validate the configuration and build a client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if both secrets are
    /// set, the base URI is not an absolute URL, the rate is not positive,
    /// or the built-in transport cannot be created.
    pub fn build(self) -> Result<ScryfallClient> {
        ScryfallClient::with_config(self)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |s: &Option<SecretString>| s.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("ClientConfig")
            .field("base_uri", &self.base_uri)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("rate_limit", &self.rate_limit)
            .field("http_client", &self.http_client.is_some())
            .field("client_secret", &redact(&self.client_secret))
            .field("grant_secret", &redact(&self.grant_secret))
            .finish()
    }
}
