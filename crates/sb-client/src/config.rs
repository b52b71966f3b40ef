//! Client configuration.

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};

use crate::endpoint::BaseUrl;
use crate::error::{Error, ErrorKind, Result};

/// Header carrying the API token.
pub const API_TOKEN_HEADER: &str = "Api-Token";

/// Content type sent with every request.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Environment variable holding the application id.
pub const ENV_APPLICATION_ID: &str = "SENDBIRD_APPLICATION_ID";
/// Environment variable holding the API token.
pub const ENV_API_TOKEN: &str = "SENDBIRD_API_TOKEN";
/// Environment variable holding a full base URL. Wins over the application id.
pub const ENV_URL: &str = "SENDBIRD_URL";

/// Configuration for a [`SendbirdClient`](crate::SendbirdClient).
///
/// Built once with [`ClientConfig::builder`] and then frozen: the client owns
/// it behind an `Arc` and only hands out shared references.
#[derive(Clone)]
pub struct ClientConfig {
    base_url: BaseUrl,
    http: Option<reqwest::Client>,
    headers: HeaderMap,
    dispatch: Option<tracing::Dispatch>,
    timeout: Duration,
    connect_timeout: Duration,
    pool_idle_timeout: Duration,
    pool_max_idle_per_host: usize,
    user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        Self {
            base_url: BaseUrl::default(),
            http: None,
            headers,
            dispatch: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 10,
            user_agent: crate::USER_AGENT.to_string(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| {
                let secret = value.is_sensitive()
                    || name.as_str().eq_ignore_ascii_case(API_TOKEN_HEADER);
                let shown = if secret {
                    "[REDACTED]"
                } else {
                    value.to_str().unwrap_or("[binary]")
                };
                (name.as_str(), shown)
            })
            .collect();

        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.to_string())
            .field("headers", &headers)
            .field("custom_http_client", &self.http.is_some())
            .field("custom_dispatch", &self.dispatch.is_some())
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("pool_idle_timeout", &self.pool_idle_timeout)
            .field("pool_max_idle_per_host", &self.pool_max_idle_per_host)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Scheme, host and path prefix of every request.
    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Headers attached to every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Caller-supplied HTTP client, if any.
    pub fn http_client(&self) -> Option<&reqwest::Client> {
        self.http.as_ref()
    }

    /// Logger for the client. `None` means the global subscriber.
    pub fn dispatch(&self) -> Option<&tracing::Dispatch> {
        self.dispatch.as_ref()
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Connection timeout.
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Pool idle timeout.
    pub fn pool_idle_timeout(&self) -> Duration {
        self.pool_idle_timeout
    }

    /// Maximum idle connections per host.
    pub fn pool_max_idle_per_host(&self) -> usize {
        self.pool_max_idle_per_host
    }

    /// User-Agent header value.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Builder for ClientConfig.
///
/// Setters apply in call order; a later setter overrides an earlier one on
/// the same field. Invalid input is remembered and reported by [`build`],
/// first error wins.
///
/// [`build`]: ClientConfigBuilder::build
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
    error: Option<Error>,
}

impl ClientConfigBuilder {
    /// Seed a builder from `SENDBIRD_APPLICATION_ID`, `SENDBIRD_API_TOKEN`
    /// and `SENDBIRD_URL`. Unset or empty variables are ignored.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        let mut builder = Self::default();
        if let Some(app_id) = var(ENV_APPLICATION_ID) {
            builder = builder.with_application_id(app_id);
        }
        if let Some(url) = var(ENV_URL) {
            builder = builder.with_url(&url);
        }
        if let Some(token) = var(ENV_API_TOKEN) {
            builder = builder.with_api_token(token);
        }
        builder
    }

    fn fail(mut self, err: Error) -> Self {
        if self.error.is_none() {
            self.error = Some(err);
        }
        self
    }

    /// Set the URL scheme (default `https`).
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.config.base_url.scheme = scheme.into();
        self
    }

    /// Set the host, with an optional `:port`.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.config.base_url.host = host.into();
        self
    }

    /// Set the path prefix (default `/v3`).
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.config.base_url.path = path.into();
        self
    }

    /// Replace scheme, host and path with those of an absolute URL.
    pub fn with_url(mut self, url: &str) -> Self {
        match BaseUrl::parse(url) {
            Ok(base) => {
                self.config.base_url = base;
                self
            }
            Err(err) => self.fail(err.context(format!("invalid base URL {url:?}"))),
        }
    }

    /// Point at the regional host of an application: `api-{app_id}.sendbird.com`.
    pub fn with_application_id(self, app_id: impl AsRef<str>) -> Self {
        let host = format!("api-{}.sendbird.com", app_id.as_ref());
        self.with_host(host)
    }

    /// Authenticate every request with `token` in the `Api-Token` header.
    pub fn with_api_token(mut self, token: impl AsRef<str>) -> Self {
        match HeaderValue::from_str(token.as_ref()) {
            Ok(mut value) => {
                value.set_sensitive(true);
                self.config
                    .headers
                    .insert(HeaderName::from_static("api-token"), value);
                self
            }
            Err(e) => self.fail(Error::with_source(
                ErrorKind::Config("API token is not a valid header value".to_string()),
                e,
            )),
        }
    }

    /// Set a header sent with every request, replacing any previous value.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        let name = match HeaderName::from_bytes(name.as_bytes()) {
            Ok(name) => name,
            Err(e) => {
                return self.fail(Error::with_source(
                    ErrorKind::Config(format!("invalid header name {name:?}")),
                    e,
                ))
            }
        };
        match HeaderValue::from_str(value) {
            Ok(value) => {
                self.config.headers.insert(name, value);
                self
            }
            Err(e) => self.fail(Error::with_source(
                ErrorKind::Config(format!("invalid value for header {name}")),
                e,
            )),
        }
    }

    /// Send requests through `client` instead of one built from the tuning
    /// fields below.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.config.http = Some(client);
        self
    }

    /// Emit every log event of the client into `dispatch`.
    pub fn with_dispatch(mut self, dispatch: tracing::Dispatch) -> Self {
        self.config.dispatch = Some(dispatch);
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set pool idle timeout.
    pub fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.pool_idle_timeout = timeout;
        self
    }

    /// Set maximum idle connections per host.
    pub fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.config.pool_max_idle_per_host = max;
        self
    }

    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Build the client configuration.
    ///
    /// Fails with the first invalid setter input, or when the base URL has
    /// no usable host.
    pub fn build(self) -> Result<ClientConfig> {
        if let Some(err) = self.error {
            return Err(err);
        }
        crate::endpoint::build_url(&self.config.base_url, "")
            .map_err(|e| e.context("invalid base URL"))?;
        Ok(self.config)
    }
}
