//! Request dispatcher for the Sendbird Platform API.
//!
//! ## Security
//!
//! - The `Api-Token` header is redacted in Debug output
//! - Request bodies are never logged

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::instrument::WithSubscriber;
use tracing::{debug, debug_span, Instrument};

use crate::config::{ClientConfig, ClientConfigBuilder};
use crate::endpoint::build_url;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestMethod;
use crate::response::Response;

/// Body argument for calls that send nothing.
pub const NO_BODY: Option<&'static ()> = None;

/// Client for the Sendbird Platform API.
///
/// Cloning is cheap: clones share the connection pool and the frozen
/// [`ClientConfig`]. Every call produces exactly one outcome: a decoded
/// value, a classified API error, or a local failure (transport, encoding,
/// cancellation).
///
/// Cancellation and deadlines belong to a handle, not to a call. To scope
/// them to one call, derive a clone with [`SendbirdClient::with_cancellation`]
/// or [`SendbirdClient::with_timeout`] and issue the call through it.
///
/// # Example
///
/// ```rust,ignore
/// use sendbird_client::{ClientConfig, SendbirdClient, NO_BODY};
///
/// let config = ClientConfig::builder()
///     .with_application_id("APP_ID")
///     .with_api_token("TOKEN")
///     .build()?;
/// let client = SendbirdClient::new(config)?;
///
/// let channels: Option<serde_json::Value> = client.get("/group_channels", NO_BODY).await?;
/// ```
#[derive(Clone)]
pub struct SendbirdClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
    cancellation: Option<CancellationToken>,
    deadline: Option<Duration>,
}

impl fmt::Debug for SendbirdClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SendbirdClient")
            .field("config", &self.config)
            .field("cancellable", &self.cancellation.is_some())
            .field("deadline", &self.deadline)
            .finish_non_exhaustive()
    }
}

impl SendbirdClient {
    /// Create a client from a built configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = match config.http_client() {
            Some(http) => http.clone(),
            None => reqwest::Client::builder()
                .timeout(config.timeout())
                .connect_timeout(config.connect_timeout())
                .pool_idle_timeout(config.pool_idle_timeout())
                .pool_max_idle_per_host(config.pool_max_idle_per_host())
                .user_agent(config.user_agent())
                .gzip(true)
                .deflate(true)
                .build()
                .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?,
        };

        Ok(Self {
            http,
            config: Arc::new(config),
            cancellation: None,
            deadline: None,
        })
    }

    /// Create a client configured from `SENDBIRD_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfigBuilder::from_env().build()?)
    }

    /// A handle whose calls abort with [`ErrorKind::Cancelled`] once `token`
    /// is cancelled.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            cancellation: Some(token),
            ..self.clone()
        }
    }

    /// A handle whose calls fail with [`ErrorKind::Timeout`] after `deadline`.
    pub fn with_timeout(&self, deadline: Duration) -> Self {
        Self {
            deadline: Some(deadline),
            ..self.clone()
        }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full URL a relative path resolves to.
    pub fn url(&self, path: &str) -> Result<url::Url> {
        build_url(self.config.base_url(), path)
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Send one request and decode a success body into `T`.
    ///
    /// Returns `Ok(None)` for a failed status whose body says `"error": false`.
    pub async fn dispatch<B, T>(
        &self,
        method: RequestMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<T>>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.scoped(method, path, async {
            let response = self.round_trip(method, path, body).await?;
            if response.is_success() {
                return response.json().map(Some);
            }
            match response.error() {
                Some(err) => Err(err),
                None => Ok(None),
            }
        })
        .await
    }

    /// Send one request and discard any success body.
    pub async fn dispatch_unit<B>(
        &self,
        method: RequestMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.scoped(method, path, async {
            let response = self.round_trip(method, path, body).await?;
            if response.is_success() {
                return Ok(());
            }
            match response.error() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        })
        .await
    }

    /// Run `call` inside the configured logger and a per-call span, apply
    /// the deadline and cancellation token, and tag errors with the call.
    async fn scoped<T>(
        &self,
        method: RequestMethod,
        path: &str,
        call: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        let dispatch = match self.config.dispatch() {
            Some(dispatch) => dispatch.clone(),
            None => tracing::dispatcher::get_default(|current| current.clone()),
        };

        let bounded = async {
            match self.deadline {
                Some(deadline) => tokio::time::timeout(deadline, call)
                    .await
                    .unwrap_or_else(|_| Err(Error::new(ErrorKind::Timeout))),
                None => call.await,
            }
        };
        let guarded = async {
            match &self.cancellation {
                Some(token) => {
                    tokio::select! {
                        biased;
                        _ = token.cancelled() => {
                            debug!("Request cancelled");
                            Err(Error::new(ErrorKind::Cancelled))
                        }
                        result = bounded => result,
                    }
                }
                None => bounded.await,
            }
        };
        // The span has to be created inside the configured dispatch.
        let traced = async {
            let span = debug_span!("sendbird_request", method = %method, path);
            guarded.instrument(span).await
        };

        traced
            .with_subscriber(dispatch)
            .await
            .map_err(|e| e.context(format!("{method} {path}")))
    }

    /// Encode, send, and fully buffer one request.
    async fn round_trip<B>(
        &self,
        method: RequestMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response>
    where
        B: Serialize + ?Sized + Sync,
    {
        let payload = body
            .map(|b| serde_json::to_vec(b))
            .transpose()
            .map_err(|e| Error::with_source(ErrorKind::Serialization(e.to_string()), e))?;

        let url = self.url(path)?;
        let mut request = self
            .http
            .request(method.to_reqwest(), url.clone())
            .headers(self.config.headers().clone());
        if let Some(payload) = payload {
            request = request.body(payload);
        }

        debug!(url = %url, "Sending request");
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        if (200..300).contains(&status) {
            debug!(status, content_length = body.len(), "Response received");
        } else {
            debug!(status, content_length = body.len(), "Non-success response");
        }

        Ok(Response::new(status, body))
    }

    // =========================================================================
    // Verb helpers
    // =========================================================================

    /// GET with JSON response deserialization.
    pub async fn get<B, T>(&self, path: &str, body: Option<&B>) -> Result<Option<T>>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.dispatch(RequestMethod::Get, path, body).await
    }

    /// POST with JSON body and response.
    pub async fn post<B, T>(&self, path: &str, body: Option<&B>) -> Result<Option<T>>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.dispatch(RequestMethod::Post, path, body).await
    }

    /// PUT with JSON body and response.
    pub async fn put<B, T>(&self, path: &str, body: Option<&B>) -> Result<Option<T>>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.dispatch(RequestMethod::Put, path, body).await
    }

    /// DELETE with JSON response deserialization.
    pub async fn delete<B, T>(&self, path: &str, body: Option<&B>) -> Result<Option<T>>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.dispatch(RequestMethod::Delete, path, body).await
    }

    /// GET, ignoring the response body.
    pub async fn get_unit<B>(&self, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.dispatch_unit(RequestMethod::Get, path, body).await
    }

    /// POST, ignoring the response body.
    pub async fn post_unit<B>(&self, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.dispatch_unit(RequestMethod::Post, path, body).await
    }

    /// PUT, ignoring the response body.
    pub async fn put_unit<B>(&self, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.dispatch_unit(RequestMethod::Put, path, body).await
    }

    /// DELETE, ignoring the response body.
    pub async fn delete_unit<B>(&self, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.dispatch_unit(RequestMethod::Delete, path, body).await
    }
}
