//! Error types shared by every sendbird crate.

use std::fmt;

use crate::codes::{ApiErrorCode, ErrorCategory};

/// Result type alias for Sendbird operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Sendbird operations.
#[derive(Debug, thiserror::Error)]
#[error("{}{kind}", context_prefix(.context))]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Where the error happened, outermost first (e.g. `failed to list channels: GET /group_channels`).
    pub context: Option<String>,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

fn context_prefix(context: &Option<String>) -> String {
    context
        .as_deref()
        .map(|c| format!("{c}: "))
        .unwrap_or_default()
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
            source: None,
        }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            context: None,
            source: Some(Box::new(source)),
        }
    }

    /// Prepend a context message. The kind and source are kept as they are.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        let context = context.into();
        self.context = Some(match self.context.take() {
            Some(inner) => format!("{context}: {inner}"),
            None => context,
        });
        self
    }

    /// The classified API error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match &self.kind {
            ErrorKind::Api(api) => Some(api),
            _ => None,
        }
    }

    /// Returns true for any error reported by the Sendbird API.
    pub fn is_api_error(&self) -> bool {
        self.api_error().is_some()
    }

    /// Returns true if this is an API error of the given category.
    pub fn is_category(&self, category: ErrorCategory) -> bool {
        self.api_error().is_some_and(|api| api.category == category)
    }

    /// Returns true if this is an API error carrying `code`, or a code nested
    /// under it.
    pub fn is_api_code(&self, code: ApiErrorCode) -> bool {
        self.api_error().is_some_and(|api| api.is_code(code))
    }

    /// Returns true for failures below the API layer (network, TLS, timeouts).
    pub fn is_transport(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Request(_) | ErrorKind::Connection(_) | ErrorKind::Timeout
        )
    }

    /// Returns true if the call was cancelled by its caller.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind, ErrorKind::Cancelled)
    }

    /// Returns true if the call ran out of time.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Returns true if a response body could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Decode(_) | ErrorKind::ErrorBodyDecode { .. }
        )
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The request could not be sent or its response could not be read.
    #[error("Request error: {0}")]
    Request(String),

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request timeout.
    #[error("Request timeout")]
    Timeout,

    /// The caller cancelled the request.
    #[error("Request cancelled")]
    Cancelled,

    /// The request body could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A success body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// A failure body was not a Sendbird error object.
    #[error("failed to decode error (HTTP {status})")]
    ErrorBodyDecode { status: u16 },

    /// Error reported by the Sendbird API.
    #[error("{0}")]
    Api(ApiError),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A request failed local validation and was never sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// An error response from the Sendbird API, classified against the code table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status of the response.
    pub status: u16,
    /// Numeric Sendbird code from the body.
    pub code: i64,
    /// Message from the body.
    pub message: String,
    /// Category the error belongs to.
    pub category: ErrorCategory,
    /// The specific sub-error, when the code is in the table.
    pub sub_error: Option<ApiErrorCode>,
}

impl ApiError {
    /// Returns true if the sub-error is `code` or nested under it.
    pub fn is_code(&self, code: ApiErrorCode) -> bool {
        self.sub_error.is_some_and(|sub| sub.is_within(code))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.sub_error, self.category) {
            (Some(sub), _) => write!(f, "{sub}: {}", self.message),
            (None, ErrorCategory::Unknown) => write!(
                f,
                "unknown API error: status: {}, code: {}, message: {:?}",
                self.status, self.code, self.message
            ),
            (None, category) if self.message.is_empty() => write!(f, "{category}"),
            (None, category) => write!(f, "{category}: {}", self.message),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else if err.is_decode() {
            ErrorKind::Decode(err.to_string())
        } else {
            ErrorKind::Request(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Decode(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::Config(format!("Invalid URL: {}", err)), err)
    }
}
