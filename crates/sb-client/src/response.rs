//! HTTP response handling and Sendbird error classification.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::codes::{ApiErrorCode, ErrorCategory};
use crate::error::{ApiError, Error, ErrorKind, Result};

/// A fully buffered HTTP response.
///
/// The body is read to the end before a `Response` exists, so the underlying
/// connection has already been handed back to the pool.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    body: Bytes,
}

impl Response {
    pub(crate) fn new(status: u16, body: Bytes) -> Self {
        Self { status, body }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the raw response body.
    pub fn bytes(&self) -> &Bytes {
        &self.body
    }

    /// Deserialize the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(Into::into)
    }

    /// Classify a non-success response. See [`classify`].
    pub fn error(&self) -> Option<Error> {
        classify(self.status, &self.body)
    }
}

/// The error object Sendbird sends with failed requests.
///
/// Missing fields take their zero value, so a body without `"error": true`
/// is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    pub code: i64,
    pub message: String,
    pub error: bool,
}

/// Turn a failed response into an [`Error`].
///
/// Returns `None` when the body decodes but does not say `"error": true`;
/// the server does that for a handful of non-2xx answers that callers should
/// treat as success. A 503 whose code is not in the table is reported as
/// [`ApiErrorCode::ServiceUnavailable`].
pub fn classify(status: u16, body: &[u8]) -> Option<Error> {
    let parsed: ApiErrorBody = match serde_json::from_slice(body) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(
                status,
                body = %truncate_body(body),
                error = %e,
                "failed to decode error body"
            );
            return Some(Error::with_source(ErrorKind::ErrorBodyDecode { status }, e));
        }
    };

    if !parsed.error {
        warn!(
            status,
            code = parsed.code,
            message = %parsed.message,
            "response is not an error"
        );
        return None;
    }

    let sub_error = ApiErrorCode::from_code(parsed.code)
        .or((status == 503).then_some(ApiErrorCode::ServiceUnavailable));
    let category = sub_error
        .map(|sub| sub.category())
        .or_else(|| ErrorCategory::from_status(status))
        .unwrap_or(ErrorCategory::Unknown);

    Some(Error::new(ErrorKind::Api(ApiError {
        status,
        code: parsed.code,
        message: parsed.message,
        category,
        sub_error,
    })))
}

/// Lossy UTF-8 view of a body, cut to a loggable length.
fn truncate_body(body: &[u8]) -> String {
    const MAX_LENGTH: usize = 500;

    let text = String::from_utf8_lossy(body);
    if text.chars().count() <= MAX_LENGTH {
        return text.into_owned();
    }
    let mut truncated: String = text.chars().take(MAX_LENGTH).collect();
    truncated.push_str("...[truncated]");
    truncated
}
