//! Request URL construction.
//!
//! Every call goes through [`build_url`], which joins the configured base URL
//! with the relative path a resource module hands to the dispatcher. Paths are
//! escaped segment by segment and query strings come out with sorted keys, so
//! the same logical request always produces the same URL.

use std::borrow::Cow;
use std::fmt;

use tracing::warn;
use url::form_urlencoded;
use url::Url;

use crate::error::{Error, ErrorKind, Result};

/// Default scheme for the Sendbird API.
pub const DEFAULT_SCHEME: &str = "https";

/// Path prefix of the Platform API v3.
pub const DEFAULT_PATH: &str = "/v3";

/// Scheme, host and path prefix shared by every request of a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    pub scheme: String,
    /// Host, with an optional `:port`.
    pub host: String,
    pub path: String,
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            host: String::new(),
            path: DEFAULT_PATH.to_string(),
        }
    }
}

impl BaseUrl {
    /// Parse an absolute URL such as `https://api-APP.sendbird.com/v3`.
    ///
    /// Query and fragment are ignored. A trailing `/` on the path is dropped.
    pub fn parse(input: &str) -> Result<Self> {
        let url = Url::parse(input)?;
        let host = match url.host_str() {
            Some(host) if !host.is_empty() => host,
            _ => {
                return Err(Error::new(ErrorKind::Config(format!(
                    "URL has no host: {input}"
                ))))
            }
        };
        let host = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        Ok(Self {
            scheme: url.scheme().to_string(),
            host,
            path: url.path().trim_end_matches('/').to_string(),
        })
    }

    /// Parse the scheme and host into a `Url` with an empty path.
    fn origin(&self) -> Result<Url> {
        if self.host.is_empty() {
            return Err(Error::new(ErrorKind::Config(
                "base URL has no host".to_string(),
            )));
        }
        let url = Url::parse(&format!("{}://{}", self.scheme, self.host))?;
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(Error::new(ErrorKind::Config(format!(
                "invalid base URL: {self}"
            ))));
        }
        Ok(url)
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.host, self.path)
    }
}

/// Join `relative` onto `base`.
///
/// `relative` may carry a query string. The path is split on `/` before any
/// escape is decoded, so an escaped `%2F` stays inside its segment. A path
/// with a broken `%` escape, a control character or non-UTF-8 escapes is used
/// verbatim as a bare path (query included) after a warning.
///
/// Fails with [`ErrorKind::InvalidRequest`] when a segment is `.` or `..`,
/// escaped or not, and with [`ErrorKind::Config`] when the base cannot form a
/// URL.
pub fn build_url(base: &BaseUrl, relative: &str) -> Result<Url> {
    let mut url = base.origin()?;

    let (path, query, decode) = match split_relative(relative) {
        Some((path, query)) => (path, query, true),
        None => {
            warn!(
                relative,
                "malformed relative path, using it as a bare path"
            );
            (relative, None, false)
        }
    };

    let mut full_path = escape_path(base.path.trim_end_matches('/'), false)?;
    if !path.is_empty() && !path.starts_with('/') {
        full_path.push('/');
    }
    full_path.push_str(&escape_path(path, decode)?);
    if full_path.is_empty() {
        full_path.push('/');
    }

    url.set_path(&full_path);

    if let Some(query) = query.map(sorted_query).filter(|q| !q.is_empty()) {
        url.set_query(Some(&query));
    }

    Ok(url)
}

/// Split off the query and drop any fragment. Returns `None` when the path
/// part is malformed. The path comes back still escaped.
fn split_relative(relative: &str) -> Option<(&str, Option<&str>)> {
    let without_fragment = relative.split('#').next().unwrap_or_default();
    let (raw_path, raw_query) = match without_fragment.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (without_fragment, None),
    };

    if raw_path.chars().any(|c| c.is_control()) || !valid_escapes(raw_path) {
        return None;
    }

    let decoded = urlencoding::decode(raw_path).ok()?;
    if decoded.chars().any(|c| c.is_control()) {
        return None;
    }
    Some((raw_path, raw_query))
}

/// Every `%` must start a two-digit hex escape.
fn valid_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let ok = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !ok {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}

/// Escape each `/`-separated segment, decoding it first when `decode` is
/// set. Only ASCII alphanumerics and `-_.~` survive unescaped.
fn escape_path(path: &str, decode: bool) -> Result<String> {
    let segments = path
        .split('/')
        .map(|raw| {
            let segment = if decode {
                urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
            } else {
                Cow::Borrowed(raw)
            };
            if segment == "." || segment == ".." {
                return Err(Error::new(ErrorKind::InvalidRequest(format!(
                    "dot segment {raw:?} not allowed in path"
                ))));
            }
            Ok(urlencoding::encode(&segment).into_owned())
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(segments.join("/"))
}

/// Re-encode a query string with its keys sorted. Repeated keys keep their
/// relative order.
fn sorted_query(raw: &str) -> String {
    let mut pairs: Vec<(Cow<'_, str>, Cow<'_, str>)> =
        form_urlencoded::parse(raw.as_bytes()).collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}
