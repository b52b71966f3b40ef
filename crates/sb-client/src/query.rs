//! Query string encoding for list-style requests.
//!
//! Request structs derive `Serialize` with `skip_serializing_if` on their
//! optional fields; [`with_query`] turns them into `path?key=value` form.
//! List fields go on the wire as comma-separated values, see [`csv`].

use std::fmt::Display;

use serde::{Serialize, Serializer};

use crate::error::{Error, ErrorKind, Result};

/// Encode `params` as `application/x-www-form-urlencoded`.
pub fn to_query<T: Serialize + ?Sized>(params: &T) -> Result<String> {
    serde_urlencoded::to_string(params).map_err(|e| {
        Error::with_source(ErrorKind::Serialization(e.to_string()), e)
    })
}

/// Append the encoded `params` to `path`. No `?` is added when every field
/// was skipped.
pub fn with_query<T: Serialize + ?Sized>(path: &str, params: &T) -> Result<String> {
    let query = to_query(params)?;
    if query.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{path}?{query}"))
    }
}

/// `serialize_with` helper writing an optional list as `a,b,c`.
///
/// ```rust,ignore
/// #[serde(skip_serializing_if = "Option::is_none", serialize_with = "sendbird_client::query::csv")]
/// pub members_include_in: Option<Vec<String>>,
/// ```
pub fn csv<S, T>(values: &Option<Vec<T>>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Display,
{
    match values {
        Some(values) => serializer.serialize_str(&join(values)),
        None => serializer.serialize_none(),
    }
}

fn join<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
