//! # sendbird-client
//!
//! Core HTTP client infrastructure for the Sendbird Chat Platform API (v3).
//!
//! This crate provides:
//! - Configuration with chained setters and fail-fast validation
//! - Deterministic URL building (strict path escaping, sorted query keys)
//! - A request dispatcher with typed JSON bodies, cancellation and deadlines
//! - Classification of Sendbird error bodies into a typed taxonomy
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Resource crates                          │
//! │  (sendbird-channel, sendbird-message, sendbird-user)        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   SendbirdClient                            │
//! │  - Frozen ClientConfig (base URL, headers, logger)          │
//! │  - dispatch / get / post / put / delete                     │
//! │  - Cancellation and per-handle deadlines                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │            build_url            classify                    │
//! │  - base + relative path       - {code, message, error}      │
//! │  - sorted query               - ApiErrorCode / Category     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use sendbird_client::{ClientConfig, SendbirdClient, NO_BODY};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sendbird_client::Error> {
//!     let config = ClientConfig::builder()
//!         .with_application_id("APP_ID")
//!         .with_api_token("API_TOKEN")
//!         .build()?;
//!     let client = SendbirdClient::new(config)?;
//!
//!     let user: Option<serde_json::Value> = client.get("/users/alice", NO_BODY).await?;
//!     Ok(())
//! }
//! ```

mod client;
mod codes;
mod config;
pub mod endpoint;
mod error;
pub mod query;
mod request;
mod response;

pub use client::{SendbirdClient, NO_BODY};
pub use codes::{ApiErrorCode, ErrorCategory};
pub use config::{
    ClientConfig, ClientConfigBuilder, API_TOKEN_HEADER, ENV_API_TOKEN, ENV_APPLICATION_ID,
    ENV_URL, JSON_CONTENT_TYPE,
};
pub use endpoint::{build_url, BaseUrl};
pub use error::{ApiError, Error, ErrorKind, Result};
pub use request::RequestMethod;
pub use response::{classify, ApiErrorBody, Response};

pub use tokio_util::sync::CancellationToken;

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("sendbird-rs/", env!("CARGO_PKG_VERSION"));
