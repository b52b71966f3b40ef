//! # sendbird-sdk
//!
//! Client library for the Sendbird Chat Platform API (v3).
//!
//! ## Security
//!
//! - The `Api-Token` header and session tokens are redacted in Debug output
//! - Tracing spans skip request bodies
//!
//! ## Crates
//!
//! - **sendbird-client** - Configuration, URL building, request dispatch and
//!   error classification
//! - **sendbird-channel** - Group channels, typing indicators, read receipts
//! - **sendbird-message** - Send, list and migrate messages
//! - **sendbird-user** - Users, session tokens, per-user counters
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sendbird_sdk::channel::{ChannelClient, CreateGroupChannelRequest};
//! use sendbird_sdk::{ClientConfigBuilder, SendbirdClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sendbird_sdk::Error> {
//!     // SENDBIRD_APPLICATION_ID and SENDBIRD_API_TOKEN
//!     let client = SendbirdClient::new(ClientConfigBuilder::from_env().build()?)?;
//!
//!     // Resource clients share one connection pool
//!     let channels = ChannelClient::from_client(client.clone());
//!
//!     let channel = channels
//!         .create_group_channel(&CreateGroupChannelRequest {
//!             user_ids: vec!["alice".into(), "bob".into()],
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("created {}", channel.channel_url);
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "channel")]
pub use sendbird_channel as channel;
#[cfg(feature = "client")]
pub use sendbird_client as client;
#[cfg(feature = "message")]
pub use sendbird_message as message;
#[cfg(feature = "user")]
pub use sendbird_user as user;

// Re-export commonly used types at the top level
#[cfg(feature = "channel")]
pub use sendbird_channel::ChannelClient;
#[cfg(feature = "client")]
pub use sendbird_client::{
    ApiError, ApiErrorCode, CancellationToken, ClientConfig, ClientConfigBuilder, Error,
    ErrorCategory, ErrorKind, Result, SendbirdClient,
};
#[cfg(feature = "message")]
pub use sendbird_message::MessageClient;
#[cfg(feature = "user")]
pub use sendbird_user::UserClient;
