//! # sendbird-message
//!
//! Sendbird message API client.
//!
//! ## Features
//!
//! - **Send** - Post a text, file or admin message to an open or group channel
//! - **List** - Page through messages around a timestamp or message ID
//! - **Migrate** - Import a batch of messages from another chat system
//!
//! Send and migrate requests are checked client-side before anything goes on
//! the wire; see [`SendMessageRequest::validate`] and
//! [`MigrateMessagesRequest::validate`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use sendbird_message::{ChannelType, ClientConfig, ListMessagesRequest, MessageClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sendbird_message::Error> {
//!     let config = ClientConfig::builder()
//!         .with_application_id("APP_ID")
//!         .with_api_token("API_TOKEN")
//!         .build()?;
//!     let messages = MessageClient::new(config)?;
//!
//!     let page = messages
//!         .list_messages(
//!             ChannelType::GroupChannels,
//!             "climbing",
//!             &ListMessagesRequest {
//!                 message_ts: 1542467474000,
//!                 prev_limit: Some(20),
//!                 ..Default::default()
//!             },
//!         )
//!         .await?;
//!
//!     for message in &page.messages {
//!         println!("{}: {}", message.user.user_id, message.message);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
pub mod message;
pub mod types;

pub use client::MessageClient;

pub use message::{
    ListMessagesRequest, ListMessagesResponse, MigrateMessagesRequest, SendMessageRequest,
    SendMessageResponse, TextMessage,
};

pub use types::*;

// Re-export sendbird-client types that users might need
pub use sendbird_client::{
    ApiError, ApiErrorCode, ClientConfig, ClientConfigBuilder, Error, ErrorCategory, ErrorKind,
    Result, SendbirdClient,
};
