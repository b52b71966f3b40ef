//! # sendbird-channel
//!
//! Sendbird group channel API client.
//!
//! ## Features
//!
//! - **Group channels** - Create, update and list group channels with every
//!   listing filter the API supports
//! - **Typing indicators** - Start and stop typing for a set of users
//! - **Read receipts** - Mark all messages in a channel as read
//!
//! ## Example
//!
//! ```rust,ignore
//! use sendbird_channel::{ChannelClient, ClientConfig, ListGroupChannelRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sendbird_channel::Error> {
//!     let config = ClientConfig::builder()
//!         .with_application_id("APP_ID")
//!         .with_api_token("API_TOKEN")
//!         .build()?;
//!     let channels = ChannelClient::new(config)?;
//!
//!     let page = channels
//!         .list_group_channels(&ListGroupChannelRequest {
//!             limit: Some(20),
//!             show_member: Some(true),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     for channel in &page.channels {
//!         println!("{} ({} members)", channel.name, channel.member_count);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
pub mod group_channel;
pub mod types;

pub use client::ChannelClient;

pub use group_channel::{
    CreateGroupChannelRequest, CreateGroupChannelResponse, ListGroupChannelRequest,
    ListGroupChannelResponse, UpdateGroupChannelRequest, UpdateGroupChannelResponse,
};

pub use types::*;

// Re-export sendbird-client types that users might need
pub use sendbird_client::{
    ApiError, ApiErrorCode, ClientConfig, ClientConfigBuilder, Error, ErrorCategory, ErrorKind,
    Result, SendbirdClient,
};
