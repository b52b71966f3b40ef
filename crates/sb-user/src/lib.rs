//! # sendbird-user
//!
//! Sendbird user API client.
//!
//! ## Features
//!
//! - **Users** - Create and update users
//! - **Session tokens** - Issue a session token with an optional expiry
//! - **Counters** - Unread message count and group channel count per user
//!
//! ## Example
//!
//! ```rust,ignore
//! use sendbird_user::{ClientConfig, GetUnreadMessagesCountRequest, UserClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sendbird_user::Error> {
//!     let users = UserClient::new(ClientConfig::builder().with_application_id("APP_ID").build()?)?;
//!
//!     let unread = users
//!         .get_unread_messages_count("alice", &GetUnreadMessagesCountRequest::default())
//!         .await?;
//!     println!("alice has {} unread messages", unread.unread_count);
//!     Ok(())
//! }
//! ```

mod client;
pub mod types;
pub mod user;

pub use client::UserClient;

pub use user::{
    CreateUserRequest, CreateUserResponse, GetGroupChannelCountRequest,
    GetGroupChannelCountResponse, GetSessionTokenRequest, GetSessionTokenResponse,
    GetUnreadMessagesCountRequest, GetUnreadMessagesCountResponse, UpdateUserRequest,
    UpdateUserResponse,
};

pub use types::*;

// Re-export sendbird-client types that users might need
pub use sendbird_client::{
    ApiError, ApiErrorCode, ClientConfig, ClientConfigBuilder, Error, ErrorCategory, ErrorKind,
    Result, SendbirdClient,
};
