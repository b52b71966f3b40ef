//! Message API client.

use sendbird_client::{ClientConfig, SendbirdClient};

use crate::types::ChannelType;
use crate::Result;

mod list;
mod migrate;
mod send;

/// Message API client.
///
/// Provides typed methods for:
/// - Sending a message to an open or group channel
/// - Listing messages around a timestamp or message ID
/// - Importing messages from another system
///
/// # Example
///
/// ```rust,ignore
/// use sendbird_message::{ChannelType, MessageClient, MessageType, SendMessageRequest};
///
/// let messages = MessageClient::new(config)?;
///
/// let sent = messages
///     .send_message(
///         ChannelType::GroupChannels,
///         "climbing",
///         &SendMessageRequest {
///             message_type: Some(MessageType::Text),
///             user_id: "alice".into(),
///             message: "see you at 9".into(),
///             ..Default::default()
///         },
///     )
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct MessageClient {
    client: SendbirdClient,
}

impl MessageClient {
    /// Create a new message client from a configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = SendbirdClient::new(config)?;
        Ok(Self { client })
    }

    /// Create a message client from an existing SendbirdClient.
    pub fn from_client(client: SendbirdClient) -> Self {
        Self { client }
    }

    /// Get the underlying SendbirdClient.
    pub fn inner(&self) -> &SendbirdClient {
        &self.client
    }
}

/// `/{channel_type}/{channel_url}/messages`
pub(crate) fn messages_path(channel_type: ChannelType, channel_url: &str) -> String {
    format!(
        "/{}/{}/messages",
        channel_type,
        urlencoding::encode(channel_url)
    )
}

#[cfg(test)]
pub(crate) fn test_client(server: &wiremock::MockServer) -> MessageClient {
    let config = ClientConfig::builder()
        .with_url(&server.uri())
        .with_api_token("test-token")
        .build()
        .unwrap();
    MessageClient::new(config).unwrap()
}
