//! Group channel API client.
//!
//! This client wraps `SendbirdClient` from `sendbird-client` and provides
//! typed methods for group channel operations.

use sendbird_client::{ClientConfig, SendbirdClient};

use crate::Result;

mod group_channels;
mod read;
mod typing;

/// Group channel API client.
///
/// Provides typed methods for:
/// - Creating, updating and listing group channels
/// - Typing indicators
/// - Marking every message of a channel as read
///
/// # Example
///
/// ```rust,ignore
/// use sendbird_channel::{ChannelClient, CreateGroupChannelRequest};
///
/// let channels = ChannelClient::new(config)?;
///
/// let channel = channels
///     .create_group_channel(&CreateGroupChannelRequest {
///         user_ids: vec!["alice".into(), "bob".into()],
///         name: Some("climbing".into()),
///         ..Default::default()
///     })
///     .await?;
///
/// channels.start_typing(&channel.channel_url, &["alice".into()]).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ChannelClient {
    client: SendbirdClient,
}

impl ChannelClient {
    /// Create a new channel client from a configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = SendbirdClient::new(config)?;
        Ok(Self { client })
    }

    /// Create a channel client from an existing SendbirdClient.
    pub fn from_client(client: SendbirdClient) -> Self {
        Self { client }
    }

    /// Get the underlying SendbirdClient.
    pub fn inner(&self) -> &SendbirdClient {
        &self.client
    }
}

/// `/group_channels/{channel_url}{suffix}`, with the channel URL escaped.
pub(crate) fn channel_path(channel_url: &str, suffix: &str) -> String {
    format!(
        "/group_channels/{}{}",
        urlencoding::encode(channel_url),
        suffix
    )
}

#[cfg(test)]
pub(crate) fn test_client(server: &wiremock::MockServer) -> ChannelClient {
    let config = ClientConfig::builder()
        .with_url(&server.uri())
        .with_api_token("test-token")
        .build()
        .unwrap();
    ChannelClient::new(config).unwrap()
}
