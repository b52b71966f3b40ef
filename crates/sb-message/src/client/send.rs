use tracing::instrument;

use crate::message::{SendMessageRequest, SendMessageResponse};
use crate::types::ChannelType;
use crate::Result;

use super::messages_path;

impl super::MessageClient {
    /// Send a message to a channel.
    ///
    /// The request is validated first; a missing message type, sender or
    /// text fails with [`crate::ErrorKind::InvalidRequest`] and nothing is sent.
    #[instrument(skip(self, request))]
    pub async fn send_message(
        &self,
        channel_type: ChannelType,
        channel_url: &str,
        request: &SendMessageRequest,
    ) -> Result<SendMessageResponse> {
        request
            .validate()
            .map_err(|e| e.context("failed to validate send message request"))?;

        let message: Option<SendMessageResponse> = self
            .client
            .post(&messages_path(channel_type, channel_url), Some(request))
            .await
            .map_err(|e| e.context("failed to send message"))?;
        Ok(message.unwrap_or_default())
    }
}
