use tracing::instrument;

use crate::group_channel::TypingRequest;
use crate::Result;

use super::channel_path;

impl super::ChannelClient {
    /// Show a typing indicator for `user_ids` in a channel.
    #[instrument(skip(self))]
    pub async fn start_typing(&self, channel_url: &str, user_ids: &[String]) -> Result<()> {
        self.client
            .post_unit(
                &channel_path(channel_url, "/typing"),
                Some(&TypingRequest { user_ids }),
            )
            .await
            .map_err(|e| e.context("failed to start typing"))
    }

    /// Clear the typing indicator for `user_ids` in a channel.
    #[instrument(skip(self))]
    pub async fn stop_typing(&self, channel_url: &str, user_ids: &[String]) -> Result<()> {
        self.client
            .delete_unit(
                &channel_path(channel_url, "/typing"),
                Some(&TypingRequest { user_ids }),
            )
            .await
            .map_err(|e| e.context("failed to stop typing"))
    }
}
