use tracing::instrument;

use crate::group_channel::MarkAsReadRequest;
use crate::Result;

use super::channel_path;

impl super::ChannelClient {
    /// Mark every message in a channel as read by `user_id`.
    #[instrument(skip(self))]
    pub async fn mark_as_read(&self, channel_url: &str, user_id: &str) -> Result<()> {
        self.client
            .put_unit(
                &channel_path(channel_url, "/messages/mark_as_read"),
                Some(&MarkAsReadRequest { user_id }),
            )
            .await
            .map_err(|e| e.context("failed to mark channel as read"))
    }
}
