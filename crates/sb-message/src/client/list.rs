use tracing::instrument;

use sendbird_client::query;

use crate::message::{ListMessagesRequest, ListMessagesResponse};
use crate::types::ChannelType;
use crate::Result;

use super::messages_path;

impl super::MessageClient {
    /// List messages of a channel around `message_ts` or `message_id`.
    #[instrument(skip(self, request))]
    pub async fn list_messages(
        &self,
        channel_type: ChannelType,
        channel_url: &str,
        request: &ListMessagesRequest,
    ) -> Result<ListMessagesResponse> {
        let path = query::with_query(&messages_path(channel_type, channel_url), request)
            .map_err(|e| e.context("failed to list messages"))?;
        let page: Option<ListMessagesResponse> = self
            .client
            .get(&path, sendbird_client::NO_BODY)
            .await
            .map_err(|e| e.context("failed to list messages"))?;
        Ok(page.unwrap_or_default())
    }
}
