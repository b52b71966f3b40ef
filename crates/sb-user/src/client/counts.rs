use tracing::instrument;

use sendbird_client::{query, NO_BODY};

use crate::user::{
    GetGroupChannelCountRequest, GetGroupChannelCountResponse, GetUnreadMessagesCountRequest,
    GetUnreadMessagesCountResponse,
};
use crate::Result;

use super::user_path;

impl super::UserClient {
    /// Number of unread messages of a user across their group channels.
    #[instrument(skip(self, request))]
    pub async fn get_unread_messages_count(
        &self,
        user_id: &str,
        request: &GetUnreadMessagesCountRequest,
    ) -> Result<GetUnreadMessagesCountResponse> {
        let path = query::with_query(&user_path(user_id, "/unread_message_count"), request)
            .map_err(|e| e.context("failed to get unread messages count"))?;
        let count: Option<GetUnreadMessagesCountResponse> = self
            .client
            .get(&path, NO_BODY)
            .await
            .map_err(|e| e.context("failed to get unread messages count"))?;
        Ok(count.unwrap_or_default())
    }

    /// Number of group channels of a user, by join state.
    #[instrument(skip(self, request))]
    pub async fn get_group_channel_count(
        &self,
        user_id: &str,
        request: &GetGroupChannelCountRequest,
    ) -> Result<GetGroupChannelCountResponse> {
        let path = query::with_query(&user_path(user_id, "/group_channel_count"), request)
            .map_err(|e| e.context("failed to get group channel count"))?;
        let count: Option<GetGroupChannelCountResponse> = self
            .client
            .get(&path, NO_BODY)
            .await
            .map_err(|e| e.context("failed to get group channel count"))?;
        Ok(count.unwrap_or_default())
    }
}
