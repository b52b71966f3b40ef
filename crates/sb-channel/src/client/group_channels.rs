use tracing::instrument;

use sendbird_client::query;

use crate::group_channel::{
    CreateGroupChannelRequest, CreateGroupChannelResponse, ListGroupChannelRequest,
    ListGroupChannelResponse, UpdateGroupChannelRequest, UpdateGroupChannelResponse,
};
use crate::Result;

use super::channel_path;

impl super::ChannelClient {
    /// Create a group channel.
    ///
    /// A non-error answer without a body yields a default (empty) channel.
    #[instrument(skip(self, request))]
    pub async fn create_group_channel(
        &self,
        request: &CreateGroupChannelRequest,
    ) -> Result<CreateGroupChannelResponse> {
        let channel: Option<CreateGroupChannelResponse> = self
            .client
            .post("/group_channels", Some(request))
            .await
            .map_err(|e| e.context("failed to create channel"))?;
        Ok(channel.unwrap_or_default())
    }

    /// Update the properties of a group channel.
    #[instrument(skip(self, request))]
    pub async fn update_group_channel(
        &self,
        channel_url: &str,
        request: &UpdateGroupChannelRequest,
    ) -> Result<UpdateGroupChannelResponse> {
        let channel: Option<UpdateGroupChannelResponse> = self
            .client
            .put(&channel_path(channel_url, ""), Some(request))
            .await
            .map_err(|e| e.context("failed to update channel"))?;
        Ok(channel.unwrap_or_default())
    }

    /// List group channels matching the given filters.
    ///
    /// Follow [`ListGroupChannelResponse::next`] with
    /// [`ListGroupChannelRequest::token`] to page through results.
    #[instrument(skip(self, request))]
    pub async fn list_group_channels(
        &self,
        request: &ListGroupChannelRequest,
    ) -> Result<ListGroupChannelResponse> {
        let path = query::with_query("/group_channels", request)
            .map_err(|e| e.context("failed to list channels"))?;
        let page: Option<ListGroupChannelResponse> = self
            .client
            .get(&path, sendbird_client::NO_BODY)
            .await
            .map_err(|e| e.context("failed to list channels"))?;
        Ok(page.unwrap_or_default())
    }
}
