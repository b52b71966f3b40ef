//! Request and response types for group channel operations.

use serde::{Deserialize, Serialize};

use crate::types::{ChannelOrder, ChannelResource, DistinctMode, PublicMode, QueryType, SuperMode};

/// Body of `POST /group_channels`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateGroupChannelRequest {
    /// Users to invite. Always sent, even when empty.
    pub user_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Generated by the server when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Reuse an existing channel with the same members.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_distinct: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_super: Option<bool>,
    /// Messages are not persisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_ephemeral: Option<bool>,
    /// Only meaningful for public channels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inviter_id: Option<String>,
    /// Fail instead of ignoring unknown users in `user_ids`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_sdk_user_channel_join: Option<bool>,
}

/// Response of `POST /group_channels`.
pub type CreateGroupChannelResponse = ChannelResource;

/// Body of `PUT /group_channels/{channel_url}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateGroupChannelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_distinct: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_super: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_ids: Option<Vec<String>>,
}

/// Response of `PUT /group_channels/{channel_url}`.
pub type UpdateGroupChannelResponse = ChannelResource;

/// Filters of `GET /group_channels`. Every field is optional; unset fields are
/// left out of the query string. Lists are sent comma-separated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListGroupChannelRequest {
    /// Pagination cursor from a previous [`ListGroupChannelResponse::next`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// 1 to 100, server default 10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinct_mode: Option<DistinctMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_mode: Option<PublicMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_mode: Option<SuperMode>,
    /// Unix milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_after: Option<i64>,
    /// Unix milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_before: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_empty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_member: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_delivery_receipt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_read_receipt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_metadata: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_frozen: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<ChannelOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_order_key: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "sendbird_client::query::csv"
    )]
    pub custom_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_type_starts_with: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "sendbird_client::query::csv"
    )]
    pub channel_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_startswith: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "sendbird_client::query::csv"
    )]
    pub members_exactly_in: Option<Vec<String>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "sendbird_client::query::csv"
    )]
    pub members_include_in: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_type: Option<QueryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members_nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members_nickname_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_key: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "sendbird_client::query::csv"
    )]
    pub metadata_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_value_startswith: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metacounter_key: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "sendbird_client::query::csv"
    )]
    pub metacounter_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metacounter_values_gt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metacounter_values_gte: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metacounter_values_lt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metacounter_values_lte: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_sorted_metaarray_in_last_message: Option<bool>,
}

/// Response of `GET /group_channels`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListGroupChannelResponse {
    pub channels: Vec<ChannelResource>,
    /// Cursor for the next page; empty on the last page.
    pub next: String,
}

/// Body of the typing indicator endpoints.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TypingRequest<'a> {
    pub user_ids: &'a [String],
}

/// Body of `PUT /group_channels/{channel_url}/messages/mark_as_read`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct MarkAsReadRequest<'a> {
    pub user_id: &'a str,
}
