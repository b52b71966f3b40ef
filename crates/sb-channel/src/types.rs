//! Group channel resources and filter enums.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Which channels to include by their `is_distinct` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistinctMode {
    All,
    Distinct,
    #[serde(rename = "nondistinct")]
    NonDistinct,
}

/// Which channels to include by their `is_public` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicMode {
    All,
    Public,
    Private,
}

/// Which channels to include by their `is_super` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuperMode {
    All,
    Super,
    #[serde(rename = "nonsuper")]
    NonSuper,
}

/// Sort order of a channel listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelOrder {
    Chronological,
    LatestLastMessage,
    ChannelNameAlphabetical,
    MetadataValueAlphabetical,
}

/// How `members_include_in` matches: all listed users or any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QueryType {
    And,
    Or,
}

/// The user who created a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatedBy {
    pub user_id: String,
    pub nickname: String,
    pub profile_url: String,
    pub require_auth_for_profile_image: bool,
}

/// A channel member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Member {
    pub user_id: String,
    pub nickname: String,
    pub profile_url: String,
    pub is_active: bool,
    pub is_online: bool,
    pub last_seen_at: i64,
    /// `joined` or `invited`.
    pub state: String,
    pub role: String,
    pub metadata: HashMap<String, serde_json::Value>,
}

/// A channel operator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Operator {
    pub user_id: String,
    pub nickname: String,
    pub profile_url: String,
    pub is_active: bool,
    pub is_online: bool,
    pub last_seen_at: i64,
    pub state: String,
    pub metadata: HashMap<String, serde_json::Value>,
}

/// A group channel as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelResource {
    pub name: String,
    pub channel_url: String,
    pub cover_url: String,
    pub custom_type: String,
    pub unread_message_count: i64,
    pub data: String,
    pub is_distinct: bool,
    pub is_public: bool,
    pub is_super: bool,
    pub is_ephemeral: bool,
    pub is_access_code_required: bool,
    pub member_count: i64,
    pub joined_member_count: i64,
    pub unread_mention_count: i64,
    pub created_by: CreatedBy,
    pub members: Vec<Member>,
    pub operators: Vec<Operator>,
    /// Shape depends on the message type, so it is kept as raw JSON.
    pub last_message: Option<serde_json::Value>,
    pub message_survival_seconds: i64,
    pub max_length_message: i64,
    pub created_at: i64,
    pub freeze: bool,
}
