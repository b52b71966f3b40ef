//! Message resources and the enums shared by message requests.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageType {
    /// Text message.
    #[serde(rename = "MESG")]
    Text,
    /// File message.
    #[serde(rename = "FILE")]
    File,
    /// Admin message.
    #[serde(rename = "ADMM")]
    Admin,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Text => "MESG",
            MessageType::File => "FILE",
            MessageType::Admin => "ADMM",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of channel a message lives in. Also the first path segment of the
/// message endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelType {
    OpenChannels,
    GroupChannels,
}

impl ChannelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelType::OpenChannels => "open_channels",
            ChannelType::GroupChannels => "group_channels",
        }
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who gets notified of a mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionType {
    /// Up to ten users from `mentioned_user_ids`.
    Users,
    /// Up to ten members of the channel.
    Channels,
}

/// Filter messages by whether their sender is an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorFilter {
    All,
    Operator,
    #[serde(rename = "nonoperator")]
    NonOperator,
}

/// Which replies to include in a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReplyType {
    None,
    All,
    OnlyReplyToChannel,
}

/// Sender or mentioned user of a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub user_id: String,
    pub nickname: String,
    pub profile_url: String,
    pub metadata: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollOption {
    pub id: i64,
    pub poll_id: i64,
    pub text: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub created_by: String,
    pub vote_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Poll {
    pub id: i64,
    pub title: String,
    /// `open` or `closed`.
    pub status: String,
    pub allow_user_suggestion: bool,
    pub allow_multiple_votes: bool,
    pub data: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub created_by: String,
    pub voter_count: i64,
    pub close_at: i64,
    pub options: Vec<PollOption>,
}

/// Side effects the server applied when the message was sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageEvents {
    pub send_push_notification: String,
    pub update_unread_count: bool,
    pub update_mention_count: bool,
    pub update_last_message: bool,
}

/// Key with an ordered list of values, attached to a message for filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaArray {
    pub key: String,
    pub value: Vec<String>,
}

/// A message as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageResource {
    pub message_id: i64,
    /// `MESG`, `FILE` or `ADMM`. Kept as a string so new kinds still decode.
    #[serde(rename = "type")]
    pub message_type: String,
    pub custom_type: String,
    pub channel_url: String,
    pub user: User,
    pub mention_type: String,
    pub mentioned_users: Vec<User>,
    pub is_removed: bool,
    pub message: String,
    pub data: String,
    pub sorted_metaarray: Vec<MetaArray>,
    pub poll: Option<Poll>,
    pub message_events: MessageEvents,
    /// Unix milliseconds.
    pub created_at: i64,
    pub updated_at: i64,
    pub is_apple_critical_alert: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_value(MessageType::Admin).unwrap(), "ADMM");
        assert_eq!(MessageType::Text.to_string(), "MESG");
        assert_eq!(
            serde_json::to_value(ChannelType::OpenChannels).unwrap(),
            "open_channels"
        );
        assert_eq!(ChannelType::GroupChannels.to_string(), "group_channels");
        assert_eq!(serde_json::to_value(MentionType::Channels).unwrap(), "channels");
        assert_eq!(
            serde_json::to_value(OperatorFilter::NonOperator).unwrap(),
            "nonoperator"
        );
        assert_eq!(
            serde_json::to_value(ReplyType::OnlyReplyToChannel).unwrap(),
            "ONLY_REPLY_TO_CHANNEL"
        );
        assert_eq!(serde_json::to_value(ReplyType::None).unwrap(), "NONE");
    }

    #[test]
    fn test_message_resource_decodes_type_field() {
        let message: MessageResource = serde_json::from_value(serde_json::json!({
            "message_id": 69,
            "type": "MESG",
            "message": "hello",
            "user": {"user_id": "Jeff", "metadata": {}},
            "poll": null,
            "created_at": 1542467474000i64
        }))
        .unwrap();

        assert_eq!(message.message_id, 69);
        assert_eq!(message.message_type, "MESG");
        assert_eq!(message.user.user_id, "Jeff");
        assert!(message.poll.is_none());
        assert!(message.mentioned_users.is_empty());
    }
}
