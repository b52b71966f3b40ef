//! Request and response types for message operations.
//!
//! Requests that carry required fields have a `validate` method; the client
//! runs it before anything is sent.

use serde::{Deserialize, Serialize};

use sendbird_client::{Error, ErrorKind, Result};

use crate::types::{MentionType, MessageResource, MessageType, MetaArray, OperatorFilter, ReplyType};

fn invalid(reason: &str) -> Error {
    Error::new(ErrorKind::InvalidRequest(reason.to_string()))
}

/// Body of `POST /{channel_type}/{channel_url}/messages`.
///
/// `message_type`, `user_id` and `message` are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<MessageType>,
    /// Sender.
    pub user_id: String,
    pub message: String,
    /// Up to 128 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Group channels only. Server default `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_push: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_message_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mention_type: Option<MentionType>,
    /// Used when `mention_type` is [`MentionType::Users`].
    #[serde(rename = "mentioned_user_ids", skip_serializing_if = "Option::is_none")]
    pub mention_user_ids: Option<Vec<String>>,
    /// Update `last_message` for the sender only and leave unread counts alone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_silent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_as_read: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorted_meta_array: Option<Vec<MetaArray>>,
    /// Unix milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_poll_details: Option<bool>,
    /// Server-side duplicate check key for messages imported from elsewhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedup_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns_bundle_id: Option<String>,
    /// Critical alert sound file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    /// 0.0 (silent) to 1.0 (full).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f32>,
}

impl SendMessageRequest {
    /// Check the required fields, in order.
    pub fn validate(&self) -> Result<()> {
        if self.message_type.is_none() {
            return Err(invalid("message type is required"));
        }
        if self.user_id.is_empty() {
            return Err(invalid("user ID is required"));
        }
        if self.message.is_empty() {
            return Err(invalid("message is required"));
        }
        Ok(())
    }
}

/// Response of `POST /{channel_type}/{channel_url}/messages`.
pub type SendMessageResponse = MessageResource;

/// Filters of `GET /{channel_type}/{channel_url}/messages`.
///
/// `message_ts` and `message_id` are always sent; either one anchors the
/// listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListMessagesRequest {
    /// Unix milliseconds.
    pub message_ts: i64,
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_limit: Option<u32>,
    /// Include the anchor message itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "sendbird_client::query::csv"
    )]
    pub sender_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_filter: Option<OperatorFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<MessageType>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "sendbird_client::query::csv"
    )]
    pub custom_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub including_removed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_parent_message_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_thread_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_reply_type: Option<ReplyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_reaction: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_poll_details: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_sorted_meta_array: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_subchannel_messages_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Response of `GET /{channel_type}/{channel_url}/messages`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListMessagesResponse {
    pub messages: Vec<MessageResource>,
}

/// One message imported by [`MigrateMessagesRequest`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextMessage {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<MessageType>,
    pub message: String,
    /// Unix milliseconds of when the message was first sent.
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<String>,
    #[serde(rename = "mentioned_user_ids", skip_serializing_if = "Option::is_none")]
    pub mention_user_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedup_id: Option<String>,
}

/// Body of `POST /migration/{channel_url}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MigrateMessagesRequest {
    pub messages: Vec<TextMessage>,
    /// Move every member's read receipt to the newest imported message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_read_ts: Option<bool>,
}

impl MigrateMessagesRequest {
    /// Reject an empty batch and messages missing a required field.
    pub fn validate(&self) -> Result<()> {
        if self.messages.is_empty() {
            return Err(invalid("messages cannot be empty"));
        }
        for message in &self.messages {
            if message.user_id.is_empty() {
                return Err(invalid("user_id cannot be empty"));
            }
            if message.message_type.is_none() {
                return Err(invalid("message_type cannot be empty"));
            }
            if message.message.is_empty() {
                return Err(invalid("message cannot be empty"));
            }
            if message.timestamp == 0 {
                return Err(invalid("timestamp cannot be empty"));
            }
        }
        Ok(())
    }
}
