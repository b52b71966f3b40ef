//! Request and response types for user operations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{HiddenMode, MemberState, SuperMode, UserResource};

/// Body of `POST /users`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub user_id: String,
    /// Up to 80 characters.
    pub nickname: String,
    /// Empty for no profile image.
    pub profile_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_access_token: Option<bool>,
    /// Unix milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token_expires_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

/// Response of `POST /users`.
pub type CreateUserResponse = UserResource;

/// Body of `PUT /users/{user_id}`. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    /// Revoke the current access token and issue a new one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_access_token: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Unix milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen_at: Option<i64>,
    /// Keys other users can find this user by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery_keys: Option<Vec<String>>,
    /// Up to four language codes for push notification translation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_languages: Option<Vec<String>>,
    /// Only used together with `is_active: false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_all_when_deactivated: Option<bool>,
}

/// Response of `PUT /users/{user_id}`.
pub type UpdateUserResponse = UserResource;

/// Body of `POST /users/{user_id}/token`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSessionTokenRequest {
    /// Unix milliseconds. The server defaults to seven days from now.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetSessionTokenResponse {
    pub token: String,
    /// Unix milliseconds.
    pub expires_at: i64,
}

impl std::fmt::Debug for GetSessionTokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GetSessionTokenResponse")
            .field("token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Filters of `GET /users/{user_id}/unread_message_count`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetUnreadMessagesCountRequest {
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "sendbird_client::query::csv"
    )]
    pub custom_types: Option<Vec<String>>,
    /// Server default [`SuperMode::All`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_mode: Option<SuperMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetUnreadMessagesCountResponse {
    pub unread_count: i64,
}

/// Filters of `GET /users/{user_id}/group_channel_count`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetGroupChannelCountRequest {
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "sendbird_client::query::csv"
    )]
    pub custom_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_mode: Option<HiddenMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<MemberState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_mode: Option<SuperMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetGroupChannelCountResponse {
    pub group_channel_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_body() {
        let request = CreateUserRequest {
            user_id: "Jeff".into(),
            nickname: "Jeffrey".into(),
            profile_url: String::new(),
            issue_access_token: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "user_id": "Jeff",
                "nickname": "Jeffrey",
                "profile_url": "",
                "issue_access_token": true
            })
        );
    }

    #[test]
    fn test_count_queries() {
        let unread = GetUnreadMessagesCountRequest {
            custom_types: Some(vec!["a".into(), "b".into()]),
            super_mode: Some(SuperMode::Super),
        };
        assert_eq!(
            sendbird_client::query::to_query(&unread).unwrap(),
            "custom_types=a%2Cb&super_mode=super"
        );

        let count = GetGroupChannelCountRequest {
            hidden_mode: Some(HiddenMode::HiddenOnly),
            state: Some(MemberState::Joined),
            ..Default::default()
        };
        assert_eq!(
            sendbird_client::query::to_query(&count).unwrap(),
            "hidden_mode=hidden_only&state=joined"
        );
    }

    #[test]
    fn test_session_token_debug_is_redacted() {
        let token = GetSessionTokenResponse {
            token: "0123456789abcdef".into(),
            expires_at: 1542945056625,
        };
        let debug = format!("{token:?}");
        assert!(!debug.contains("0123456789abcdef"));
        assert!(debug.contains("1542945056625"));
    }
}
