//! User resource and the filter enums of the per-user counters.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Which channels to count by their `is_super` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuperMode {
    All,
    Super,
    #[serde(rename = "nonsuper")]
    NonSuper,
}

/// Which channels to count by the user's hidden status in them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiddenMode {
    /// Server default.
    UnhiddenOnly,
    /// Either hidden status.
    HiddenOnly,
    HiddenAllowAutoUnhide,
    HiddenPreventAutoUnhide,
    All,
}

/// The user's membership state in a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberState {
    Joined,
    /// Invited but not joined yet.
    Invited,
}

/// A user as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserResource {
    pub user_id: String,
    pub nickname: String,
    pub profile_url: String,
    /// Only present when one was issued.
    pub access_token: String,
    pub is_online: bool,
    pub is_active: bool,
    pub is_created: bool,
    pub phone_number: String,
    pub require_auth_for_profile_image: bool,
    pub session_tokens: Vec<serde_json::Value>,
    /// Unix milliseconds, 0 while online.
    pub last_seen_at: i64,
    pub discovery_keys: Vec<String>,
    pub preferred_languages: Vec<String>,
    pub has_ever_logged_in: bool,
    pub metadata: HashMap<String, serde_json::Value>,
}
