//! User API client.

use sendbird_client::{ClientConfig, SendbirdClient};

use crate::Result;

mod counts;
mod token;
mod users;

/// User API client.
///
/// Provides typed methods for:
/// - Creating and updating users
/// - Issuing session tokens
/// - Unread message and group channel counters
///
/// # Example
///
/// ```rust,ignore
/// use sendbird_user::{CreateUserRequest, GetSessionTokenRequest, UserClient};
///
/// let users = UserClient::new(config)?;
///
/// users
///     .create_user(&CreateUserRequest {
///         user_id: "alice".into(),
///         nickname: "Alice".into(),
///         ..Default::default()
///     })
///     .await?;
///
/// let session = users
///     .get_session_token("alice", &GetSessionTokenRequest::default())
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct UserClient {
    client: SendbirdClient,
}

impl UserClient {
    /// Create a new user client from a configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = SendbirdClient::new(config)?;
        Ok(Self { client })
    }

    /// Create a user client from an existing SendbirdClient.
    pub fn from_client(client: SendbirdClient) -> Self {
        Self { client }
    }

    /// Get the underlying SendbirdClient.
    pub fn inner(&self) -> &SendbirdClient {
        &self.client
    }
}

/// `/users/{user_id}{suffix}`, with the user ID escaped.
pub(crate) fn user_path(user_id: &str, suffix: &str) -> String {
    format!("/users/{}{}", urlencoding::encode(user_id), suffix)
}

#[cfg(test)]
pub(crate) fn test_client(server: &wiremock::MockServer) -> UserClient {
    let config = ClientConfig::builder()
        .with_url(&server.uri())
        .with_api_token("test-token")
        .build()
        .unwrap();
    UserClient::new(config).unwrap()
}
