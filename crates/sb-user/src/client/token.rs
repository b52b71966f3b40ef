use tracing::instrument;

use crate::user::{GetSessionTokenRequest, GetSessionTokenResponse};
use crate::Result;

use super::user_path;

impl super::UserClient {
    /// Issue a session token for a user.
    #[instrument(skip(self, request))]
    pub async fn get_session_token(
        &self,
        user_id: &str,
        request: &GetSessionTokenRequest,
    ) -> Result<GetSessionTokenResponse> {
        let token: Option<GetSessionTokenResponse> = self
            .client
            .post(&user_path(user_id, "/token"), Some(request))
            .await
            .map_err(|e| e.context("failed to get session token"))?;
        Ok(token.unwrap_or_default())
    }
}
