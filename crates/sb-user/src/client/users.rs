use tracing::instrument;

use crate::user::{CreateUserRequest, CreateUserResponse, UpdateUserRequest, UpdateUserResponse};
use crate::Result;

use super::user_path;

impl super::UserClient {
    /// Create a user.
    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<CreateUserResponse> {
        let user: Option<CreateUserResponse> = self
            .client
            .post("/users", Some(request))
            .await
            .map_err(|e| e.context("failed to create user"))?;
        Ok(user.unwrap_or_default())
    }

    /// Update a user. Only the fields set on `request` change.
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        user_id: &str,
        request: &UpdateUserRequest,
    ) -> Result<UpdateUserResponse> {
        let user: Option<UpdateUserResponse> = self
            .client
            .put(&user_path(user_id, ""), Some(request))
            .await
            .map_err(|e| e.context("failed to update user"))?;
        Ok(user.unwrap_or_default())
    }
}
