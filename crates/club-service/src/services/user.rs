//! User service
//!
//! Profile reads and updates. A profile update reissues the session token
//! pair so the claims carry the new username/nickname.

use club_common::TokenPair;
use club_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CurrentUserResponse, UpdateUserRequest, UserResponse};

use super::auth::AuthService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the current user's profile
    #[instrument(skip(self))]
    pub async fn get_current_user(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(CurrentUserResponse::from(user))
    }

    /// Get a user's public profile
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Snowflake) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// Update the current user's profile and reissue session claims
    #[instrument(skip(self, request))]
    pub async fn update_current_user(
        &self,
        user_id: Snowflake,
        request: UpdateUserRequest,
    ) -> ServiceResult<(CurrentUserResponse, TokenPair)> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        if let Some(username) = request.username {
            user.set_username(username);
        }
        if let Some(nickname) = request.nickname {
            user.set_nickname(if nickname.is_empty() {
                None
            } else {
                Some(nickname)
            });
        }

        self.ctx.user_repo().update(&user).await?;
        info!(user_id = %user.id, "User profile updated");

        // Fresh claims so the session reflects the new identity
        let tokens = AuthService::new(self.ctx).issue_tokens(&user)?;
        Ok((CurrentUserResponse::from(user), tokens))
    }
}
