//! Auth service
//!
//! Handles the OAuth login flow (code exchange, find-or-create by provider
//! identity) and session token refresh. Token cryptography is delegated to
//! the session service; provider calls to the OAuth client.

use club_common::{AppError, TokenPair};
use club_core::entities::User;
use tracing::{info, instrument};

use crate::dto::{AuthResponse, CurrentUserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Auth service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Log in with an OAuth authorization code
    ///
    /// Exchanges the code for a profile, finds or creates the local user
    /// keyed by (provider, provider_id), and issues a session token pair.
    #[instrument(skip(self, code))]
    pub async fn login(&self, code: &str) -> ServiceResult<AuthResponse> {
        let provider = self.ctx.oauth_provider();
        let profile = self.ctx.oauth_client().exchange_code(code).await?;

        let user = match self
            .ctx
            .user_repo()
            .find_by_provider(provider, &profile.id)
            .await?
        {
            Some(user) => user,
            None => {
                let id = self.ctx.generate_id();
                let username = profile
                    .nickname
                    .clone()
                    .unwrap_or_else(|| format!("user{id}"));
                let mut user = User::new(
                    id,
                    profile.email.clone().unwrap_or_default(),
                    username,
                    provider,
                    profile.id.clone(),
                );
                user.nickname = profile.nickname.clone();

                self.ctx.user_repo().create(&user).await?;
                info!(user_id = %user.id, provider = %provider, "New user registered");
                user
            }
        };

        let tokens = self.issue_tokens(&user)?;
        Ok(AuthResponse::new(tokens, CurrentUserResponse::from(&user)))
    }

    /// Issue a fresh token pair from a valid refresh token
    ///
    /// Claims are rebuilt from the current user row, so a profile change
    /// (or account deletion) is reflected on the next refresh.
    #[instrument(skip(self, refresh_token))]
    pub async fn refresh(&self, refresh_token: &str) -> ServiceResult<TokenPair> {
        let claims = self
            .ctx
            .session_service()
            .validate_refresh_token(refresh_token)?;
        let user_id = claims.user_id()?;

        // A deleted account invalidates its outstanding refresh tokens
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::InvalidToken)?;

        Ok(self.issue_tokens(&user)?)
    }

    /// Issue a token pair carrying the user's current identity claims
    pub fn issue_tokens(&self, user: &User) -> Result<TokenPair, AppError> {
        self.ctx
            .session_service()
            .issue(user.id, &user.username, user.nickname.as_deref())
    }
}
