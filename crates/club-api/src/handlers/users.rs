//! User handlers
//!
//! Profile endpoints for the current and other users.

use axum::extract::{Path, State};
use club_common::TokenPair;
use club_service::{CurrentUserResponse, UpdateUserRequest, UserResponse, UserService};
use serde::Serialize;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

use super::parse_id;

/// Profile update response: new profile plus reissued session tokens
#[derive(Debug, Serialize)]
pub struct UpdatedProfileResponse {
    pub user: CurrentUserResponse,
    pub tokens: TokenPair,
}

/// Get the current user's profile
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_current_user(auth.user_id).await?;
    Ok(ApiJson(response))
}

/// Update the current user's profile (reissues session claims)
///
/// PATCH /users/@me
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<ApiJson<UpdatedProfileResponse>> {
    let service = UserService::new(state.service_context());
    let (user, tokens) = service.update_current_user(auth.user_id, request).await?;
    Ok(ApiJson(UpdatedProfileResponse { user, tokens }))
}

/// Get a user's public profile
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<String>,
) -> ApiResult<ApiJson<UserResponse>> {
    let user_id = parse_id(&user_id, "user_id")?;

    let service = UserService::new(state.service_context());
    let response = service.get_user(user_id).await?;
    Ok(ApiJson(response))
}
