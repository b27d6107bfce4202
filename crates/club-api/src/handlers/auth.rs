//! Auth handlers
//!
//! OAuth login and session token refresh.

use axum::extract::State;
use axum::Json;
use club_common::TokenPair;
use club_service::{AuthResponse, AuthService, LoginRequest, RefreshTokenRequest};

use crate::extractors::ValidatedJson;
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

/// Exchange an OAuth authorization code for a session
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Created<ApiJson<AuthResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(&request.code).await?;
    Ok(Created(ApiJson(response)))
}

/// Refresh the session token pair
///
/// POST /auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> ApiResult<ApiJson<TokenPair>> {
    let service = AuthService::new(state.service_context());
    let tokens = service.refresh(&request.refresh_token).await?;
    Ok(ApiJson(tokens))
}
