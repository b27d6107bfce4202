//! Round handlers
//!
//! Endpoints for scheduling and managing meeting rounds.

use axum::extract::{Path, State};
use club_service::{CreateRoundRequest, RoundResponse, RoundService, UpdateRoundRequest};

use crate::extractors::{AuthUser, CursorPagination, ValidatedJson};
use crate::response::{ApiJson, ApiPage, ApiResult, Created, NoContent};
use crate::state::AppState;

use super::parse_id;

/// Schedule a new round
///
/// POST /communities/{community_id}/rounds
pub async fn create_round(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(community_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateRoundRequest>,
) -> ApiResult<Created<ApiJson<RoundResponse>>> {
    let community_id = parse_id(&community_id, "community_id")?;

    let service = RoundService::new(state.service_context());
    let response = service
        .create_round(community_id, auth.user_id, request)
        .await?;
    Ok(Created(ApiJson(response)))
}

/// List a community's rounds (cursor-paginated)
///
/// GET /communities/{community_id}/rounds
pub async fn list_rounds(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(community_id): Path<String>,
    CursorPagination(page): CursorPagination,
) -> ApiResult<ApiPage<RoundResponse>> {
    let community_id = parse_id(&community_id, "community_id")?;

    let service = RoundService::new(state.service_context());
    let result = service.list_rounds(community_id, auth.user_id, page).await?;
    Ok(ApiPage(result))
}

/// Get round by ID
///
/// GET /rounds/{round_id}
pub async fn get_round(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(round_id): Path<String>,
) -> ApiResult<ApiJson<RoundResponse>> {
    let round_id = parse_id(&round_id, "round_id")?;

    let service = RoundService::new(state.service_context());
    let response = service.get_round(round_id, auth.user_id).await?;
    Ok(ApiJson(response))
}

/// Update a round
///
/// PATCH /rounds/{round_id}
pub async fn update_round(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(round_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateRoundRequest>,
) -> ApiResult<ApiJson<RoundResponse>> {
    let round_id = parse_id(&round_id, "round_id")?;

    let service = RoundService::new(state.service_context());
    let response = service.update_round(round_id, auth.user_id, request).await?;
    Ok(ApiJson(response))
}

/// Delete (soft) a round
///
/// DELETE /rounds/{round_id}
pub async fn delete_round(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(round_id): Path<String>,
) -> ApiResult<NoContent> {
    let round_id = parse_id(&round_id, "round_id")?;

    let service = RoundService::new(state.service_context());
    service.delete_round(round_id, auth.user_id).await?;
    Ok(NoContent)
}
