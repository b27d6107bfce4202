//! Member handlers
//!
//! Endpoints for joining, leaving, and managing community members.

use axum::extract::{Path, State};
use club_service::{MemberResponse, MemberService, UpdateMemberRoleRequest};

use crate::extractors::{AuthUser, CursorPagination, ValidatedJson};
use crate::response::{ApiJson, ApiPage, ApiResult, Created, NoContent};
use crate::state::AppState;

use super::parse_id;

/// Join a community
///
/// POST /communities/{community_id}/members
pub async fn join_community(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(community_id): Path<String>,
) -> ApiResult<Created<ApiJson<MemberResponse>>> {
    let community_id = parse_id(&community_id, "community_id")?;

    let service = MemberService::new(state.service_context());
    let response = service.join(community_id, auth.user_id).await?;
    Ok(Created(ApiJson(response)))
}

/// List community members (cursor-paginated)
///
/// GET /communities/{community_id}/members
pub async fn list_members(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(community_id): Path<String>,
    CursorPagination(page): CursorPagination,
) -> ApiResult<ApiPage<MemberResponse>> {
    let community_id = parse_id(&community_id, "community_id")?;

    let service = MemberService::new(state.service_context());
    let result = service
        .list_members(community_id, auth.user_id, page)
        .await?;
    Ok(ApiPage(result))
}

/// Leave a community
///
/// DELETE /communities/{community_id}/members/@me
pub async fn leave_community(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(community_id): Path<String>,
) -> ApiResult<NoContent> {
    let community_id = parse_id(&community_id, "community_id")?;

    let service = MemberService::new(state.service_context());
    service.leave(community_id, auth.user_id).await?;
    Ok(NoContent)
}

/// Change a member's role
///
/// PATCH /communities/{community_id}/members/{user_id}
pub async fn update_member_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((community_id, user_id)): Path<(String, String)>,
    ValidatedJson(request): ValidatedJson<UpdateMemberRoleRequest>,
) -> ApiResult<ApiJson<MemberResponse>> {
    let community_id = parse_id(&community_id, "community_id")?;
    let user_id = parse_id(&user_id, "user_id")?;

    let service = MemberService::new(state.service_context());
    let response = service
        .change_role(community_id, user_id, auth.user_id, request)
        .await?;
    Ok(ApiJson(response))
}

/// Remove a member (kick)
///
/// DELETE /communities/{community_id}/members/{user_id}
pub async fn remove_member(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((community_id, user_id)): Path<(String, String)>,
) -> ApiResult<NoContent> {
    let community_id = parse_id(&community_id, "community_id")?;
    let user_id = parse_id(&user_id, "user_id")?;

    let service = MemberService::new(state.service_context());
    service.kick(community_id, user_id, auth.user_id).await?;
    Ok(NoContent)
}
