//! Community handlers
//!
//! Endpoints for community CRUD and public browse/search.

use axum::extract::{Path, Query, State};
use club_core::traits::CommunityQuery;
use club_service::{
    CommunityResponse, CommunityService, CommunityWithCountsResponse, CreateCommunityRequest,
    UpdateCommunityRequest,
};
use serde::Deserialize;

use crate::extractors::{AuthUser, CursorPagination, ValidatedJson};
use crate::response::{ApiJson, ApiPage, ApiResult, Created, NoContent};
use crate::state::AppState;

use super::parse_id;

/// Search filter query parameters
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Substring match on the community name
    pub q: Option<String>,
    pub region: Option<String>,
    pub sub_region: Option<String>,
    pub tag: Option<String>,
}

/// Create a new community
///
/// POST /communities
pub async fn create_community(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCommunityRequest>,
) -> ApiResult<Created<ApiJson<CommunityResponse>>> {
    let service = CommunityService::new(state.service_context());
    let response = service.create_community(auth.user_id, request).await?;
    Ok(Created(ApiJson(response)))
}

/// Browse/search public communities (cursor-paginated)
///
/// GET /communities
pub async fn search_communities(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
    CursorPagination(page): CursorPagination,
) -> ApiResult<ApiPage<CommunityResponse>> {
    let query = CommunityQuery {
        name: params.q,
        region: params.region,
        sub_region: params.sub_region,
        tag: params.tag,
    };

    let service = CommunityService::new(state.service_context());
    let result = service.search_communities(query, page).await?;
    Ok(ApiPage(result))
}

/// List communities the current user belongs to
///
/// GET /users/@me/communities
pub async fn list_my_communities(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<Vec<CommunityResponse>>> {
    let service = CommunityService::new(state.service_context());
    let response = service.list_my_communities(auth.user_id).await?;
    Ok(ApiJson(response))
}

/// Get community by ID
///
/// GET /communities/{community_id}
pub async fn get_community(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(community_id): Path<String>,
) -> ApiResult<ApiJson<CommunityWithCountsResponse>> {
    let community_id = parse_id(&community_id, "community_id")?;

    let service = CommunityService::new(state.service_context());
    let response = service.get_community(community_id, auth.user_id).await?;
    Ok(ApiJson(response))
}

/// Update community settings
///
/// PATCH /communities/{community_id}
pub async fn update_community(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(community_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateCommunityRequest>,
) -> ApiResult<ApiJson<CommunityResponse>> {
    let community_id = parse_id(&community_id, "community_id")?;

    let service = CommunityService::new(state.service_context());
    let response = service
        .update_community(community_id, auth.user_id, request)
        .await?;
    Ok(ApiJson(response))
}

/// Delete (soft) a community
///
/// DELETE /communities/{community_id}
pub async fn delete_community(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(community_id): Path<String>,
) -> ApiResult<NoContent> {
    let community_id = parse_id(&community_id, "community_id")?;

    let service = CommunityService::new(state.service_context());
    service.delete_community(community_id, auth.user_id).await?;
    Ok(NoContent)
}
