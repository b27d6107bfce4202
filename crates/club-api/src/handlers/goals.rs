//! Goal handlers
//!
//! Endpoints for personal and team study goals.

use axum::extract::{Path, State};
use club_service::{CreateGoalRequest, GoalResponse, GoalService, UpdateGoalRequest};

use crate::extractors::{AuthUser, CursorPagination, ValidatedJson};
use crate::response::{ApiJson, ApiPage, ApiResult, Created, NoContent};
use crate::state::AppState;

use super::parse_id;

/// Create a goal (team goal when community_id is supplied)
///
/// POST /goals
pub async fn create_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateGoalRequest>,
) -> ApiResult<Created<ApiJson<GoalResponse>>> {
    let service = GoalService::new(state.service_context());
    let response = service.create_goal(auth.user_id, request).await?;
    Ok(Created(ApiJson(response)))
}

/// List the current user's goals (cursor-paginated)
///
/// GET /goals
pub async fn list_my_goals(
    State(state): State<AppState>,
    auth: AuthUser,
    CursorPagination(page): CursorPagination,
) -> ApiResult<ApiPage<GoalResponse>> {
    let service = GoalService::new(state.service_context());
    let result = service.list_my_goals(auth.user_id, page).await?;
    Ok(ApiPage(result))
}

/// List a community's team goals (cursor-paginated)
///
/// GET /communities/{community_id}/goals
pub async fn list_community_goals(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(community_id): Path<String>,
    CursorPagination(page): CursorPagination,
) -> ApiResult<ApiPage<GoalResponse>> {
    let community_id = parse_id(&community_id, "community_id")?;

    let service = GoalService::new(state.service_context());
    let result = service
        .list_community_goals(community_id, auth.user_id, page)
        .await?;
    Ok(ApiPage(result))
}

/// Get goal by ID
///
/// GET /goals/{goal_id}
pub async fn get_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(goal_id): Path<String>,
) -> ApiResult<ApiJson<GoalResponse>> {
    let goal_id = parse_id(&goal_id, "goal_id")?;

    let service = GoalService::new(state.service_context());
    let response = service.get_goal(goal_id, auth.user_id).await?;
    Ok(ApiJson(response))
}

/// Update a goal
///
/// PATCH /goals/{goal_id}
pub async fn update_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(goal_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateGoalRequest>,
) -> ApiResult<ApiJson<GoalResponse>> {
    let goal_id = parse_id(&goal_id, "goal_id")?;

    let service = GoalService::new(state.service_context());
    let response = service.update_goal(goal_id, auth.user_id, request).await?;
    Ok(ApiJson(response))
}

/// Toggle a goal's completion flag
///
/// POST /goals/{goal_id}/complete
pub async fn toggle_goal_completed(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(goal_id): Path<String>,
) -> ApiResult<ApiJson<GoalResponse>> {
    let goal_id = parse_id(&goal_id, "goal_id")?;

    let service = GoalService::new(state.service_context());
    let response = service.toggle_completed(goal_id, auth.user_id).await?;
    Ok(ApiJson(response))
}

/// Delete (soft) a goal
///
/// DELETE /goals/{goal_id}
pub async fn delete_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(goal_id): Path<String>,
) -> ApiResult<NoContent> {
    let goal_id = parse_id(&goal_id, "goal_id")?;

    let service = GoalService::new(state.service_context());
    service.delete_goal(goal_id, auth.user_id).await?;
    Ok(NoContent)
}
