//! Reaction handlers
//!
//! Endpoints for reactions left on community members.

use axum::extract::{Path, State};
use club_service::{CreateReactionRequest, ReactionResponse, ReactionService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

use super::parse_id;

/// Leave a reaction on a member
///
/// POST /members/{member_id}/reactions
pub async fn add_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(member_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateReactionRequest>,
) -> ApiResult<Created<ApiJson<ReactionResponse>>> {
    let member_id = parse_id(&member_id, "member_id")?;

    let service = ReactionService::new(state.service_context());
    let response = service.add_reaction(member_id, auth.user_id, request).await?;
    Ok(Created(ApiJson(response)))
}

/// List reactions left on a member
///
/// GET /members/{member_id}/reactions
pub async fn list_reactions(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(member_id): Path<String>,
) -> ApiResult<ApiJson<Vec<ReactionResponse>>> {
    let member_id = parse_id(&member_id, "member_id")?;

    let service = ReactionService::new(state.service_context());
    let response = service.list_reactions(member_id, auth.user_id).await?;
    Ok(ApiJson(response))
}

/// Remove a reaction (author only)
///
/// DELETE /reactions/{reaction_id}
pub async fn remove_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(reaction_id): Path<String>,
) -> ApiResult<NoContent> {
    let reaction_id = parse_id(&reaction_id, "reaction_id")?;

    let service = ReactionService::new(state.service_context());
    service.remove_reaction(reaction_id, auth.user_id).await?;
    Ok(NoContent)
}
