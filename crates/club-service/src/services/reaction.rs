//! Reaction service
//!
//! Short messages left on a community member's presence. Both sides of the
//! interaction must be active members of the same community; removal is
//! author-only.

use club_core::entities::{CommunityMember, Reaction};
use club_core::error::DomainError;
use club_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CreateReactionRequest, ReactionResponse};

use super::access::{AccessService, RoleRequirement};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Leave a reaction on a member
    #[instrument(skip(self, request))]
    pub async fn add_reaction(
        &self,
        member_id: Snowflake,
        actor_id: Snowflake,
        request: CreateReactionRequest,
    ) -> ServiceResult<ReactionResponse> {
        let target = self.find_member(member_id).await?;

        AccessService::new(self.ctx)
            .require_role(target.community_id, actor_id, RoleRequirement::Member)
            .await?;

        let reaction = Reaction::new(
            self.ctx.generate_id(),
            actor_id,
            member_id,
            request.text,
        );
        self.ctx.reaction_repo().create(&reaction).await?;

        info!(member_id = %member_id, user_id = %actor_id, "Reaction added");

        Ok(ReactionResponse::from(reaction))
    }

    /// List reactions left on a member
    #[instrument(skip(self))]
    pub async fn list_reactions(
        &self,
        member_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<Vec<ReactionResponse>> {
        let target = self.find_member(member_id).await?;

        AccessService::new(self.ctx)
            .require_role(target.community_id, actor_id, RoleRequirement::Member)
            .await?;

        let reactions = self.ctx.reaction_repo().list_by_member(member_id).await?;
        Ok(reactions.into_iter().map(ReactionResponse::from).collect())
    }

    /// Remove a reaction (author only)
    #[instrument(skip(self))]
    pub async fn remove_reaction(
        &self,
        reaction_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<()> {
        let reaction = self
            .ctx
            .reaction_repo()
            .find_by_id(reaction_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Reaction", reaction_id.to_string()))?;

        if !reaction.is_author(actor_id) {
            return Err(DomainError::NotReactionAuthor.into());
        }

        self.ctx.reaction_repo().soft_delete(reaction.id).await?;
        info!(reaction_id = %reaction_id, "Reaction removed");

        Ok(())
    }

    async fn find_member(&self, member_id: Snowflake) -> ServiceResult<CommunityMember> {
        self.ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Member", member_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    // Integration tests would go here with mocked dependencies
}
