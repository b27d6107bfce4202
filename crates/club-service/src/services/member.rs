//! Member service
//!
//! Join, leave, kick, role changes, and member listing. Leaving is blocked
//! for the last remaining admin so a community cannot become orphaned.

use club_core::entities::{CommunityMember, MemberRole};
use club_core::error::DomainError;
use club_core::value_objects::{Page, PageRequest, Snowflake};
use tracing::{info, instrument};

use crate::dto::{MemberResponse, MemberWithUser, UpdateMemberRoleRequest};

use super::access::{AccessService, RoleRequirement};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Join a community as a regular member
    #[instrument(skip(self))]
    pub async fn join(
        &self,
        community_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<MemberResponse> {
        let community = self
            .ctx
            .community_repo()
            .find_by_id(community_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Community", community_id.to_string()))?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let member = CommunityMember::new(
            self.ctx.generate_id(),
            community.id,
            user_id,
            MemberRole::Member,
        );
        // The partial unique index backs this up under concurrent joins
        self.ctx.member_repo().create(&member).await?;

        info!(community_id = %community_id, user_id = %user_id, "Member joined community");

        Ok(MemberResponse::from(MemberWithUser { member, user }))
    }

    /// Leave a community
    ///
    /// An admin (or the owner) cannot leave while they are the last active
    /// admin; the membership stays untouched in that case.
    #[instrument(skip(self))]
    pub async fn leave(&self, community_id: Snowflake, user_id: Snowflake) -> ServiceResult<()> {
        let member = self
            .ctx
            .member_repo()
            .find(community_id, user_id)
            .await?
            .ok_or(DomainError::NotCommunityMember)?;

        if member.is_admin() {
            let admins = self.ctx.member_repo().count_admins(community_id).await?;
            if admins <= 1 {
                return Err(DomainError::LastAdmin.into());
            }
        }

        self.ctx.member_repo().soft_delete(member.id).await?;
        info!(community_id = %community_id, user_id = %user_id, "Member left community");

        Ok(())
    }

    /// Remove a member from a community (admin)
    #[instrument(skip(self))]
    pub async fn kick(
        &self,
        community_id: Snowflake,
        target_user_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<()> {
        AccessService::new(self.ctx)
            .require_role(community_id, actor_id, RoleRequirement::Admin)
            .await?;

        let target = self
            .ctx
            .member_repo()
            .find(community_id, target_user_id)
            .await?
            .ok_or(DomainError::MemberNotFound)?;

        if target.role == MemberRole::Owner {
            return Err(ServiceError::conflict("Cannot kick the community owner"));
        }

        self.ctx.member_repo().soft_delete(target.id).await?;
        info!(
            community_id = %community_id,
            user_id = %target_user_id,
            actor_id = %actor_id,
            "Member kicked"
        );

        Ok(())
    }

    /// Change a member's role between member and admin (admin)
    #[instrument(skip(self, request))]
    pub async fn change_role(
        &self,
        community_id: Snowflake,
        target_user_id: Snowflake,
        actor_id: Snowflake,
        request: UpdateMemberRoleRequest,
    ) -> ServiceResult<MemberResponse> {
        AccessService::new(self.ctx)
            .require_role(community_id, actor_id, RoleRequirement::Admin)
            .await?;

        let role = MemberRole::parse(&request.role)
            .ok_or_else(|| DomainError::InvalidRole(request.role.clone()))?;
        if role == MemberRole::Owner {
            return Err(ServiceError::validation(
                "Ownership is not assignable through role changes",
            ));
        }

        let mut target = self
            .ctx
            .member_repo()
            .find(community_id, target_user_id)
            .await?
            .ok_or(DomainError::MemberNotFound)?;

        if target.role == MemberRole::Owner {
            return Err(DomainError::CannotDemoteOwner.into());
        }

        // Demoting the last admin would orphan the community
        if target.is_admin() && !role.is_admin() {
            let admins = self.ctx.member_repo().count_admins(community_id).await?;
            if admins <= 1 {
                return Err(DomainError::LastAdmin.into());
            }
        }

        self.ctx.member_repo().update_role(target.id, role).await?;
        target.set_role(role);

        let user = self
            .ctx
            .user_repo()
            .find_by_id(target_user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", target_user_id.to_string()))?;

        info!(
            community_id = %community_id,
            user_id = %target_user_id,
            role = %role,
            "Member role changed"
        );

        Ok(MemberResponse::from(MemberWithUser {
            member: target,
            user,
        }))
    }

    /// List community members (member-visible, cursor-paginated)
    #[instrument(skip(self))]
    pub async fn list_members(
        &self,
        community_id: Snowflake,
        user_id: Snowflake,
        page: PageRequest,
    ) -> ServiceResult<Page<MemberResponse>> {
        AccessService::new(self.ctx)
            .require_role(community_id, user_id, RoleRequirement::Member)
            .await?;

        let members = self.ctx.member_repo().list(community_id, &page).await?;

        let mut responses = Vec::with_capacity(members.items.len());
        for member in &members.items {
            if let Some(user) = self.ctx.user_repo().find_by_id(member.user_id).await? {
                responses.push(MemberResponse::from(MemberWithUser {
                    member: member.clone(),
                    user,
                }));
            }
        }

        Ok(Page {
            items: responses,
            next_cursor: members.next_cursor,
            prev_cursor: members.prev_cursor,
            has_more: members.has_more,
            has_previous: members.has_previous,
        })
    }
}

#[cfg(test)]
mod tests {
    // Integration tests would go here with mocked dependencies
}
