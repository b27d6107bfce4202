//! Access control service
//!
//! The single capability check every community-scoped mutating operation
//! goes through: resolve the caller's active membership, then compare its
//! role against the operation's requirement. Policy lives here once
//! instead of being re-derived per handler.

use club_core::entities::CommunityMember;
use club_core::error::DomainError;
use club_core::Snowflake;
use tracing::instrument;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Role an operation requires within a community
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleRequirement {
    /// Any active membership
    Member,
    /// Admin authority (admin or owner role)
    Admin,
}

/// Access control service
pub struct AccessService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccessService<'a> {
    /// Create a new AccessService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Check the caller's role in a community, returning the membership
    ///
    /// Fails with `NotCommunityMember` when the caller has no active
    /// membership (a soft-deleted membership reads as absent), and with
    /// `NotCommunityAdmin` when admin authority is required but missing.
    #[instrument(skip(self))]
    pub async fn require_role(
        &self,
        community_id: Snowflake,
        user_id: Snowflake,
        requirement: RoleRequirement,
    ) -> ServiceResult<CommunityMember> {
        let member = self
            .ctx
            .member_repo()
            .find(community_id, user_id)
            .await?
            .ok_or(DomainError::NotCommunityMember)?;

        if requirement == RoleRequirement::Admin && !member.is_admin() {
            return Err(DomainError::NotCommunityAdmin.into());
        }

        Ok(member)
    }

    /// Check if a user has an active membership in a community
    #[instrument(skip(self))]
    pub async fn is_member(
        &self,
        community_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<bool> {
        Ok(self.ctx.member_repo().is_member(community_id, user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests would go here with mocked dependencies
}
