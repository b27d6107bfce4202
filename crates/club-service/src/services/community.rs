//! Community service
//!
//! Community CRUD plus public browse/search. The creator becomes the
//! community's owner member; mutation is admin-gated; deletion is a soft
//! delete.

use club_core::entities::{Community, CommunityMember, MemberRole};
use club_core::traits::CommunityQuery;
use club_core::value_objects::{Page, PageRequest, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    CommunityResponse, CommunityWithCountsResponse, CreateCommunityRequest, UpdateCommunityRequest,
};

use super::access::{AccessService, RoleRequirement};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Community service
pub struct CommunityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommunityService<'a> {
    /// Create a new CommunityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a community; the creator joins as owner
    #[instrument(skip(self, request))]
    pub async fn create_community(
        &self,
        user_id: Snowflake,
        request: CreateCommunityRequest,
    ) -> ServiceResult<CommunityResponse> {
        let mut community = Community::new(self.ctx.generate_id(), request.name, user_id);
        community.description = request.description;
        community.is_public = request.is_public;
        community.image_url = request.image_url;
        community.set_region(request.region, request.sub_region);
        community.set_tags(request.tags);

        self.ctx.community_repo().create(&community).await?;

        let owner_member = CommunityMember::new(
            self.ctx.generate_id(),
            community.id,
            user_id,
            MemberRole::Owner,
        );
        self.ctx.member_repo().create(&owner_member).await?;

        info!(community_id = %community.id, owner_id = %user_id, "Community created");

        Ok(CommunityResponse::from(community))
    }

    /// Get a community with its member count
    ///
    /// Private communities are only visible to their members.
    #[instrument(skip(self))]
    pub async fn get_community(
        &self,
        community_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<CommunityWithCountsResponse> {
        let community = self
            .ctx
            .community_repo()
            .find_by_id(community_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Community", community_id.to_string()))?;

        if !community.is_public {
            let access = AccessService::new(self.ctx);
            if !access.is_member(community_id, user_id).await? {
                return Err(ServiceError::not_found(
                    "Community",
                    community_id.to_string(),
                ));
            }
        }

        let member_count = self.ctx.community_repo().member_count(community_id).await?;

        Ok(CommunityWithCountsResponse {
            community: CommunityResponse::from(community),
            member_count,
        })
    }

    /// Browse/search active public communities
    #[instrument(skip(self))]
    pub async fn search_communities(
        &self,
        query: CommunityQuery,
        page: PageRequest,
    ) -> ServiceResult<Page<CommunityResponse>> {
        let result = self.ctx.community_repo().search(&query, &page).await?;
        Ok(result.map(CommunityResponse::from))
    }

    /// List communities the current user belongs to
    #[instrument(skip(self))]
    pub async fn list_my_communities(
        &self,
        user_id: Snowflake,
    ) -> ServiceResult<Vec<CommunityResponse>> {
        let communities = self.ctx.community_repo().find_by_user(user_id).await?;
        Ok(communities.into_iter().map(CommunityResponse::from).collect())
    }

    /// Update community settings (admin)
    #[instrument(skip(self, request))]
    pub async fn update_community(
        &self,
        community_id: Snowflake,
        actor_id: Snowflake,
        request: UpdateCommunityRequest,
    ) -> ServiceResult<CommunityResponse> {
        AccessService::new(self.ctx)
            .require_role(community_id, actor_id, RoleRequirement::Admin)
            .await?;

        let mut community = self
            .ctx
            .community_repo()
            .find_by_id(community_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Community", community_id.to_string()))?;

        if let Some(name) = request.name {
            community.set_name(name);
        }
        if let Some(description) = request.description {
            community.set_description(Some(description));
        }
        if let Some(is_public) = request.is_public {
            community.is_public = is_public;
        }
        if request.region.is_some() || request.sub_region.is_some() {
            community.set_region(
                request.region.or(community.region.clone()),
                request.sub_region.or(community.sub_region.clone()),
            );
        }
        if let Some(tags) = request.tags {
            community.set_tags(tags);
        }
        if let Some(image_url) = request.image_url {
            community.image_url = Some(image_url);
        }

        self.ctx.community_repo().update(&community).await?;
        info!(community_id = %community_id, actor_id = %actor_id, "Community updated");

        Ok(CommunityResponse::from(community))
    }

    /// Soft-delete a community (admin)
    #[instrument(skip(self))]
    pub async fn delete_community(
        &self,
        community_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<()> {
        AccessService::new(self.ctx)
            .require_role(community_id, actor_id, RoleRequirement::Admin)
            .await?;

        self.ctx.community_repo().soft_delete(community_id).await?;
        info!(community_id = %community_id, actor_id = %actor_id, "Community deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Integration tests would go here with mocked dependencies
}
