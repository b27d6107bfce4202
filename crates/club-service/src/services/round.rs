//! Round service
//!
//! Scheduling of meeting rounds. Creation assigns the next sequence number
//! within the community; mutation is admin-gated.

use club_core::entities::Round;
use club_core::value_objects::{Page, PageRequest, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CreateRoundRequest, RoundResponse, UpdateRoundRequest};

use super::access::{AccessService, RoleRequirement};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Round service
pub struct RoundService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RoundService<'a> {
    /// Create a new RoundService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Schedule a new round (admin)
    #[instrument(skip(self, request))]
    pub async fn create_round(
        &self,
        community_id: Snowflake,
        actor_id: Snowflake,
        request: CreateRoundRequest,
    ) -> ServiceResult<RoundResponse> {
        AccessService::new(self.ctx)
            .require_role(community_id, actor_id, RoleRequirement::Admin)
            .await?;

        if request.ends_at <= request.starts_at {
            return Err(ServiceError::validation("Round must end after it starts"));
        }

        let sequence_no = self.ctx.round_repo().next_sequence_no(community_id).await?;
        let mut round = Round::new(
            self.ctx.generate_id(),
            community_id,
            sequence_no,
            request.starts_at,
            request.ends_at,
        );
        round.location = request.location;

        self.ctx.round_repo().create(&round).await?;
        info!(community_id = %community_id, round_id = %round.id, sequence_no, "Round created");

        Ok(RoundResponse::from(round))
    }

    /// Get a round (member of its community)
    #[instrument(skip(self))]
    pub async fn get_round(
        &self,
        round_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<RoundResponse> {
        let round = self.find_round(round_id).await?;

        AccessService::new(self.ctx)
            .require_role(round.community_id, user_id, RoleRequirement::Member)
            .await?;

        Ok(RoundResponse::from(round))
    }

    /// List a community's rounds (member, cursor-paginated)
    #[instrument(skip(self))]
    pub async fn list_rounds(
        &self,
        community_id: Snowflake,
        user_id: Snowflake,
        page: PageRequest,
    ) -> ServiceResult<Page<RoundResponse>> {
        AccessService::new(self.ctx)
            .require_role(community_id, user_id, RoleRequirement::Member)
            .await?;

        let rounds = self.ctx.round_repo().list(community_id, &page).await?;
        Ok(rounds.map(RoundResponse::from))
    }

    /// Reschedule or relocate a round (admin)
    #[instrument(skip(self, request))]
    pub async fn update_round(
        &self,
        round_id: Snowflake,
        actor_id: Snowflake,
        request: UpdateRoundRequest,
    ) -> ServiceResult<RoundResponse> {
        let mut round = self.find_round(round_id).await?;

        AccessService::new(self.ctx)
            .require_role(round.community_id, actor_id, RoleRequirement::Admin)
            .await?;

        let starts_at = request.starts_at.unwrap_or(round.starts_at);
        let ends_at = request.ends_at.unwrap_or(round.ends_at);
        if ends_at <= starts_at {
            return Err(ServiceError::validation("Round must end after it starts"));
        }
        round.set_window(starts_at, ends_at);

        if let Some(location) = request.location {
            round.set_location(Some(location));
        }

        self.ctx.round_repo().update(&round).await?;
        info!(round_id = %round_id, actor_id = %actor_id, "Round updated");

        Ok(RoundResponse::from(round))
    }

    /// Soft-delete a round (admin)
    #[instrument(skip(self))]
    pub async fn delete_round(&self, round_id: Snowflake, actor_id: Snowflake) -> ServiceResult<()> {
        let round = self.find_round(round_id).await?;

        AccessService::new(self.ctx)
            .require_role(round.community_id, actor_id, RoleRequirement::Admin)
            .await?;

        self.ctx.round_repo().soft_delete(round_id).await?;
        info!(round_id = %round_id, actor_id = %actor_id, "Round deleted");

        Ok(())
    }

    async fn find_round(&self, round_id: Snowflake) -> ServiceResult<Round> {
        self.ctx
            .round_repo()
            .find_by_id(round_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Round", round_id.to_string()))
    }
}
