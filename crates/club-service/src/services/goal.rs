//! Goal service
//!
//! Personal goals belong to their owner alone; team goals are scoped to a
//! community (optionally a round) and readable by its members. All
//! mutation is owner-gated.

use club_core::entities::StudyGoal;
use club_core::error::DomainError;
use club_core::value_objects::{Page, PageRequest, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CreateGoalRequest, GoalResponse, UpdateGoalRequest};

use super::access::{AccessService, RoleRequirement};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Goal service
pub struct GoalService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GoalService<'a> {
    /// Create a new GoalService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a goal; supplying community_id makes it a team goal
    #[instrument(skip(self, request))]
    pub async fn create_goal(
        &self,
        user_id: Snowflake,
        request: CreateGoalRequest,
    ) -> ServiceResult<GoalResponse> {
        let community_id = request
            .community_id
            .as_deref()
            .map(parse_id("community_id"))
            .transpose()?;
        let round_id = request
            .round_id
            .as_deref()
            .map(parse_id("round_id"))
            .transpose()?;

        if round_id.is_some() && community_id.is_none() {
            return Err(ServiceError::validation(
                "round_id requires a community_id",
            ));
        }

        let mut goal = match community_id {
            Some(community_id) => {
                // Team goals require an active membership in the target community
                AccessService::new(self.ctx)
                    .require_role(community_id, user_id, RoleRequirement::Member)
                    .await?;

                if let Some(round_id) = round_id {
                    let round = self
                        .ctx
                        .round_repo()
                        .find_by_id(round_id)
                        .await?
                        .ok_or_else(|| ServiceError::not_found("Round", round_id.to_string()))?;
                    if round.community_id != community_id {
                        return Err(ServiceError::validation(
                            "Round does not belong to the given community",
                        ));
                    }
                }

                StudyGoal::team(
                    self.ctx.generate_id(),
                    user_id,
                    community_id,
                    round_id,
                    request.title,
                )
            }
            None => StudyGoal::personal(self.ctx.generate_id(), user_id, request.title),
        };

        goal.description = request.description;
        goal.set_dates(request.start_date, request.end_date);

        self.ctx.goal_repo().create(&goal).await?;
        info!(goal_id = %goal.id, owner_id = %user_id, is_team = goal.is_team, "Goal created");

        Ok(GoalResponse::from(goal))
    }

    /// Get a goal: the owner always; members of the community for team goals
    #[instrument(skip(self))]
    pub async fn get_goal(&self, goal_id: Snowflake, user_id: Snowflake) -> ServiceResult<GoalResponse> {
        let goal = self.find_goal(goal_id).await?;

        if !goal.is_owner(user_id) {
            let visible = match goal.community_id {
                Some(community_id) if goal.is_team => {
                    AccessService::new(self.ctx)
                        .is_member(community_id, user_id)
                        .await?
                }
                _ => false,
            };
            if !visible {
                // Hidden rather than forbidden, like other absent resources
                return Err(ServiceError::not_found("Goal", goal_id.to_string()));
            }
        }

        Ok(GoalResponse::from(goal))
    }

    /// List the current user's goals (cursor-paginated)
    #[instrument(skip(self))]
    pub async fn list_my_goals(
        &self,
        user_id: Snowflake,
        page: PageRequest,
    ) -> ServiceResult<Page<GoalResponse>> {
        let goals = self.ctx.goal_repo().list_by_owner(user_id, &page).await?;
        Ok(goals.map(GoalResponse::from))
    }

    /// List a community's team goals (member, cursor-paginated)
    #[instrument(skip(self))]
    pub async fn list_community_goals(
        &self,
        community_id: Snowflake,
        user_id: Snowflake,
        page: PageRequest,
    ) -> ServiceResult<Page<GoalResponse>> {
        AccessService::new(self.ctx)
            .require_role(community_id, user_id, RoleRequirement::Member)
            .await?;

        let goals = self
            .ctx
            .goal_repo()
            .list_by_community(community_id, &page)
            .await?;
        Ok(goals.map(GoalResponse::from))
    }

    /// Update a goal (owner)
    #[instrument(skip(self, request))]
    pub async fn update_goal(
        &self,
        goal_id: Snowflake,
        user_id: Snowflake,
        request: UpdateGoalRequest,
    ) -> ServiceResult<GoalResponse> {
        let mut goal = self.find_owned_goal(goal_id, user_id).await?;

        if let Some(title) = request.title {
            goal.set_title(title);
        }
        if let Some(description) = request.description {
            goal.description = Some(description);
        }
        if request.start_date.is_some() || request.end_date.is_some() {
            goal.set_dates(
                request.start_date.or(goal.start_date),
                request.end_date.or(goal.end_date),
            );
        }

        self.ctx.goal_repo().update(&goal).await?;
        info!(goal_id = %goal_id, "Goal updated");

        Ok(GoalResponse::from(goal))
    }

    /// Toggle a goal's completion flag (owner)
    #[instrument(skip(self))]
    pub async fn toggle_completed(
        &self,
        goal_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<GoalResponse> {
        let mut goal = self.find_owned_goal(goal_id, user_id).await?;

        let completed = goal.toggle_completed();
        self.ctx.goal_repo().update(&goal).await?;
        info!(goal_id = %goal_id, completed, "Goal completion toggled");

        Ok(GoalResponse::from(goal))
    }

    /// Soft-delete a goal (owner)
    #[instrument(skip(self))]
    pub async fn delete_goal(&self, goal_id: Snowflake, user_id: Snowflake) -> ServiceResult<()> {
        let goal = self.find_owned_goal(goal_id, user_id).await?;

        self.ctx.goal_repo().soft_delete(goal.id).await?;
        info!(goal_id = %goal_id, "Goal deleted");

        Ok(())
    }

    async fn find_goal(&self, goal_id: Snowflake) -> ServiceResult<StudyGoal> {
        self.ctx
            .goal_repo()
            .find_by_id(goal_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Goal", goal_id.to_string()))
    }

    async fn find_owned_goal(
        &self,
        goal_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<StudyGoal> {
        let goal = self.find_goal(goal_id).await?;
        if !goal.is_owner(user_id) {
            return Err(DomainError::NotGoalOwner.into());
        }
        Ok(goal)
    }
}

fn parse_id(field: &'static str) -> impl Fn(&str) -> ServiceResult<Snowflake> {
    move |s| {
        s.parse()
            .map_err(|_| ServiceError::validation(format!("Invalid {field} format")))
    }
}

#[cfg(test)]
mod tests {
    // Integration tests would go here with mocked dependencies
}
