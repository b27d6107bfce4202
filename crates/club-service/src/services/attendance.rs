//! Attendance service
//!
//! Marking is restricted to the round's [starts_at, ends_at] window and to
//! one record per (round, user). The pre-check is best-effort under
//! concurrency; the partial unique index is the backstop.

use chrono::Utc;
use club_core::entities::{Attendance, AttendanceStatus};
use club_core::error::DomainError;
use club_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{AttendanceResponse, MarkAttendanceRequest};

use super::access::{AccessService, RoleRequirement};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Attendance service
pub struct AttendanceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AttendanceService<'a> {
    /// Create a new AttendanceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Mark the current user's attendance at a round
    #[instrument(skip(self, request))]
    pub async fn mark(
        &self,
        round_id: Snowflake,
        user_id: Snowflake,
        request: MarkAttendanceRequest,
    ) -> ServiceResult<AttendanceResponse> {
        let status = AttendanceStatus::parse(&request.status).ok_or_else(|| {
            ServiceError::validation(format!("Unknown attendance status: {}", request.status))
        })?;

        let round = self
            .ctx
            .round_repo()
            .find_by_id(round_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Round", round_id.to_string()))?;

        AccessService::new(self.ctx)
            .require_role(round.community_id, user_id, RoleRequirement::Member)
            .await?;

        if !round.is_open_at(Utc::now()) {
            return Err(DomainError::RoundClosed.into());
        }

        if self
            .ctx
            .attendance_repo()
            .find(round_id, user_id)
            .await?
            .is_some()
        {
            return Err(DomainError::AttendanceAlreadyMarked.into());
        }

        let attendance = Attendance::new(self.ctx.generate_id(), round_id, user_id, status);
        self.ctx.attendance_repo().create(&attendance).await?;

        info!(round_id = %round_id, user_id = %user_id, status = %status, "Attendance marked");

        Ok(AttendanceResponse::from(attendance))
    }

    /// List attendance records for a round (member-visible)
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        round_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<Vec<AttendanceResponse>> {
        let round = self
            .ctx
            .round_repo()
            .find_by_id(round_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Round", round_id.to_string()))?;

        AccessService::new(self.ctx)
            .require_role(round.community_id, user_id, RoleRequirement::Member)
            .await?;

        let records = self.ctx.attendance_repo().list_by_round(round_id).await?;
        Ok(records.into_iter().map(AttendanceResponse::from).collect())
    }
}
