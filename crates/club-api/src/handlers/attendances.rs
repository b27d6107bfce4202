//! Attendance handlers
//!
//! Endpoints for marking and listing round attendance.

use axum::extract::{Path, State};
use club_service::{AttendanceResponse, AttendanceService, MarkAttendanceRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

use super::parse_id;

/// Mark the current user's attendance at a round
///
/// POST /rounds/{round_id}/attendances
pub async fn mark_attendance(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(round_id): Path<String>,
    ValidatedJson(request): ValidatedJson<MarkAttendanceRequest>,
) -> ApiResult<Created<ApiJson<AttendanceResponse>>> {
    let round_id = parse_id(&round_id, "round_id")?;

    let service = AttendanceService::new(state.service_context());
    let response = service.mark(round_id, auth.user_id, request).await?;
    Ok(Created(ApiJson(response)))
}

/// List attendance records for a round
///
/// GET /rounds/{round_id}/attendances
pub async fn list_attendances(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(round_id): Path<String>,
) -> ApiResult<ApiJson<Vec<AttendanceResponse>>> {
    let round_id = parse_id(&round_id, "round_id")?;

    let service = AttendanceService::new(state.service_context());
    let response = service.list(round_id, auth.user_id).await?;
    Ok(ApiJson(response))
}
