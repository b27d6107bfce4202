//! Notification handlers
//!
//! Endpoints for community announcements, including pinning.

use axum::extract::{Path, State};
use club_service::{
    CreateNotificationRequest, NotificationResponse, NotificationService,
    UpdateNotificationRequest,
};

use crate::extractors::{AuthUser, CursorPagination, ValidatedJson};
use crate::response::{ApiJson, ApiPage, ApiResult, Created, NoContent};
use crate::state::AppState;

use super::parse_id;

/// Post a notification
///
/// POST /communities/{community_id}/notifications
pub async fn create_notification(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(community_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateNotificationRequest>,
) -> ApiResult<Created<ApiJson<NotificationResponse>>> {
    let community_id = parse_id(&community_id, "community_id")?;

    let service = NotificationService::new(state.service_context());
    let response = service
        .create_notification(community_id, auth.user_id, request)
        .await?;
    Ok(Created(ApiJson(response)))
}

/// List a community's notifications (cursor-paginated)
///
/// GET /communities/{community_id}/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(community_id): Path<String>,
    CursorPagination(page): CursorPagination,
) -> ApiResult<ApiPage<NotificationResponse>> {
    let community_id = parse_id(&community_id, "community_id")?;

    let service = NotificationService::new(state.service_context());
    let result = service
        .list_notifications(community_id, auth.user_id, page)
        .await?;
    Ok(ApiPage(result))
}

/// Edit a notification
///
/// PATCH /notifications/{notification_id}
pub async fn update_notification(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(notification_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateNotificationRequest>,
) -> ApiResult<ApiJson<NotificationResponse>> {
    let notification_id = parse_id(&notification_id, "notification_id")?;

    let service = NotificationService::new(state.service_context());
    let response = service
        .update_notification(notification_id, auth.user_id, request)
        .await?;
    Ok(ApiJson(response))
}

/// Pin a notification (unpins the community's current one)
///
/// POST /notifications/{notification_id}/pin
pub async fn pin_notification(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(notification_id): Path<String>,
) -> ApiResult<ApiJson<NotificationResponse>> {
    let notification_id = parse_id(&notification_id, "notification_id")?;

    let service = NotificationService::new(state.service_context());
    let response = service.pin(notification_id, auth.user_id).await?;
    Ok(ApiJson(response))
}

/// Unpin a notification
///
/// DELETE /notifications/{notification_id}/pin
pub async fn unpin_notification(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(notification_id): Path<String>,
) -> ApiResult<ApiJson<NotificationResponse>> {
    let notification_id = parse_id(&notification_id, "notification_id")?;

    let service = NotificationService::new(state.service_context());
    let response = service.unpin(notification_id, auth.user_id).await?;
    Ok(ApiJson(response))
}

/// Delete (soft) a notification
///
/// DELETE /notifications/{notification_id}
pub async fn delete_notification(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(notification_id): Path<String>,
) -> ApiResult<NoContent> {
    let notification_id = parse_id(&notification_id, "notification_id")?;

    let service = NotificationService::new(state.service_context());
    service
        .delete_notification(notification_id, auth.user_id)
        .await?;
    Ok(NoContent)
}
