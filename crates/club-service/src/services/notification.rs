//! Notification service
//!
//! Community announcements. Pinning is exclusive per community and
//! enforced by explicit unpin-then-pin, not a storage constraint.

use club_core::entities::Notification;
use club_core::value_objects::{Page, PageRequest, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CreateNotificationRequest, NotificationResponse, UpdateNotificationRequest};

use super::access::{AccessService, RoleRequirement};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a notification (admin)
    #[instrument(skip(self, request))]
    pub async fn create_notification(
        &self,
        community_id: Snowflake,
        actor_id: Snowflake,
        request: CreateNotificationRequest,
    ) -> ServiceResult<NotificationResponse> {
        AccessService::new(self.ctx)
            .require_role(community_id, actor_id, RoleRequirement::Admin)
            .await?;

        let notification = Notification::new(
            self.ctx.generate_id(),
            community_id,
            actor_id,
            request.title,
            request.content,
        );
        self.ctx.notification_repo().create(&notification).await?;

        info!(
            community_id = %community_id,
            notification_id = %notification.id,
            "Notification created"
        );

        Ok(NotificationResponse::from(notification))
    }

    /// List a community's notifications (member, cursor-paginated)
    #[instrument(skip(self))]
    pub async fn list_notifications(
        &self,
        community_id: Snowflake,
        user_id: Snowflake,
        page: PageRequest,
    ) -> ServiceResult<Page<NotificationResponse>> {
        AccessService::new(self.ctx)
            .require_role(community_id, user_id, RoleRequirement::Member)
            .await?;

        let notifications = self.ctx.notification_repo().list(community_id, &page).await?;
        Ok(notifications.map(NotificationResponse::from))
    }

    /// Edit a notification (admin of its community)
    #[instrument(skip(self, request))]
    pub async fn update_notification(
        &self,
        notification_id: Snowflake,
        actor_id: Snowflake,
        request: UpdateNotificationRequest,
    ) -> ServiceResult<NotificationResponse> {
        let mut notification = self.find_notification(notification_id).await?;

        AccessService::new(self.ctx)
            .require_role(notification.community_id, actor_id, RoleRequirement::Admin)
            .await?;

        let title = request.title.unwrap_or_else(|| notification.title.clone());
        let content = request
            .content
            .unwrap_or_else(|| notification.content.clone());
        notification.set_content(title, content);

        self.ctx.notification_repo().update(&notification).await?;
        info!(notification_id = %notification_id, "Notification updated");

        Ok(NotificationResponse::from(notification))
    }

    /// Pin a notification, unpinning the community's current one first (admin)
    ///
    /// Between the unpin and the pin another request can observe no pinned
    /// notification, but never two.
    #[instrument(skip(self))]
    pub async fn pin(
        &self,
        notification_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<NotificationResponse> {
        let mut notification = self.find_notification(notification_id).await?;

        AccessService::new(self.ctx)
            .require_role(notification.community_id, actor_id, RoleRequirement::Admin)
            .await?;

        if let Some(current) = self
            .ctx
            .notification_repo()
            .find_pinned(notification.community_id)
            .await?
        {
            if current.id != notification.id {
                self.ctx
                    .notification_repo()
                    .set_pinned(current.id, false)
                    .await?;
            }
        }

        self.ctx
            .notification_repo()
            .set_pinned(notification.id, true)
            .await?;
        notification.is_pinned = true;

        info!(
            community_id = %notification.community_id,
            notification_id = %notification_id,
            "Notification pinned"
        );

        Ok(NotificationResponse::from(notification))
    }

    /// Unpin a notification (admin)
    #[instrument(skip(self))]
    pub async fn unpin(
        &self,
        notification_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<NotificationResponse> {
        let mut notification = self.find_notification(notification_id).await?;

        AccessService::new(self.ctx)
            .require_role(notification.community_id, actor_id, RoleRequirement::Admin)
            .await?;

        self.ctx
            .notification_repo()
            .set_pinned(notification.id, false)
            .await?;
        notification.is_pinned = false;

        info!(notification_id = %notification_id, "Notification unpinned");

        Ok(NotificationResponse::from(notification))
    }

    /// Soft-delete a notification (admin of its community)
    #[instrument(skip(self))]
    pub async fn delete_notification(
        &self,
        notification_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<()> {
        let notification = self.find_notification(notification_id).await?;

        AccessService::new(self.ctx)
            .require_role(notification.community_id, actor_id, RoleRequirement::Admin)
            .await?;

        self.ctx
            .notification_repo()
            .soft_delete(notification.id)
            .await?;
        info!(notification_id = %notification_id, "Notification deleted");

        Ok(())
    }

    async fn find_notification(&self, id: Snowflake) -> ServiceResult<Notification> {
        self.ctx
            .notification_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Notification", id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    // Integration tests would go here with mocked dependencies
}
