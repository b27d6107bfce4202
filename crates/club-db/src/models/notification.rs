//! Notification database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use club_core::entities::Notification;
use club_core::value_objects::Snowflake;

/// Database model for the notifications table
#[derive(Debug, Clone, FromRow)]
pub struct NotificationModel {
    pub id: i64,
    pub community_id: i64,
    pub author_id: i64,
    pub title: String,
    pub content: String,
    pub is_pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<NotificationModel> for Notification {
    fn from(model: NotificationModel) -> Self {
        Notification {
            id: Snowflake::new(model.id),
            community_id: Snowflake::new(model.community_id),
            author_id: Snowflake::new(model.author_id),
            title: model.title,
            content: model.content,
            is_pinned: model.is_pinned,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}
