//! Notification entity - a community announcement, at most one pinned per community

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Community notification entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Snowflake,
    pub community_id: Snowflake,
    pub author_id: Snowflake,
    pub title: String,
    pub content: String,
    pub is_pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Notification {
    /// Create a new unpinned notification
    pub fn new(
        id: Snowflake,
        community_id: Snowflake,
        author_id: Snowflake,
        title: String,
        content: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            community_id,
            author_id,
            title,
            content,
            is_pinned: false,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Check if the notification has not been soft-deleted
    #[inline]
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// Check if a user authored the notification
    #[inline]
    pub fn is_author(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }

    /// Update title and body
    pub fn set_content(&mut self, title: String, content: String) {
        self.title = title;
        self.content = content;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notification_is_unpinned() {
        let n = Notification::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Snowflake::new(100),
            "Week 3 schedule".to_string(),
            "We meet Saturday 10am.".to_string(),
        );
        assert!(!n.is_pinned);
        assert!(n.is_active());
        assert!(n.is_author(Snowflake::new(100)));
    }

    #[test]
    fn test_set_content() {
        let mut n = Notification::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Snowflake::new(100),
            "a".to_string(),
            "b".to_string(),
        );
        n.set_content("Updated".to_string(), "New body".to_string());
        assert_eq!(n.title, "Updated");
        assert_eq!(n.content, "New body");
    }
}
