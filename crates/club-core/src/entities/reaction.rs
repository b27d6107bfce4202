//! Reaction entity - a short message left on a community member's presence

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Reaction entity, attached to a CommunityMember (not a message)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub member_id: Snowflake,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(id: Snowflake, user_id: Snowflake, member_id: Snowflake, text: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            member_id,
            text,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Check if the reaction has not been soft-deleted
    #[inline]
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// Check if a user authored the reaction
    #[inline]
    pub fn is_author(&self, user_id: Snowflake) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaction_creation() {
        let reaction = Reaction::new(
            Snowflake::new(1),
            Snowflake::new(100),
            Snowflake::new(50),
            "화이팅!".to_string(),
        );
        assert_eq!(reaction.member_id, Snowflake::new(50));
        assert!(reaction.is_author(Snowflake::new(100)));
        assert!(!reaction.is_author(Snowflake::new(200)));
        assert!(reaction.is_active());
    }
}
