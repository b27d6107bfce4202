//! CommunityMember database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use club_core::entities::{CommunityMember, MemberRole};
use club_core::error::DomainError;
use club_core::value_objects::Snowflake;

/// Database model for the community_members table
#[derive(Debug, Clone, FromRow)]
pub struct CommunityMemberModel {
    pub id: i64,
    pub community_id: i64,
    pub user_id: i64,
    pub role: String,
    pub joined_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl CommunityMemberModel {
    /// Convert to the domain entity
    pub fn into_entity(self) -> Result<CommunityMember, DomainError> {
        let role = MemberRole::parse(&self.role).ok_or_else(|| {
            DomainError::InternalError(format!("unknown member role: {}", self.role))
        })?;

        Ok(CommunityMember {
            id: Snowflake::new(self.id),
            community_id: Snowflake::new(self.community_id),
            user_id: Snowflake::new(self.user_id),
            role,
            joined_at: self.joined_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        })
    }
}
