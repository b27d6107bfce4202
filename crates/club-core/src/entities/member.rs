//! CommunityMember entity - a user's membership in a community

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Membership role, ordered by authority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Member,
    Admin,
    Owner,
}

impl MemberRole {
    /// Stable string form stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Admin => "admin",
            Self::Owner => "owner",
        }
    }

    /// Parse from the stored string form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "member" => Some(Self::Member),
            "admin" => Some(Self::Admin),
            "owner" => Some(Self::Owner),
            _ => None,
        }
    }

    /// Whether this role carries admin authority (owner included)
    #[inline]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin | Self::Owner)
    }
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Community membership entity (junction between User and Community)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityMember {
    pub id: Snowflake,
    pub community_id: Snowflake,
    pub user_id: Snowflake,
    pub role: MemberRole,
    pub joined_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl CommunityMember {
    /// Create a new membership with the given role
    pub fn new(id: Snowflake, community_id: Snowflake, user_id: Snowflake, role: MemberRole) -> Self {
        let now = Utc::now();
        Self {
            id,
            community_id,
            user_id,
            role,
            joined_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Check if the membership has not been soft-deleted
    #[inline]
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// Whether this member may perform admin-gated operations
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Change the member's role
    pub fn set_role(&mut self, role: MemberRole) {
        self.role = role;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_ordering() {
        assert!(MemberRole::Member < MemberRole::Admin);
        assert!(MemberRole::Admin < MemberRole::Owner);
    }

    #[test]
    fn test_role_admin_authority() {
        assert!(!MemberRole::Member.is_admin());
        assert!(MemberRole::Admin.is_admin());
        assert!(MemberRole::Owner.is_admin());
    }

    #[test]
    fn test_role_round_trip() {
        for role in [MemberRole::Member, MemberRole::Admin, MemberRole::Owner] {
            assert_eq!(MemberRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(MemberRole::parse("moderator"), None);
    }

    #[test]
    fn test_member_creation() {
        let member = CommunityMember::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Snowflake::new(100),
            MemberRole::Member,
        );
        assert!(member.is_active());
        assert!(!member.is_admin());
    }

    #[test]
    fn test_set_role() {
        let mut member = CommunityMember::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Snowflake::new(100),
            MemberRole::Member,
        );
        member.set_role(MemberRole::Admin);
        assert!(member.is_admin());
    }
}
