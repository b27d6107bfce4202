//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Community not found: {0}")]
    CommunityNotFound(Snowflake),

    #[error("Member not found in community")]
    MemberNotFound,

    #[error("Round not found: {0}")]
    RoundNotFound(Snowflake),

    #[error("Goal not found: {0}")]
    GoalNotFound(Snowflake),

    #[error("Notification not found: {0}")]
    NotificationNotFound(Snowflake),

    #[error("Reaction not found: {0}")]
    ReactionNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Malformed pagination cursor")]
    InvalidCursor,

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Requires an active membership in this community")]
    NotCommunityMember,

    #[error("Requires the admin role in this community")]
    NotCommunityAdmin,

    #[error("Not the goal owner")]
    NotGoalOwner,

    #[error("Not the reaction author")]
    NotReactionAuthor,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Already an active member of this community")]
    AlreadyMember,

    #[error("Attendance already marked for this round")]
    AttendanceAlreadyMarked,

    #[error("Account already exists for this provider identity")]
    ProviderIdentityExists,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Cannot leave: last remaining admin of this community")]
    LastAdmin,

    #[error("Attendance window for this round is closed")]
    RoundClosed,

    #[error("Cannot demote the community owner")]
    CannotDemoteOwner,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::CommunityNotFound(_) => "UNKNOWN_COMMUNITY",
            Self::MemberNotFound => "UNKNOWN_MEMBER",
            Self::RoundNotFound(_) => "UNKNOWN_ROUND",
            Self::GoalNotFound(_) => "UNKNOWN_GOAL",
            Self::NotificationNotFound(_) => "UNKNOWN_NOTIFICATION",
            Self::ReactionNotFound(_) => "UNKNOWN_REACTION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidCursor => "INVALID_CURSOR",
            Self::InvalidRole(_) => "INVALID_ROLE",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Authorization
            Self::NotCommunityMember => "NOT_COMMUNITY_MEMBER",
            Self::NotCommunityAdmin => "NOT_COMMUNITY_ADMIN",
            Self::NotGoalOwner => "NOT_GOAL_OWNER",
            Self::NotReactionAuthor => "NOT_REACTION_AUTHOR",

            // Conflict
            Self::AlreadyMember => "ALREADY_MEMBER",
            Self::AttendanceAlreadyMarked => "ATTENDANCE_ALREADY_MARKED",
            Self::ProviderIdentityExists => "PROVIDER_IDENTITY_EXISTS",

            // Business Rules
            Self::LastAdmin => "LAST_ADMIN",
            Self::RoundClosed => "ROUND_CLOSED",
            Self::CannotDemoteOwner => "CANNOT_DEMOTE_OWNER",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::CommunityNotFound(_)
                | Self::MemberNotFound
                | Self::RoundNotFound(_)
                | Self::GoalNotFound(_)
                | Self::NotificationNotFound(_)
                | Self::ReactionNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidCursor
                | Self::InvalidRole(_)
                | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotCommunityMember
                | Self::NotCommunityAdmin
                | Self::NotGoalOwner
                | Self::NotReactionAuthor
        )
    }

    /// Check if this is a conflict error
    ///
    /// Business-rule blocks surface as conflicts too: the request was
    /// well-formed and authorized but collides with current state.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::AlreadyMember
                | Self::AttendanceAlreadyMarked
                | Self::ProviderIdentityExists
                | Self::LastAdmin
                | Self::RoundClosed
                | Self::CannotDemoteOwner
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::UserNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_USER");

        let err = DomainError::LastAdmin;
        assert_eq!(err.code(), "LAST_ADMIN");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::UserNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::CommunityNotFound(Snowflake::new(1)).is_not_found());
        assert!(!DomainError::AlreadyMember.is_not_found());
    }

    #[test]
    fn test_is_authorization() {
        assert!(DomainError::NotCommunityAdmin.is_authorization());
        assert!(DomainError::NotGoalOwner.is_authorization());
        assert!(!DomainError::UserNotFound(Snowflake::new(1)).is_authorization());
    }

    #[test]
    fn test_business_rules_are_conflicts() {
        assert!(DomainError::LastAdmin.is_conflict());
        assert!(DomainError::RoundClosed.is_conflict());
        assert!(DomainError::AttendanceAlreadyMarked.is_conflict());
        assert!(!DomainError::InvalidCursor.is_conflict());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::CommunityNotFound(Snowflake::new(123));
        assert_eq!(err.to_string(), "Community not found: 123");

        let err = DomainError::ContentTooLong { max: 500 };
        assert_eq!(err.to_string(), "Content too long: max 500 characters");
    }
}
