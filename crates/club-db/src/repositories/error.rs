//! Error handling utilities for repositories

use club_core::error::DomainError;
use club_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: Snowflake) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "community not found" error
pub fn community_not_found(id: Snowflake) -> DomainError {
    DomainError::CommunityNotFound(id)
}

/// Create a "member not found" error
pub fn member_not_found() -> DomainError {
    DomainError::MemberNotFound
}

/// Create a "round not found" error
pub fn round_not_found(id: Snowflake) -> DomainError {
    DomainError::RoundNotFound(id)
}

/// Create a "goal not found" error
pub fn goal_not_found(id: Snowflake) -> DomainError {
    DomainError::GoalNotFound(id)
}

/// Create a "notification not found" error
pub fn notification_not_found(id: Snowflake) -> DomainError {
    DomainError::NotificationNotFound(id)
}

/// Create a "reaction not found" error
pub fn reaction_not_found(id: Snowflake) -> DomainError {
    DomainError::ReactionNotFound(id)
}
