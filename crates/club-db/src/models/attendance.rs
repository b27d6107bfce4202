//! Attendance database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use club_core::entities::{Attendance, AttendanceStatus};
use club_core::error::DomainError;
use club_core::value_objects::Snowflake;

/// Database model for the attendances table
#[derive(Debug, Clone, FromRow)]
pub struct AttendanceModel {
    pub id: i64,
    pub round_id: i64,
    pub user_id: i64,
    pub status: String,
    pub marked_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl AttendanceModel {
    /// Convert to the domain entity
    pub fn into_entity(self) -> Result<Attendance, DomainError> {
        let status = AttendanceStatus::parse(&self.status).ok_or_else(|| {
            DomainError::InternalError(format!("unknown attendance status: {}", self.status))
        })?;

        Ok(Attendance {
            id: Snowflake::new(self.id),
            round_id: Snowflake::new(self.round_id),
            user_id: Snowflake::new(self.user_id),
            status,
            marked_at: self.marked_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        })
    }
}
