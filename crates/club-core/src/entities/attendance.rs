//! Attendance entity - one per (round, user), created inside the round window

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Attendance status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Excused,
}

impl AttendanceStatus {
    /// Stable string form stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Late => "late",
            Self::Excused => "excused",
        }
    }

    /// Parse from the stored string form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "present" => Some(Self::Present),
            "absent" => Some(Self::Absent),
            "late" => Some(Self::Late),
            "excused" => Some(Self::Excused),
            _ => None,
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attendance record for a user at a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendance {
    pub id: Snowflake,
    pub round_id: Snowflake,
    pub user_id: Snowflake,
    pub status: AttendanceStatus,
    pub marked_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Attendance {
    /// Create a new attendance record marked now
    pub fn new(
        id: Snowflake,
        round_id: Snowflake,
        user_id: Snowflake,
        status: AttendanceStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            round_id,
            user_id,
            status,
            marked_at: now,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Check if the record has not been soft-deleted
    #[inline]
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// Whether the record counts toward presence (present or late)
    #[inline]
    pub fn counts_as_present(&self) -> bool {
        matches!(self.status, AttendanceStatus::Present | AttendanceStatus::Late)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Late,
            AttendanceStatus::Excused,
        ] {
            assert_eq!(AttendanceStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(AttendanceStatus::parse("ghost"), None);
    }

    #[test]
    fn test_counts_as_present() {
        let mut record = Attendance::new(
            Snowflake::new(1),
            Snowflake::new(2),
            Snowflake::new(3),
            AttendanceStatus::Present,
        );
        assert!(record.counts_as_present());

        record.status = AttendanceStatus::Late;
        assert!(record.counts_as_present());

        record.status = AttendanceStatus::Absent;
        assert!(!record.counts_as_present());
    }
}
