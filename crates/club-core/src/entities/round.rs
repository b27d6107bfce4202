//! Round entity - a scheduled meeting occurrence of a community

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Round entity with an attendance window of [starts_at, ends_at]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub id: Snowflake,
    pub community_id: Snowflake,
    pub sequence_no: i32,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Round {
    /// Create a new Round
    pub fn new(
        id: Snowflake,
        community_id: Snowflake,
        sequence_no: i32,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            community_id,
            sequence_no,
            starts_at,
            ends_at,
            location: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Check if the round has not been soft-deleted
    #[inline]
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// Whether attendance may be marked at instant `t`
    #[inline]
    pub fn is_open_at(&self, t: DateTime<Utc>) -> bool {
        t >= self.starts_at && t <= self.ends_at
    }

    /// Whether the round window has already passed at instant `t`
    #[inline]
    pub fn is_over_at(&self, t: DateTime<Utc>) -> bool {
        t > self.ends_at
    }

    /// Reschedule the round
    pub fn set_window(&mut self, starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) {
        self.starts_at = starts_at;
        self.ends_at = ends_at;
        self.updated_at = Utc::now();
    }

    /// Update the location
    pub fn set_location(&mut self, location: Option<String>) {
        self.location = location;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_round(starts_in: i64, lasts: i64) -> Round {
        let start = Utc::now() + Duration::minutes(starts_in);
        Round::new(
            Snowflake::new(1),
            Snowflake::new(10),
            3,
            start,
            start + Duration::minutes(lasts),
        )
    }

    #[test]
    fn test_window_boundaries_are_inclusive() {
        let round = sample_round(0, 60);
        assert!(round.is_open_at(round.starts_at));
        assert!(round.is_open_at(round.ends_at));
        assert!(!round.is_open_at(round.starts_at - Duration::seconds(1)));
        assert!(!round.is_open_at(round.ends_at + Duration::seconds(1)));
    }

    #[test]
    fn test_not_open_before_start() {
        let round = sample_round(30, 60);
        assert!(!round.is_open_at(Utc::now()));
        assert!(!round.is_over_at(Utc::now()));
    }

    #[test]
    fn test_over_after_end() {
        let round = sample_round(-120, 60);
        assert!(round.is_over_at(Utc::now()));
        assert!(!round.is_open_at(Utc::now()));
    }

    #[test]
    fn test_set_window() {
        let mut round = sample_round(0, 60);
        let new_start = Utc::now() + Duration::days(1);
        round.set_window(new_start, new_start + Duration::hours(2));
        assert!(round.is_open_at(new_start + Duration::hours(1)));
    }
}
