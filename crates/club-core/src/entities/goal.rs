//! StudyGoal entity - a personal or team goal, optionally scoped to a community/round

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::Snowflake;

/// Study goal entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyGoal {
    pub id: Snowflake,
    pub owner_id: Snowflake,
    pub community_id: Option<Snowflake>,
    pub round_id: Option<Snowflake>,
    pub title: String,
    pub description: Option<String>,
    pub is_team: bool,
    pub is_completed: bool,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl StudyGoal {
    /// Create a new personal goal
    pub fn personal(id: Snowflake, owner_id: Snowflake, title: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            owner_id,
            community_id: None,
            round_id: None,
            title,
            description: None,
            is_team: false,
            is_completed: false,
            start_date: None,
            end_date: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Create a new team goal scoped to a community (and optionally a round)
    pub fn team(
        id: Snowflake,
        owner_id: Snowflake,
        community_id: Snowflake,
        round_id: Option<Snowflake>,
        title: String,
    ) -> Self {
        let mut goal = Self::personal(id, owner_id, title);
        goal.community_id = Some(community_id);
        goal.round_id = round_id;
        goal.is_team = true;
        goal
    }

    /// Check if the goal has not been soft-deleted
    #[inline]
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// Check if a user owns the goal
    #[inline]
    pub fn is_owner(&self, user_id: Snowflake) -> bool {
        self.owner_id == user_id
    }

    /// Toggle completion, returning the new state
    pub fn toggle_completed(&mut self) -> bool {
        self.is_completed = !self.is_completed;
        self.updated_at = Utc::now();
        self.is_completed
    }

    /// Update the title
    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    /// Update the date range
    pub fn set_dates(&mut self, start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) {
        self.start_date = start_date;
        self.end_date = end_date;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personal_goal() {
        let goal = StudyGoal::personal(
            Snowflake::new(1),
            Snowflake::new(100),
            "Finish chapter 4".to_string(),
        );
        assert!(!goal.is_team);
        assert!(goal.community_id.is_none());
        assert!(goal.is_owner(Snowflake::new(100)));
    }

    #[test]
    fn test_team_goal_is_scoped() {
        let goal = StudyGoal::team(
            Snowflake::new(1),
            Snowflake::new(100),
            Snowflake::new(10),
            Some(Snowflake::new(20)),
            "Mock interview week".to_string(),
        );
        assert!(goal.is_team);
        assert_eq!(goal.community_id, Some(Snowflake::new(10)));
        assert_eq!(goal.round_id, Some(Snowflake::new(20)));
    }

    #[test]
    fn test_toggle_completed() {
        let mut goal =
            StudyGoal::personal(Snowflake::new(1), Snowflake::new(1), "x".to_string());
        assert!(!goal.is_completed);
        assert!(goal.toggle_completed());
        assert!(!goal.toggle_completed());
    }
}
