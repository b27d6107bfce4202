//! StudyGoal database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use club_core::entities::StudyGoal;
use club_core::value_objects::Snowflake;

/// Database model for the study_goals table
#[derive(Debug, Clone, FromRow)]
pub struct StudyGoalModel {
    pub id: i64,
    pub owner_id: i64,
    pub community_id: Option<i64>,
    pub round_id: Option<i64>,
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

impl From<StudyGoalModel> for StudyGoal {
    fn from(model: StudyGoalModel) -> Self {
        StudyGoal {
            id: Snowflake::new(model.id),
            owner_id: Snowflake::new(model.owner_id),
            community_id: model.community_id.map(Snowflake::new),
            round_id: model.round_id.map(Snowflake::new),
            title: model.title,
            description: model.description,
            is_team: model.is_team,
            is_completed: model.is_completed,
            start_date: model.start_date,
            end_date: model.end_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}
