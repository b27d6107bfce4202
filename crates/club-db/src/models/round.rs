//! Round database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use club_core::entities::Round;
use club_core::value_objects::Snowflake;

/// Database model for the rounds table
#[derive(Debug, Clone, FromRow)]
pub struct RoundModel {
    pub id: i64,
    pub community_id: i64,
    pub sequence_no: i32,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<RoundModel> for Round {
    fn from(model: RoundModel) -> Self {
        Round {
            id: Snowflake::new(model.id),
            community_id: Snowflake::new(model.community_id),
            sequence_no: model.sequence_no,
            starts_at: model.starts_at,
            ends_at: model.ends_at,
            location: model.location,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}
