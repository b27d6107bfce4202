//! Community database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use club_core::entities::Community;
use club_core::value_objects::Snowflake;

/// Database model for the communities table
#[derive(Debug, Clone, FromRow)]
pub struct CommunityModel {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub region: Option<String>,
    pub sub_region: Option<String>,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<CommunityModel> for Community {
    fn from(model: CommunityModel) -> Self {
        Community {
            id: Snowflake::new(model.id),
            name: model.name,
            description: model.description,
            is_public: model.is_public,
            region: model.region,
            sub_region: model.sub_region,
            tags: model.tags,
            image_url: model.image_url,
            owner_id: Snowflake::new(model.owner_id),
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}
