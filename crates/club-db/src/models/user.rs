//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use club_core::entities::{OAuthProvider, User};
use club_core::error::DomainError;
use club_core::value_objects::Snowflake;

/// Database model for the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub nickname: Option<String>,
    pub provider: String,
    pub provider_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl UserModel {
    /// Convert to the domain entity
    pub fn into_entity(self) -> Result<User, DomainError> {
        let provider = OAuthProvider::parse(&self.provider).ok_or_else(|| {
            DomainError::InternalError(format!("unknown oauth provider: {}", self.provider))
        })?;

        Ok(User {
            id: Snowflake::new(self.id),
            email: self.email,
            username: self.username,
            nickname: self.nickname,
            provider,
            provider_id: self.provider_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        })
    }
}
