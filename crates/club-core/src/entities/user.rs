//! User entity - a person authenticated through a social OAuth provider

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Social OAuth provider the account is keyed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    Kakao,
    Google,
}

impl OAuthProvider {
    /// Stable string form stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kakao => "kakao",
            Self::Google => "google",
        }
    }

    /// Parse from the stored string form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "kakao" => Some(Self::Kakao),
            "google" => Some(Self::Google),
            _ => None,
        }
    }
}

impl std::fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity, unique per (provider, provider_id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub email: String,
    pub username: String,
    pub nickname: Option<String>,
    pub provider: OAuthProvider,
    pub provider_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new User from a social profile
    pub fn new(
        id: Snowflake,
        email: String,
        username: String,
        provider: OAuthProvider,
        provider_id: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            username,
            nickname: None,
            provider,
            provider_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Check if the account has not been soft-deleted
    #[inline]
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// Display name: nickname when set, username otherwise
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.username)
    }

    /// Update the username
    pub fn set_username(&mut self, username: String) {
        self.username = username;
        self.updated_at = Utc::now();
    }

    /// Update the nickname (None clears it)
    pub fn set_nickname(&mut self, nickname: Option<String>) {
        self.nickname = nickname;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            Snowflake::new(1),
            "jiyoon@example.com".to_string(),
            "jiyoon".to_string(),
            OAuthProvider::Kakao,
            "kakao-9182".to_string(),
        )
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let mut user = sample_user();
        assert_eq!(user.display_name(), "jiyoon");

        user.set_nickname(Some("지윤".to_string()));
        assert_eq!(user.display_name(), "지윤");

        user.set_nickname(None);
        assert_eq!(user.display_name(), "jiyoon");
    }

    #[test]
    fn test_new_user_is_active() {
        let mut user = sample_user();
        assert!(user.is_active());

        user.deleted_at = Some(Utc::now());
        assert!(!user.is_active());
    }

    #[test]
    fn test_provider_round_trip() {
        for provider in [OAuthProvider::Kakao, OAuthProvider::Google] {
            assert_eq!(OAuthProvider::parse(provider.as_str()), Some(provider));
        }
        assert_eq!(OAuthProvider::parse("github"), None);
    }
}
