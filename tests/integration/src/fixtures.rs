//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests: seeded users with
//! real session tokens (no OAuth round trip), request payloads, and
//! envelope mirrors for deserializing API responses.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use club_core::entities::{OAuthProvider, User};
use serde::{Deserialize, Serialize};

use crate::helpers::TestServer;

/// A seeded user with a valid access token
pub struct TestUser {
    pub user: User,
    pub token: String,
}

/// Create a user row directly and issue a session token for it
///
/// Login normally goes through the OAuth provider; tests sidestep that
/// boundary by writing the user and signing the token themselves.
pub async fn seed_user(server: &TestServer, name_hint: &str) -> Result<TestUser> {
    let ctx = server.state.service_context();
    let id = ctx.generate_id();

    let user = User::new(
        id,
        format!("{name_hint}_{id}@example.com"),
        format!("{name_hint}_{id}"),
        OAuthProvider::Kakao,
        format!("kakao-{id}"),
    );
    ctx.user_repo()
        .create(&user)
        .await
        .map_err(|e| anyhow::anyhow!("seed user: {e}"))?;

    let tokens = ctx
        .session_service()
        .issue(user.id, &user.username, user.nickname.as_deref())
        .map_err(|e| anyhow::anyhow!("issue token: {e}"))?;

    Ok(TestUser {
        user,
        token: tokens.access_token,
    })
}

// ============================================================================
// Request payloads
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CreateCommunityPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_public: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl CreateCommunityPayload {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: Some("integration test community".to_string()),
            is_public: true,
            tags: vec![],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateRoundPayload {
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl CreateRoundPayload {
    /// A round whose attendance window is open right now
    pub fn open_now() -> Self {
        let now = Utc::now();
        Self {
            starts_at: now - Duration::minutes(5),
            ends_at: now + Duration::hours(2),
            location: Some("Hongdae study cafe".to_string()),
        }
    }

    /// A round that already ended
    pub fn already_over() -> Self {
        let now = Utc::now();
        Self {
            starts_at: now - Duration::hours(3),
            ends_at: now - Duration::hours(1),
            location: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MarkAttendancePayload {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct CreateGoalPayload {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateNotificationPayload {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateRolePayload {
    pub role: String,
}

// ============================================================================
// Response envelope mirrors
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct PageEnvelope<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub count: usize,
    pub pagination: PaginationData,
}

#[derive(Debug, Deserialize)]
pub struct PaginationData {
    pub next_cursor: Option<String>,
    pub prev_cursor: Option<String>,
    pub has_more: bool,
    pub has_previous: bool,
}

#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: ErrorData,
}

#[derive(Debug, Deserialize)]
pub struct ErrorData {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct CommunityData {
    pub id: String,
    pub name: String,
    pub is_public: bool,
    pub owner_id: String,
}

#[derive(Debug, Deserialize)]
pub struct MemberData {
    pub id: String,
    pub community_id: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct RoundData {
    pub id: String,
    pub community_id: String,
    pub sequence_no: i32,
}

#[derive(Debug, Deserialize)]
pub struct GoalData {
    pub id: String,
    pub title: String,
    pub is_team: bool,
    pub is_completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct AttendanceData {
    pub id: String,
    pub round_id: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct NotificationData {
    pub id: String,
    pub community_id: String,
    pub is_pinned: bool,
}
