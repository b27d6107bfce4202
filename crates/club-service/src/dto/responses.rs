//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, NaiveDate, Utc};
use club_core::value_objects::Page;
use serde::Serialize;

// ============================================================================
// Pagination metadata
// ============================================================================

/// Cursor pagination metadata attached to list responses
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    /// Cursor continuing forward from the last item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    /// Cursor continuing backward from the first item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_cursor: Option<String>,
    /// Whether the query found more rows than the requested limit
    pub has_more: bool,
    /// Whether rows exist before this page
    pub has_previous: bool,
}

impl PageMeta {
    /// Extract metadata from an assembled page
    pub fn of<T>(page: &Page<T>) -> Self {
        Self {
            next_cursor: page.next_cursor.map(|c| c.encode()),
            prev_cursor: page.prev_cursor.map(|c| c.encode()),
            has_more: page.has_more,
            has_previous: page.has_previous,
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with session tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(tokens: club_common::TokenPair, user: CurrentUserResponse) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: tokens.token_type,
            expires_in: tokens.expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Public user response (limited fields)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Current authenticated user response (includes email and provider)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    pub provider: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Community Responses
// ============================================================================

/// Community response
#[derive(Debug, Clone, Serialize)]
pub struct CommunityResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_public: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_region: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Community response with aggregate counts
#[derive(Debug, Clone, Serialize)]
pub struct CommunityWithCountsResponse {
    #[serde(flatten)]
    pub community: CommunityResponse,
    pub member_count: i64,
}

// ============================================================================
// Member Responses
// ============================================================================

/// Membership response with the member's public user info
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub id: String,
    pub community_id: String,
    pub role: String,
    pub joined_at: DateTime<Utc>,
    pub user: UserResponse,
}

// ============================================================================
// Round Responses
// ============================================================================

/// Round response
#[derive(Debug, Clone, Serialize)]
pub struct RoundResponse {
    pub id: String,
    pub community_id: String,
    pub sequence_no: i32,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Goal Responses
// ============================================================================

/// Study goal response
#[derive(Debug, Clone, Serialize)]
pub struct GoalResponse {
    pub id: String,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_id: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_team: bool,
    pub is_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Attendance Responses
// ============================================================================

/// Attendance record response
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceResponse {
    pub id: String,
    pub round_id: String,
    pub user_id: String,
    pub status: String,
    pub marked_at: DateTime<Utc>,
}

// ============================================================================
// Notification Responses
// ============================================================================

/// Notification response
#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: String,
    pub community_id: String,
    pub author_id: String,
    pub title: String,
    pub content: String,
    pub is_pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// Reaction response
#[derive(Debug, Clone, Serialize)]
pub struct ReactionResponse {
    pub id: String,
    pub user_id: String,
    pub member_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use club_core::value_objects::{Cursor, Snowflake};

    #[test]
    fn test_auth_response_serialization() {
        let user = CurrentUserResponse {
            id: "123456789".to_string(),
            email: "test@example.com".to_string(),
            username: "testuser".to_string(),
            nickname: None,
            provider: "kakao".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let auth = AuthResponse::new(
            club_common::TokenPair {
                access_token: "access_token_here".to_string(),
                refresh_token: "refresh_token_here".to_string(),
                token_type: "Bearer".to_string(),
                expires_in: 900,
            },
            user,
        );

        let json = serde_json::to_string(&auth).unwrap();
        assert!(json.contains("\"token_type\":\"Bearer\""));
        assert!(json.contains("\"expires_in\":900"));
    }

    #[test]
    fn test_page_meta_encodes_cursors() {
        let page = Page {
            items: vec![1, 2, 3],
            next_cursor: Some(Cursor::new(Utc::now(), Snowflake::new(3))),
            prev_cursor: None,
            has_more: true,
            has_previous: false,
        };
        let meta = PageMeta::of(&page);
        assert!(meta.next_cursor.is_some());
        assert!(meta.prev_cursor.is_none());
        assert!(meta.has_more);
    }

    #[test]
    fn test_readiness_status() {
        let ready = ReadinessResponse::ready(true);
        assert_eq!(ready.status, "ready");
        assert_eq!(ready.checks.database, "healthy");

        let not_ready = ReadinessResponse::ready(false);
        assert_eq!(not_ready.status, "not_ready");
    }
}
