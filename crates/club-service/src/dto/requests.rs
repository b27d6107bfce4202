//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; those carrying user input also
//! implement `Validate` and are extracted through `ValidatedJson`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// OAuth login request: the authorization code from the provider redirect
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Authorization code must not be empty"))]
    pub code: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update current user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: Option<String>,

    /// Nickname, or null to clear it
    #[validate(length(max = 32, message = "Nickname must be at most 32 characters"))]
    pub nickname: Option<String>,
}

// ============================================================================
// Community Requests
// ============================================================================

/// Create community request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommunityRequest {
    #[validate(length(min = 1, max = 100, message = "Community name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    /// Whether the community shows up in public browse/search (defaults to true)
    #[serde(default = "default_true")]
    pub is_public: bool,

    pub region: Option<String>,
    pub sub_region: Option<String>,

    #[serde(default)]
    #[validate(length(max = 10, message = "At most 10 tags"))]
    pub tags: Vec<String>,

    pub image_url: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Update community request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommunityRequest {
    #[validate(length(min = 1, max = 100, message = "Community name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    pub is_public: Option<bool>,
    pub region: Option<String>,
    pub sub_region: Option<String>,

    #[validate(length(max = 10, message = "At most 10 tags"))]
    pub tags: Option<Vec<String>>,

    pub image_url: Option<String>,
}

// ============================================================================
// Member Requests
// ============================================================================

/// Change a member's role (admin-gated)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMemberRoleRequest {
    /// "member" or "admin"
    #[validate(length(min = 1, message = "Role must not be empty"))]
    pub role: String,
}

// ============================================================================
// Round Requests
// ============================================================================

/// Create round request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoundRequest {
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,

    #[validate(length(max = 200, message = "Location must be at most 200 characters"))]
    pub location: Option<String>,
}

/// Update round request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRoundRequest {
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,

    #[validate(length(max = 200, message = "Location must be at most 200 characters"))]
    pub location: Option<String>,
}

// ============================================================================
// Goal Requests
// ============================================================================

/// Create goal request (personal, or team when community_id is set)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGoalRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    /// Target community for a team goal (Snowflake as string)
    pub community_id: Option<String>,

    /// Target round inside the community (Snowflake as string)
    pub round_id: Option<String>,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Update goal request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateGoalRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

// ============================================================================
// Attendance Requests
// ============================================================================

/// Mark attendance for the current user at a round
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MarkAttendanceRequest {
    /// "present", "absent", "late", or "excused"
    #[validate(length(min = 1, message = "Status must not be empty"))]
    pub status: String,
}

// ============================================================================
// Notification Requests
// ============================================================================

/// Create notification request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNotificationRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 4000, message = "Content must be 1-4000 characters"))]
    pub content: String,
}

/// Update notification request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateNotificationRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 4000, message = "Content must be 1-4000 characters"))]
    pub content: Option<String>,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Leave a reaction on a community member
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReactionRequest {
    #[validate(length(min = 1, max = 200, message = "Reaction text must be 1-200 characters"))]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_create_community_defaults_public() {
        let raw = r#"{"name": "Morning Algorithms"}"#;
        let req: CreateCommunityRequest = serde_json::from_str(raw).unwrap();
        assert!(req.is_public);
        assert!(req.tags.is_empty());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_community_rejects_empty_name() {
        let req = CreateCommunityRequest {
            name: String::new(),
            description: None,
            is_public: true,
            region: None,
            sub_region: None,
            tags: vec![],
            image_url: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_login_request_rejects_empty_code() {
        let req = LoginRequest { code: String::new() };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_reaction_text_length_bounds() {
        let req = CreateReactionRequest {
            text: "x".repeat(201),
        };
        assert!(req.validate().is_err());

        let req = CreateReactionRequest {
            text: "응원해요".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
