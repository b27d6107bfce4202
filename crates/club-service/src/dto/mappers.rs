//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use club_core::entities::{
    Attendance, Community, CommunityMember, Notification, Reaction, Round, StudyGoal, User,
};

use super::responses::{
    AttendanceResponse, CommunityResponse, CurrentUserResponse, GoalResponse, MemberResponse,
    NotificationResponse, ReactionResponse, RoundResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            nickname: user.nickname.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            username: user.username.clone(),
            nickname: user.nickname.clone(),
            provider: user.provider.to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Community Mappers
// ============================================================================

impl From<&Community> for CommunityResponse {
    fn from(community: &Community) -> Self {
        Self {
            id: community.id.to_string(),
            name: community.name.clone(),
            description: community.description.clone(),
            is_public: community.is_public,
            region: community.region.clone(),
            sub_region: community.sub_region.clone(),
            tags: community.tags.clone(),
            image_url: community.image_url.clone(),
            owner_id: community.owner_id.to_string(),
            created_at: community.created_at,
            updated_at: community.updated_at,
        }
    }
}

impl From<Community> for CommunityResponse {
    fn from(community: Community) -> Self {
        Self::from(&community)
    }
}

// ============================================================================
// Member Mappers
// ============================================================================

/// Pair of membership and its user, mapped together
#[derive(Debug, Clone)]
pub struct MemberWithUser {
    pub member: CommunityMember,
    pub user: User,
}

impl From<MemberWithUser> for MemberResponse {
    fn from(value: MemberWithUser) -> Self {
        Self {
            id: value.member.id.to_string(),
            community_id: value.member.community_id.to_string(),
            role: value.member.role.to_string(),
            joined_at: value.member.joined_at,
            user: UserResponse::from(&value.user),
        }
    }
}

// ============================================================================
// Round Mappers
// ============================================================================

impl From<&Round> for RoundResponse {
    fn from(round: &Round) -> Self {
        Self {
            id: round.id.to_string(),
            community_id: round.community_id.to_string(),
            sequence_no: round.sequence_no,
            starts_at: round.starts_at,
            ends_at: round.ends_at,
            location: round.location.clone(),
            created_at: round.created_at,
        }
    }
}

impl From<Round> for RoundResponse {
    fn from(round: Round) -> Self {
        Self::from(&round)
    }
}

// ============================================================================
// Goal Mappers
// ============================================================================

impl From<&StudyGoal> for GoalResponse {
    fn from(goal: &StudyGoal) -> Self {
        Self {
            id: goal.id.to_string(),
            owner_id: goal.owner_id.to_string(),
            community_id: goal.community_id.map(|id| id.to_string()),
            round_id: goal.round_id.map(|id| id.to_string()),
            title: goal.title.clone(),
            description: goal.description.clone(),
            is_team: goal.is_team,
            is_completed: goal.is_completed,
            start_date: goal.start_date,
            end_date: goal.end_date,
            created_at: goal.created_at,
            updated_at: goal.updated_at,
        }
    }
}

impl From<StudyGoal> for GoalResponse {
    fn from(goal: StudyGoal) -> Self {
        Self::from(&goal)
    }
}

// ============================================================================
// Attendance Mappers
// ============================================================================

impl From<&Attendance> for AttendanceResponse {
    fn from(attendance: &Attendance) -> Self {
        Self {
            id: attendance.id.to_string(),
            round_id: attendance.round_id.to_string(),
            user_id: attendance.user_id.to_string(),
            status: attendance.status.to_string(),
            marked_at: attendance.marked_at,
        }
    }
}

impl From<Attendance> for AttendanceResponse {
    fn from(attendance: Attendance) -> Self {
        Self::from(&attendance)
    }
}

// ============================================================================
// Notification Mappers
// ============================================================================

impl From<&Notification> for NotificationResponse {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            community_id: notification.community_id.to_string(),
            author_id: notification.author_id.to_string(),
            title: notification.title.clone(),
            content: notification.content.clone(),
            is_pinned: notification.is_pinned,
            created_at: notification.created_at,
            updated_at: notification.updated_at,
        }
    }
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self::from(&notification)
    }
}

// ============================================================================
// Reaction Mappers
// ============================================================================

impl From<&Reaction> for ReactionResponse {
    fn from(reaction: &Reaction) -> Self {
        Self {
            id: reaction.id.to_string(),
            user_id: reaction.user_id.to_string(),
            member_id: reaction.member_id.to_string(),
            text: reaction.text.clone(),
            created_at: reaction.created_at,
        }
    }
}

impl From<Reaction> for ReactionResponse {
    fn from(reaction: Reaction) -> Self {
        Self::from(&reaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use club_core::entities::{MemberRole, OAuthProvider};
    use club_core::Snowflake;

    #[test]
    fn test_user_response_hides_email() {
        let user = User::new(
            Snowflake::new(1),
            "secret@example.com".to_string(),
            "jiyoon".to_string(),
            OAuthProvider::Kakao,
            "k-1".to_string(),
        );
        let response = UserResponse::from(&user);
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("secret@example.com"));
    }

    #[test]
    fn test_member_with_user_mapping() {
        let user = User::new(
            Snowflake::new(2),
            "a@example.com".to_string(),
            "mina".to_string(),
            OAuthProvider::Kakao,
            "k-2".to_string(),
        );
        let member = CommunityMember::new(
            Snowflake::new(10),
            Snowflake::new(20),
            user.id,
            MemberRole::Admin,
        );
        let response = MemberResponse::from(MemberWithUser { member, user });
        assert_eq!(response.role, "admin");
        assert_eq!(response.user.username, "mina");
    }
}
