//! Data transfer objects for the API surface

mod mappers;
mod requests;
mod responses;

pub use mappers::MemberWithUser;
pub use requests::{
    CreateCommunityRequest, CreateGoalRequest, CreateNotificationRequest, CreateReactionRequest,
    CreateRoundRequest, LoginRequest, MarkAttendanceRequest, RefreshTokenRequest,
    UpdateCommunityRequest, UpdateGoalRequest, UpdateMemberRoleRequest, UpdateNotificationRequest,
    UpdateRoundRequest, UpdateUserRequest,
};
pub use responses::{
    AttendanceResponse, AuthResponse, CommunityResponse, CommunityWithCountsResponse,
    CurrentUserResponse, GoalResponse, HealthResponse, MemberResponse, NotificationResponse,
    PageMeta, ReactionResponse, ReadinessResponse, RoundResponse, UserResponse,
};
