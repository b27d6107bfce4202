//! # club-service
//!
//! Application layer containing business logic and use cases. Services
//! receive a [`ServiceContext`] with all repositories and boundary
//! collaborators; every mutating operation runs the same capability check
//! through [`AccessService`] before touching data.

pub mod dto;
pub mod services;

// Re-export commonly used types
pub use dto::{
    AttendanceResponse, AuthResponse, CommunityResponse, CommunityWithCountsResponse,
    CreateCommunityRequest, CreateGoalRequest, CreateNotificationRequest, CreateReactionRequest,
    CreateRoundRequest, CurrentUserResponse, GoalResponse, HealthResponse, LoginRequest,
    MarkAttendanceRequest, MemberResponse, NotificationResponse, PageMeta, ReactionResponse,
    ReadinessResponse, RefreshTokenRequest, RoundResponse, UpdateCommunityRequest,
    UpdateGoalRequest, UpdateMemberRoleRequest, UpdateNotificationRequest, UpdateRoundRequest,
    UpdateUserRequest, UserResponse,
};
pub use services::{
    AccessService, AttendanceService, AuthService, CommunityService, GoalService, MemberService,
    NotificationService, ReactionService, RoleRequirement, RoundService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
