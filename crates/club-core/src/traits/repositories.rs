//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every read returns active rows only;
//! deletion is always a soft delete (the row survives with `deleted_at`
//! set, and subsequent reads treat it as absent).

use async_trait::async_trait;

use crate::entities::{
    Attendance, Community, CommunityMember, MemberRole, Notification, OAuthProvider, Reaction,
    Round, StudyGoal, User,
};
use crate::error::DomainError;
use crate::value_objects::{Page, PageRequest, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find active user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find active user by provider identity
    async fn find_by_provider(
        &self,
        provider: OAuthProvider,
        provider_id: &str,
    ) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;

    /// Update profile fields (username, nickname)
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Soft delete a user
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Community Repository
// ============================================================================

/// Filters for browsing/searching public communities
#[derive(Debug, Clone, Default)]
pub struct CommunityQuery {
    /// Case-insensitive substring match on the name
    pub name: Option<String>,
    pub region: Option<String>,
    pub sub_region: Option<String>,
    /// Community must carry this tag
    pub tag: Option<String>,
}

#[async_trait]
pub trait CommunityRepository: Send + Sync {
    /// Find active community by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Community>>;

    /// Browse/search active public communities, cursor-paginated
    async fn search(&self, query: &CommunityQuery, page: &PageRequest)
        -> RepoResult<Page<Community>>;

    /// List active communities a user belongs to
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Community>>;

    /// Create a new community
    async fn create(&self, community: &Community) -> RepoResult<()>;

    /// Update an existing community
    async fn update(&self, community: &Community) -> RepoResult<()>;

    /// Soft delete a community
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Count active members of a community
    async fn member_count(&self, community_id: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find active membership by its own ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<CommunityMember>>;

    /// Find a user's active membership in a community
    async fn find(
        &self,
        community_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<CommunityMember>>;

    /// List active members of a community, cursor-paginated by join order
    async fn list(
        &self,
        community_id: Snowflake,
        page: &PageRequest,
    ) -> RepoResult<Page<CommunityMember>>;

    /// Check if a user has an active membership
    async fn is_member(&self, community_id: Snowflake, user_id: Snowflake) -> RepoResult<bool>;

    /// Count active memberships with admin authority (admin or owner role)
    async fn count_admins(&self, community_id: Snowflake) -> RepoResult<i64>;

    /// Create a membership; fails with `AlreadyMember` on a duplicate active row
    async fn create(&self, member: &CommunityMember) -> RepoResult<()>;

    /// Change a membership's role
    async fn update_role(&self, id: Snowflake, role: MemberRole) -> RepoResult<()>;

    /// Soft delete a membership (leave / kick)
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Round Repository
// ============================================================================

#[async_trait]
pub trait RoundRepository: Send + Sync {
    /// Find active round by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Round>>;

    /// List active rounds of a community, cursor-paginated
    async fn list(&self, community_id: Snowflake, page: &PageRequest) -> RepoResult<Page<Round>>;

    /// Next sequence number for a community (max over active rounds + 1)
    async fn next_sequence_no(&self, community_id: Snowflake) -> RepoResult<i32>;

    /// Create a new round
    async fn create(&self, round: &Round) -> RepoResult<()>;

    /// Update an existing round
    async fn update(&self, round: &Round) -> RepoResult<()>;

    /// Soft delete a round
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Goal Repository
// ============================================================================

#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Find active goal by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<StudyGoal>>;

    /// List a user's active goals, cursor-paginated
    async fn list_by_owner(
        &self,
        owner_id: Snowflake,
        page: &PageRequest,
    ) -> RepoResult<Page<StudyGoal>>;

    /// List a community's active team goals, cursor-paginated
    async fn list_by_community(
        &self,
        community_id: Snowflake,
        page: &PageRequest,
    ) -> RepoResult<Page<StudyGoal>>;

    /// Create a new goal
    async fn create(&self, goal: &StudyGoal) -> RepoResult<()>;

    /// Update an existing goal
    async fn update(&self, goal: &StudyGoal) -> RepoResult<()>;

    /// Soft delete a goal
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Attendance Repository
// ============================================================================

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Find a user's active attendance record for a round
    async fn find(&self, round_id: Snowflake, user_id: Snowflake)
        -> RepoResult<Option<Attendance>>;

    /// List active attendance records for a round
    async fn list_by_round(&self, round_id: Snowflake) -> RepoResult<Vec<Attendance>>;

    /// Create a record; fails with `AttendanceAlreadyMarked` on a duplicate active row
    async fn create(&self, attendance: &Attendance) -> RepoResult<()>;

    /// Soft delete a record
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Notification Repository
// ============================================================================

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Find active notification by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Notification>>;

    /// List active notifications of a community, cursor-paginated
    async fn list(
        &self,
        community_id: Snowflake,
        page: &PageRequest,
    ) -> RepoResult<Page<Notification>>;

    /// Find the community's currently pinned active notification, if any
    async fn find_pinned(&self, community_id: Snowflake) -> RepoResult<Option<Notification>>;

    /// Create a new notification
    async fn create(&self, notification: &Notification) -> RepoResult<()>;

    /// Update title/content
    async fn update(&self, notification: &Notification) -> RepoResult<()>;

    /// Set or clear the pinned flag
    async fn set_pinned(&self, id: Snowflake, pinned: bool) -> RepoResult<()>;

    /// Soft delete a notification
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find active reaction by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Reaction>>;

    /// List active reactions left on a member
    async fn list_by_member(&self, member_id: Snowflake) -> RepoResult<Vec<Reaction>>;

    /// Create a new reaction
    async fn create(&self, reaction: &Reaction) -> RepoResult<()>;

    /// Soft delete a reaction
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()>;
}
