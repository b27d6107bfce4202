//! Service context - dependency container for services
//!
//! Holds all repositories and boundary collaborators needed by services.
//! Constructed once at startup in the API crate's bootstrap and shared
//! across request handlers.

use std::sync::Arc;

use club_common::auth::{SessionService, SocialAuthClient};
use club_core::entities::OAuthProvider;
use club_core::traits::{
    AttendanceRepository, CommunityRepository, GoalRepository, MemberRepository,
    NotificationRepository, ReactionRepository, RoundRepository, UserRepository,
};
use club_core::SnowflakeGenerator;
use club_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - Session token service
/// - The OAuth boundary client and the provider identities are keyed to
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (health checks, transactions)
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    community_repo: Arc<dyn CommunityRepository>,
    member_repo: Arc<dyn MemberRepository>,
    round_repo: Arc<dyn RoundRepository>,
    goal_repo: Arc<dyn GoalRepository>,
    attendance_repo: Arc<dyn AttendanceRepository>,
    notification_repo: Arc<dyn NotificationRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,

    // Boundary collaborators
    session_service: Arc<SessionService>,
    oauth_client: Arc<dyn SocialAuthClient>,
    oauth_provider: OAuthProvider,

    // Services
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the community repository
    pub fn community_repo(&self) -> &dyn CommunityRepository {
        self.community_repo.as_ref()
    }

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the round repository
    pub fn round_repo(&self) -> &dyn RoundRepository {
        self.round_repo.as_ref()
    }

    /// Get the goal repository
    pub fn goal_repo(&self) -> &dyn GoalRepository {
        self.goal_repo.as_ref()
    }

    /// Get the attendance repository
    pub fn attendance_repo(&self) -> &dyn AttendanceRepository {
        self.attendance_repo.as_ref()
    }

    /// Get the notification repository
    pub fn notification_repo(&self) -> &dyn NotificationRepository {
        self.notification_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    // === Boundary collaborators ===

    /// Get the session token service
    pub fn session_service(&self) -> &SessionService {
        self.session_service.as_ref()
    }

    /// Get the OAuth client
    pub fn oauth_client(&self) -> &dyn SocialAuthClient {
        self.oauth_client.as_ref()
    }

    /// The provider local accounts are keyed to
    pub fn oauth_provider(&self) -> OAuthProvider {
        self.oauth_provider
    }

    // === Services ===

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> club_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("oauth_provider", &self.oauth_provider)
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    community_repo: Option<Arc<dyn CommunityRepository>>,
    member_repo: Option<Arc<dyn MemberRepository>>,
    round_repo: Option<Arc<dyn RoundRepository>>,
    goal_repo: Option<Arc<dyn GoalRepository>>,
    attendance_repo: Option<Arc<dyn AttendanceRepository>>,
    notification_repo: Option<Arc<dyn NotificationRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    session_service: Option<Arc<SessionService>>,
    oauth_client: Option<Arc<dyn SocialAuthClient>>,
    oauth_provider: OAuthProvider,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            community_repo: None,
            member_repo: None,
            round_repo: None,
            goal_repo: None,
            attendance_repo: None,
            notification_repo: None,
            reaction_repo: None,
            session_service: None,
            oauth_client: None,
            oauth_provider: OAuthProvider::Kakao,
            snowflake_generator: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn community_repo(mut self, repo: Arc<dyn CommunityRepository>) -> Self {
        self.community_repo = Some(repo);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn round_repo(mut self, repo: Arc<dyn RoundRepository>) -> Self {
        self.round_repo = Some(repo);
        self
    }

    pub fn goal_repo(mut self, repo: Arc<dyn GoalRepository>) -> Self {
        self.goal_repo = Some(repo);
        self
    }

    pub fn attendance_repo(mut self, repo: Arc<dyn AttendanceRepository>) -> Self {
        self.attendance_repo = Some(repo);
        self
    }

    pub fn notification_repo(mut self, repo: Arc<dyn NotificationRepository>) -> Self {
        self.notification_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn session_service(mut self, service: Arc<SessionService>) -> Self {
        self.session_service = Some(service);
        self
    }

    pub fn oauth_client(mut self, client: Arc<dyn SocialAuthClient>) -> Self {
        self.oauth_client = Some(client);
        self
    }

    pub fn oauth_provider(mut self, provider: OAuthProvider) -> Self {
        self.oauth_provider = provider;
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext {
            pool: self
                .pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            community_repo: self
                .community_repo
                .ok_or_else(|| ServiceError::validation("community_repo is required"))?,
            member_repo: self
                .member_repo
                .ok_or_else(|| ServiceError::validation("member_repo is required"))?,
            round_repo: self
                .round_repo
                .ok_or_else(|| ServiceError::validation("round_repo is required"))?,
            goal_repo: self
                .goal_repo
                .ok_or_else(|| ServiceError::validation("goal_repo is required"))?,
            attendance_repo: self
                .attendance_repo
                .ok_or_else(|| ServiceError::validation("attendance_repo is required"))?,
            notification_repo: self
                .notification_repo
                .ok_or_else(|| ServiceError::validation("notification_repo is required"))?,
            reaction_repo: self
                .reaction_repo
                .ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            session_service: self
                .session_service
                .ok_or_else(|| ServiceError::validation("session_service is required"))?,
            oauth_client: self
                .oauth_client
                .ok_or_else(|| ServiceError::validation("oauth_client is required"))?,
            oauth_provider: self.oauth_provider,
            snowflake_generator: self
                .snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
