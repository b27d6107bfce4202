//! Server setup and initialization
//!
//! Provides the main application builder and server runner. All process-wide
//! state (the connection pool, the service context) is constructed here
//! explicitly at startup; nothing is lazily initialized behind a global.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use club_common::{AppConfig, AppError, HttpOAuthClient, SessionService};
use club_core::entities::OAuthProvider;
use club_core::SnowflakeGenerator;
use club_db::{
    create_pool, PgAttendanceRepository, PgCommunityRepository, PgGoalRepository,
    PgMemberRepository, PgNotificationRepository, PgReactionRepository, PgRoundRepository,
    PgUserRepository,
};
use club_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = apply_middleware(create_router().merge(health_routes()));
    router.with_state(state)
}

/// Build the application with rate limiting and configured CORS
///
/// Health routes stay outside the rate limiter so probes are never shed.
pub fn create_app_with_config(state: AppState, config: &AppConfig) -> Router {
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_middleware(health_routes());
    api.merge(health).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = club_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create session token service
    let session_service = Arc::new(SessionService::new(
        &config.session.secret,
        config.session.access_token_expiry,
        config.session.refresh_token_expiry,
    ));

    // Create the OAuth boundary client
    let oauth_provider = OAuthProvider::parse(&config.oauth.provider)
        .ok_or_else(|| AppError::Config(format!("Unknown OAuth provider: {}", config.oauth.provider)))?;
    let oauth_client = Arc::new(HttpOAuthClient::new(config.oauth.clone()));

    // Create Snowflake generator
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let community_repo = Arc::new(PgCommunityRepository::new(pool.clone()));
    let member_repo = Arc::new(PgMemberRepository::new(pool.clone()));
    let round_repo = Arc::new(PgRoundRepository::new(pool.clone()));
    let goal_repo = Arc::new(PgGoalRepository::new(pool.clone()));
    let attendance_repo = Arc::new(PgAttendanceRepository::new(pool.clone()));
    let notification_repo = Arc::new(PgNotificationRepository::new(pool.clone()));
    let reaction_repo = Arc::new(PgReactionRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(user_repo)
        .community_repo(community_repo)
        .member_repo(member_repo)
        .round_repo(round_repo)
        .goal_repo(goal_repo)
        .attendance_repo(attendance_repo)
        .notification_repo(notification_repo)
        .reaction_repo(reaction_repo)
        .session_service(session_service)
        .oauth_client(oauth_client)
        .oauth_provider(oauth_provider)
        .snowflake_generator(snowflake_generator)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application (with rate limiting and CORS from config)
    let config = state.config().clone();
    let app = create_app_with_config(state, &config);

    // Run server
    run_server(app, addr).await
}
