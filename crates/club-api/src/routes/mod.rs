//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{
    attendances, auth, communities, goals, health, members, notifications, reactions, rounds,
    users,
};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(community_routes())
        .merge(round_routes())
        .merge(goal_routes())
        .merge(notification_routes())
        .merge(reaction_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me", patch(users::update_current_user))
        .route("/users/@me/communities", get(communities::list_my_communities))
        .route("/users/:user_id", get(users::get_user))
}

/// Community routes
fn community_routes() -> Router<AppState> {
    Router::new()
        // Community CRUD and public search
        .route("/communities", post(communities::create_community))
        .route("/communities", get(communities::search_communities))
        .route("/communities/:community_id", get(communities::get_community))
        .route("/communities/:community_id", patch(communities::update_community))
        .route("/communities/:community_id", delete(communities::delete_community))
        // Membership
        .route("/communities/:community_id/members", post(members::join_community))
        .route("/communities/:community_id/members", get(members::list_members))
        .route("/communities/:community_id/members/@me", delete(members::leave_community))
        .route(
            "/communities/:community_id/members/:user_id",
            patch(members::update_member_role),
        )
        .route(
            "/communities/:community_id/members/:user_id",
            delete(members::remove_member),
        )
        // Community-scoped collections
        .route("/communities/:community_id/rounds", post(rounds::create_round))
        .route("/communities/:community_id/rounds", get(rounds::list_rounds))
        .route("/communities/:community_id/goals", get(goals::list_community_goals))
        .route(
            "/communities/:community_id/notifications",
            post(notifications::create_notification),
        )
        .route(
            "/communities/:community_id/notifications",
            get(notifications::list_notifications),
        )
}

/// Round routes
fn round_routes() -> Router<AppState> {
    Router::new()
        .route("/rounds/:round_id", get(rounds::get_round))
        .route("/rounds/:round_id", patch(rounds::update_round))
        .route("/rounds/:round_id", delete(rounds::delete_round))
        .route("/rounds/:round_id/attendances", post(attendances::mark_attendance))
        .route("/rounds/:round_id/attendances", get(attendances::list_attendances))
}

/// Goal routes
fn goal_routes() -> Router<AppState> {
    Router::new()
        .route("/goals", post(goals::create_goal))
        .route("/goals", get(goals::list_my_goals))
        .route("/goals/:goal_id", get(goals::get_goal))
        .route("/goals/:goal_id", patch(goals::update_goal))
        .route("/goals/:goal_id", delete(goals::delete_goal))
        .route("/goals/:goal_id/complete", post(goals::toggle_goal_completed))
}

/// Notification routes
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications/:notification_id",
            patch(notifications::update_notification),
        )
        .route(
            "/notifications/:notification_id",
            delete(notifications::delete_notification),
        )
        .route(
            "/notifications/:notification_id/pin",
            post(notifications::pin_notification),
        )
        .route(
            "/notifications/:notification_id/pin",
            delete(notifications::unpin_notification),
        )
}

/// Reaction routes
fn reaction_routes() -> Router<AppState> {
    Router::new()
        .route("/members/:member_id/reactions", post(reactions::add_reaction))
        .route("/members/:member_id/reactions", get(reactions::list_reactions))
        .route("/reactions/:reaction_id", delete(reactions::remove_reaction))
}
