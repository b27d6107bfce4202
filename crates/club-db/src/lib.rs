//! # club-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `club-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - The soft-delete query layer: reads are filtered to active rows by
//!   construction, and deletes are rewritten into `deleted_at` updates
//! - Keyset (cursor) pagination SQL over the `(created_at, id)` composite key
//!
//! ## Usage
//!
//! ```rust,ignore
//! use club_db::pool::{create_pool, DatabaseConfig};
//! use club_db::repositories::PgCommunityRepository;
//! use club_core::traits::CommunityRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let community_repo = PgCommunityRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod models;
pub mod pool;
pub mod query;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use query::{QueryFilter, Visibility};
pub use repositories::{
    PgAttendanceRepository, PgCommunityRepository, PgGoalRepository, PgMemberRepository,
    PgNotificationRepository, PgReactionRepository, PgRoundRepository, PgUserRepository,
};
