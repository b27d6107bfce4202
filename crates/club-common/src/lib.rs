//! # club-common
//!
//! Shared utilities: configuration, application errors, session-token
//! service, the OAuth boundary client, and tracing setup.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

pub use auth::{
    Claims, HttpOAuthClient, SessionService, SocialAuthClient, SocialProfile, TokenPair, TokenType,
};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, OAuthConfig,
    RateLimitConfig, ServerConfig, SessionConfig, SnowflakeConfig,
};
pub use error::{AppError, ErrorResponse};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
