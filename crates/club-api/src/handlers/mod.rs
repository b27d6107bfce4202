//! Request handlers organized by domain

pub mod attendances;
pub mod auth;
pub mod communities;
pub mod goals;
pub mod health;
pub mod members;
pub mod notifications;
pub mod reactions;
pub mod rounds;
pub mod users;

use club_core::Snowflake;

use crate::response::ApiError;

/// Parse a Snowflake path segment, mapping failure to a 400
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path(format!("Invalid {what} format")))
}
