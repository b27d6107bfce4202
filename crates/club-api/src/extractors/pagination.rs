//! Cursor pagination extractor
//!
//! Extracts cursor-based pagination parameters from query strings into a
//! validated [`PageRequest`]. A malformed cursor is rejected with 400
//! rather than silently treated as the first page, so a client bug cannot
//! masquerade as an empty restart.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use club_core::value_objects::{Cursor, Direction, PageRequest};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    /// Opaque cursor from a previous page
    #[serde(default)]
    pub cursor: Option<String>,
    /// Maximum number of items to return (clamped to 1-50)
    #[serde(default)]
    pub limit: Option<i64>,
    /// "forward" (default) or "backward"
    #[serde(default)]
    pub direction: Option<String>,
}

/// Validated cursor pagination extractor
#[derive(Debug, Clone, Copy)]
pub struct CursorPagination(pub PageRequest);

impl TryFrom<PaginationParams> for CursorPagination {
    type Error = ApiError;

    fn try_from(params: PaginationParams) -> Result<Self, Self::Error> {
        let cursor = params
            .cursor
            .as_deref()
            .map(|s| Cursor::decode(s).map_err(|_| ApiError::invalid_query("Malformed cursor")))
            .transpose()?;

        let direction = match params.direction.as_deref() {
            None => Direction::Forward,
            Some(s) => Direction::parse(s).ok_or_else(|| {
                ApiError::invalid_query("Direction must be \"forward\" or \"backward\"")
            })?,
        };

        Ok(CursorPagination(PageRequest::new(
            cursor,
            params.limit,
            direction,
        )))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CursorPagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        CursorPagination::try_from(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use club_core::Snowflake;

    #[test]
    fn test_defaults() {
        let params = PaginationParams {
            cursor: None,
            limit: None,
            direction: None,
        };
        let CursorPagination(page) = CursorPagination::try_from(params).unwrap();
        assert!(page.cursor().is_none());
        assert_eq!(page.limit(), 10);
        assert_eq!(page.direction(), Direction::Forward);
    }

    #[test]
    fn test_limit_clamping() {
        let params = PaginationParams {
            cursor: None,
            limit: Some(500),
            direction: None,
        };
        let CursorPagination(page) = CursorPagination::try_from(params).unwrap();
        assert_eq!(page.limit(), 50);

        let params = PaginationParams {
            cursor: None,
            limit: Some(0),
            direction: None,
        };
        let CursorPagination(page) = CursorPagination::try_from(params).unwrap();
        assert_eq!(page.limit(), 1);
    }

    #[test]
    fn test_valid_cursor_round_trips() {
        let cursor = Cursor::new(Utc::now(), Snowflake::new(99));
        let params = PaginationParams {
            cursor: Some(cursor.encode()),
            limit: Some(20),
            direction: Some("backward".to_string()),
        };
        let CursorPagination(page) = CursorPagination::try_from(params).unwrap();
        assert_eq!(page.cursor(), Some(cursor));
        assert_eq!(page.direction(), Direction::Backward);
    }

    #[test]
    fn test_malformed_cursor_is_rejected() {
        let params = PaginationParams {
            cursor: Some("definitely-not-a-cursor".to_string()),
            limit: None,
            direction: None,
        };
        assert!(CursorPagination::try_from(params).is_err());
    }

    #[test]
    fn test_unknown_direction_is_rejected() {
        let params = PaginationParams {
            cursor: None,
            limit: None,
            direction: Some("upward".to_string()),
        };
        assert!(CursorPagination::try_from(params).is_err());
    }
}
