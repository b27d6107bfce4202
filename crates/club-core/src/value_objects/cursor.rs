//! Opaque pagination cursor over a (created_at, id) composite sort key
//!
//! The cursor carries both the sort-field value and the tie-break id so
//! that rows sharing the same timestamp are still totally ordered. Clients
//! receive it as an opaque URL-safe base64 string and must echo it back
//! unmodified.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, SecondsFormat, Utc};

use super::snowflake::Snowflake;

/// Compound keyset cursor: sort-field value plus tie-break identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Sort-field value of the row the cursor points at
    pub created_at: DateTime<Utc>,
    /// Primary identifier of that row, breaking timestamp ties
    pub id: Snowflake,
}

impl Cursor {
    /// Create a cursor from a row's composite sort key
    pub fn new(created_at: DateTime<Utc>, id: Snowflake) -> Self {
        Self { created_at, id }
    }

    /// Encode into the opaque wire form
    ///
    /// Microsecond precision matches what PostgreSQL `timestamptz` stores,
    /// so a decoded cursor compares equal to the row it was taken from.
    pub fn encode(&self) -> String {
        let raw = format!(
            "{}|{}",
            self.created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            self.id
        );
        URL_SAFE_NO_PAD.encode(raw)
    }

    /// Decode from the opaque wire form
    ///
    /// # Errors
    /// Returns `CursorError::Malformed` for anything that is not a value
    /// previously produced by [`Cursor::encode`].
    pub fn decode(s: &str) -> Result<Self, CursorError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(s)
            .map_err(|_| CursorError::Malformed)?;
        let raw = String::from_utf8(bytes).map_err(|_| CursorError::Malformed)?;

        let (ts, id) = raw.split_once('|').ok_or(CursorError::Malformed)?;

        let created_at = DateTime::parse_from_rfc3339(ts)
            .map_err(|_| CursorError::Malformed)?
            .with_timezone(&Utc);
        let id = Snowflake::parse(id).map_err(|_| CursorError::Malformed)?;

        Ok(Self { created_at, id })
    }
}

/// Error when decoding a cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
    #[error("malformed pagination cursor")]
    Malformed,
}

/// Pagination direction relative to the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Rows strictly after the cursor in ascending (created_at, id) order
    #[default]
    Forward,
    /// Rows strictly before the cursor
    Backward,
}

impl Direction {
    /// Parse from the query-string form ("forward" / "backward")
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "forward" => Some(Self::Forward),
            "backward" => Some(Self::Backward),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_cursor() -> Cursor {
        let ts = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
            + chrono::Duration::microseconds(589793);
        Cursor::new(ts, Snowflake::new(712834567890123))
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let cursor = sample_cursor();
        let encoded = cursor.encode();
        let decoded = Cursor::decode(&encoded).unwrap();
        assert_eq!(decoded, cursor);
    }

    #[test]
    fn test_encoded_form_is_opaque() {
        let encoded = sample_cursor().encode();
        // URL-safe alphabet only, no padding
        assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert_eq!(Cursor::decode("not base64 !!"), Err(CursorError::Malformed));
        assert_eq!(Cursor::decode(""), Err(CursorError::Malformed));

        // Valid base64 but not a cursor payload
        let bogus = URL_SAFE_NO_PAD.encode("hello world");
        assert_eq!(Cursor::decode(&bogus), Err(CursorError::Malformed));
    }

    #[test]
    fn test_decode_rejects_bad_timestamp() {
        let bogus = URL_SAFE_NO_PAD.encode("yesterday|12345");
        assert_eq!(Cursor::decode(&bogus), Err(CursorError::Malformed));
    }

    #[test]
    fn test_decode_rejects_bad_id() {
        let bogus = URL_SAFE_NO_PAD.encode("2025-03-14T09:26:53.589793Z|abc");
        assert_eq!(Cursor::decode(&bogus), Err(CursorError::Malformed));
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!(Direction::parse("forward"), Some(Direction::Forward));
        assert_eq!(Direction::parse("backward"), Some(Direction::Backward));
        assert_eq!(Direction::parse("sideways"), None);
    }

    #[test]
    fn test_direction_default_is_forward() {
        assert_eq!(Direction::default(), Direction::Forward);
    }
}
