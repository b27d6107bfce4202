//! Page request and page assembly for keyset pagination
//!
//! A repository fetches `limit + 1` rows so that "more pages exist" can be
//! detected without a second count query; [`Page::assemble`] drops the
//! sentinel row and computes the outgoing cursors. Regardless of the
//! requested direction, the assembled page is always in forward
//! chronological order.

use super::cursor::{Cursor, Direction};

/// Default page size when the client does not specify one
pub const DEFAULT_LIMIT: i64 = 10;
/// Hard upper bound on page size
pub const MAX_LIMIT: i64 = 50;

/// Validated pagination request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    cursor: Option<Cursor>,
    limit: i64,
    direction: Direction,
}

impl PageRequest {
    /// Create a request, clamping the limit to `[1, MAX_LIMIT]`
    pub fn new(cursor: Option<Cursor>, limit: Option<i64>, direction: Direction) -> Self {
        Self {
            cursor,
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
            direction,
        }
    }

    /// First page, default limit, forward
    pub fn first_page() -> Self {
        Self::new(None, None, Direction::Forward)
    }

    /// The cursor to continue from, if any
    #[inline]
    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    /// Page size after clamping
    #[inline]
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Requested direction
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of rows the query should fetch (limit plus the sentinel row)
    #[inline]
    pub fn fetch_limit(&self) -> i64 {
        self.limit + 1
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first_page()
    }
}

/// One page of results plus continuation metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items in forward chronological order
    pub items: Vec<T>,
    /// Cursor for the next (newer) page; present when paging forward with more rows
    pub next_cursor: Option<Cursor>,
    /// Cursor for the previous (older) page; present when paging backward with more rows
    pub prev_cursor: Option<Cursor>,
    /// Whether the query found more rows than the requested limit
    pub has_more: bool,
    /// Whether rows exist before this page
    pub has_previous: bool,
}

impl<T> Page<T> {
    /// Assemble a page from raw query rows
    ///
    /// `rows` must be in query order: ascending for forward requests,
    /// descending for backward requests, with up to `fetch_limit()` entries.
    /// `key` extracts the composite sort key of a row.
    pub fn assemble<F>(mut rows: Vec<T>, request: &PageRequest, key: F) -> Self
    where
        F: Fn(&T) -> Cursor,
    {
        let has_extra = rows.len() as i64 > request.limit();
        if has_extra {
            rows.truncate(request.limit() as usize);
        }

        // Backward queries run in descending order; flip back to chronological
        if request.direction() == Direction::Backward {
            rows.reverse();
        }

        let next_cursor = match request.direction() {
            Direction::Forward if has_extra => rows.last().map(&key),
            _ => None,
        };
        let prev_cursor = match request.direction() {
            Direction::Backward if has_extra => rows.first().map(&key),
            _ => None,
        };

        let has_previous = match request.direction() {
            Direction::Forward => request.cursor().is_some(),
            Direction::Backward => has_extra,
        };

        Self {
            items: rows,
            next_cursor,
            prev_cursor,
            has_more: has_extra,
            has_previous,
        }
    }

    /// Map the page's items, keeping the pagination metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            next_cursor: self.next_cursor,
            prev_cursor: self.prev_cursor,
            has_more: self.has_more,
            has_previous: self.has_previous,
        }
    }

    /// An empty page with no continuation
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_cursor: None,
            prev_cursor: None,
            has_more: false,
            has_previous: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Snowflake;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    /// A minimal row: (created_at, id)
    type Row = (DateTime<Utc>, Snowflake);

    fn dataset(n: i64) -> Vec<Row> {
        let base = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        (0..n)
            // every third row shares a timestamp with its predecessor,
            // exercising the tie-break
            .map(|i| (base + Duration::seconds(i - i % 3), Snowflake::new(1000 + i)))
            .collect()
    }

    fn key(row: &Row) -> Cursor {
        Cursor::new(row.0, row.1)
    }

    /// Simulate the repository-side window query against an in-memory dataset
    fn run_query(data: &[Row], request: &PageRequest) -> Vec<Row> {
        let mut rows: Vec<Row> = match (request.direction(), request.cursor()) {
            (Direction::Forward, Some(c)) => data
                .iter()
                .copied()
                .filter(|r| (r.0, r.1) > (c.created_at, c.id))
                .collect(),
            (Direction::Backward, Some(c)) => data
                .iter()
                .copied()
                .filter(|r| (r.0, r.1) < (c.created_at, c.id))
                .collect(),
            (_, None) => data.to_vec(),
        };
        rows.sort_by_key(|r| (r.0, r.1));
        if request.direction() == Direction::Backward {
            rows.reverse();
        }
        rows.truncate(request.fetch_limit() as usize);
        rows
    }

    #[test]
    fn test_limit_clamping() {
        assert_eq!(PageRequest::new(None, Some(200), Direction::Forward).limit(), MAX_LIMIT);
        assert_eq!(PageRequest::new(None, Some(0), Direction::Forward).limit(), 1);
        assert_eq!(PageRequest::new(None, Some(-5), Direction::Forward).limit(), 1);
        assert_eq!(PageRequest::new(None, None, Direction::Forward).limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_fetch_limit_is_one_extra() {
        let request = PageRequest::new(None, Some(10), Direction::Forward);
        assert_eq!(request.fetch_limit(), 11);
    }

    #[test]
    fn test_forward_walk_yields_all_items_exactly_once() {
        let data = dataset(23);
        let mut seen = Vec::new();
        let mut cursor = None;

        loop {
            let request = PageRequest::new(cursor, Some(5), Direction::Forward);
            let rows = run_query(&data, &request);
            let page = Page::assemble(rows, &request, key);

            seen.extend(page.items.iter().copied());

            if !page.has_more {
                break;
            }
            cursor = page.next_cursor;
            assert!(cursor.is_some(), "has_more implies a next cursor");
        }

        assert_eq!(seen.len(), data.len(), "no gaps, no duplicates");
        assert_eq!(seen, data, "ascending sort-key order");
    }

    #[test]
    fn test_backward_page_reproduces_preceding_page() {
        let data = dataset(30);

        // First forward page
        let first_req = PageRequest::new(None, Some(10), Direction::Forward);
        let first = Page::assemble(run_query(&data, &first_req), &first_req, key);

        // Second forward page
        let second_req = PageRequest::new(first.next_cursor, Some(10), Direction::Forward);
        let second = Page::assemble(run_query(&data, &second_req), &second_req, key);

        // Going backward from the start of the second page must reproduce the first
        let start = key(&second.items[0]);
        let back_req = PageRequest::new(Some(start), Some(10), Direction::Backward);
        let back = Page::assemble(run_query(&data, &back_req), &back_req, key);

        assert_eq!(back.items, first.items);
    }

    #[test]
    fn test_backward_output_is_chronological() {
        let data = dataset(20);
        let anchor = key(&data[15]);
        let request = PageRequest::new(Some(anchor), Some(5), Direction::Backward);
        let page = Page::assemble(run_query(&data, &request), &request, key);

        let mut sorted = page.items.clone();
        sorted.sort_by_key(|r| (r.0, r.1));
        assert_eq!(page.items, sorted);
    }

    #[test]
    fn test_cursor_placement_per_direction() {
        let data = dataset(30);

        let fwd = PageRequest::new(None, Some(10), Direction::Forward);
        let page = Page::assemble(run_query(&data, &fwd), &fwd, key);
        assert!(page.next_cursor.is_some());
        assert!(page.prev_cursor.is_none());
        assert!(page.has_more);
        assert!(!page.has_previous, "first page has nothing before it");

        let anchor = key(&data[20]);
        let bwd = PageRequest::new(Some(anchor), Some(10), Direction::Backward);
        let page = Page::assemble(run_query(&data, &bwd), &bwd, key);
        assert!(page.next_cursor.is_none());
        assert!(page.prev_cursor.is_some());
        assert!(page.has_previous);
    }

    #[test]
    fn test_exact_fit_has_no_more() {
        let data = dataset(10);
        let request = PageRequest::new(None, Some(10), Direction::Forward);
        let page = Page::assemble(run_query(&data, &request), &request, key);

        assert_eq!(page.items.len(), 10);
        assert!(!page.has_more);
        assert!(page.next_cursor.is_none());
    }

    #[test]
    fn test_empty_dataset() {
        let request = PageRequest::new(None, Some(10), Direction::Forward);
        let page = Page::assemble(run_query(&[], &request), &request, key);

        assert!(page.items.is_empty());
        assert!(!page.has_more);
        assert!(!page.has_previous);
    }

    #[test]
    fn test_map_preserves_metadata() {
        let data = dataset(12);
        let request = PageRequest::new(None, Some(5), Direction::Forward);
        let page = Page::assemble(run_query(&data, &request), &request, key);
        let has_more = page.has_more;
        let next = page.next_cursor;

        let mapped = page.map(|(_, id)| id.into_inner());
        assert_eq!(mapped.items.len(), 5);
        assert_eq!(mapped.has_more, has_more);
        assert_eq!(mapped.next_cursor, next);
    }
}
