//! Keyset pagination SQL over a `(sort, id)` composite key
//!
//! The window predicate uses PostgreSQL row comparison, which matches the
//! spec form `(sort > cursor) OR (sort = cursor AND id > cursor_id)` while
//! staying index-friendly. Forward pages scan ascending, backward pages
//! descending; the caller binds the cursor's timestamp and id in that
//! order when a cursor is present.

use club_core::{Direction, PageRequest};

use super::filter::QueryFilter;

/// Push the cursor window predicate onto a filter, if the request has a cursor
///
/// Adds two bind slots (timestamp, id). `sort_col` is the entity's sort
/// column, usually `created_at`; the tie-break column is always `id`.
pub fn push_cursor_window(filter: &mut QueryFilter, page: &PageRequest, sort_col: &str) {
    if page.cursor().is_none() {
        return;
    }

    let sort = filter.qualify(sort_col);
    let id = filter.qualify("id");
    let op = match page.direction() {
        Direction::Forward => '>',
        Direction::Backward => '<',
    };
    filter.push(&format!("({sort}, {id}) {op} ({{}}, {{}})"));
}

/// Render the ORDER BY clause matching the window direction
///
/// Forward scans ascending, backward descending; the tie-break id keeps
/// the order total when timestamps collide. Backward results are reversed
/// into chronological order during page assembly, not here.
pub fn order_by_sql(filter: &QueryFilter, page: &PageRequest, sort_col: &str) -> String {
    let sort = filter.qualify(sort_col);
    let id = filter.qualify("id");
    match page.direction() {
        Direction::Forward => format!("ORDER BY {sort} ASC, {id} ASC"),
        Direction::Backward => format!("ORDER BY {sort} DESC, {id} DESC"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use club_core::{Cursor, Snowflake};

    fn cursor() -> Cursor {
        Cursor::new(Utc::now(), Snowflake::new(42))
    }

    #[test]
    fn test_no_cursor_adds_no_predicate() {
        let mut filter = QueryFilter::new();
        let page = PageRequest::new(None, Some(10), Direction::Forward);
        push_cursor_window(&mut filter, &page, "created_at");
        assert_eq!(filter.where_sql(), "WHERE deleted_at IS NULL");
    }

    #[test]
    fn test_forward_window() {
        let mut filter = QueryFilter::new();
        filter.push("community_id = {}");
        let page = PageRequest::new(Some(cursor()), Some(10), Direction::Forward);
        push_cursor_window(&mut filter, &page, "created_at");
        assert_eq!(
            filter.where_sql(),
            "WHERE community_id = $1 AND (created_at, id) > ($2, $3) AND deleted_at IS NULL"
        );
    }

    #[test]
    fn test_backward_window() {
        let mut filter = QueryFilter::new();
        let page = PageRequest::new(Some(cursor()), Some(10), Direction::Backward);
        push_cursor_window(&mut filter, &page, "joined_at");
        assert_eq!(
            filter.where_sql(),
            "WHERE (joined_at, id) < ($1, $2) AND deleted_at IS NULL"
        );
    }

    #[test]
    fn test_order_matches_direction() {
        let filter = QueryFilter::new();
        let fwd = PageRequest::new(None, None, Direction::Forward);
        let bwd = PageRequest::new(None, None, Direction::Backward);
        assert_eq!(
            order_by_sql(&filter, &fwd, "created_at"),
            "ORDER BY created_at ASC, id ASC"
        );
        assert_eq!(
            order_by_sql(&filter, &bwd, "created_at"),
            "ORDER BY created_at DESC, id DESC"
        );
    }

    #[test]
    fn test_aliased_window() {
        let mut filter = QueryFilter::with_alias("c");
        let page = PageRequest::new(Some(cursor()), Some(10), Direction::Forward);
        push_cursor_window(&mut filter, &page, "created_at");
        assert_eq!(
            filter.where_sql(),
            "WHERE (c.created_at, c.id) > ($1, $2) AND c.deleted_at IS NULL"
        );
        assert_eq!(
            order_by_sql(&filter, &page, "created_at"),
            "ORDER BY c.created_at ASC, c.id ASC"
        );
    }
}
