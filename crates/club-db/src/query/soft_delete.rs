//! Delete-to-update conversion
//!
//! Application code never removes rows: a delete is an UPDATE stamping
//! `deleted_at`, guarded so an already-deleted row is not re-stamped
//! (`rows_affected == 0` then reads as not-found at the call site).

/// Render the soft-delete statement targeting a single row by id
pub fn by_id_sql(table: &str) -> String {
    format!("UPDATE {table} SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
}

/// Render a soft-delete statement preserving an arbitrary caller predicate
///
/// The predicate's bind slots must start at `$1`.
pub fn where_sql(table: &str, predicate: &str) -> String {
    format!("UPDATE {table} SET deleted_at = NOW() WHERE {predicate} AND deleted_at IS NULL")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_is_an_update() {
        let sql = by_id_sql("communities");
        assert!(sql.starts_with("UPDATE communities SET deleted_at = NOW()"));
        assert!(!sql.contains("DELETE"));
    }

    #[test]
    fn test_by_id_targets_active_rows_only() {
        let sql = by_id_sql("study_goals");
        assert!(sql.ends_with("WHERE id = $1 AND deleted_at IS NULL"));
    }

    #[test]
    fn test_where_preserves_caller_predicate() {
        let sql = where_sql("community_members", "community_id = $1 AND user_id = $2");
        assert_eq!(
            sql,
            "UPDATE community_members SET deleted_at = NOW() \
             WHERE community_id = $1 AND user_id = $2 AND deleted_at IS NULL"
        );
    }
}
