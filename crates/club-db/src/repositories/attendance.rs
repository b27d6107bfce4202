//! PostgreSQL implementation of AttendanceRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use club_core::entities::Attendance;
use club_core::error::DomainError;
use club_core::traits::{AttendanceRepository, RepoResult};
use club_core::value_objects::Snowflake;

use crate::models::AttendanceModel;
use crate::query::{soft_delete, QueryFilter};

use super::error::{map_db_error, map_unique_violation};

const ATTENDANCE_COLUMNS: &str =
    "id, round_id, user_id, status, marked_at, created_at, updated_at, deleted_at";

/// PostgreSQL implementation of AttendanceRepository
#[derive(Clone)]
pub struct PgAttendanceRepository {
    pool: PgPool,
}

impl PgAttendanceRepository {
    /// Create a new PgAttendanceRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceRepository for PgAttendanceRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        round_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<Attendance>> {
        let mut filter = QueryFilter::new();
        filter.push("round_id = {}");
        filter.push("user_id = {}");
        let sql = format!(
            "SELECT {ATTENDANCE_COLUMNS} FROM attendances {}",
            filter.where_sql()
        );

        let result = sqlx::query_as::<_, AttendanceModel>(&sql)
            .bind(round_id.into_inner())
            .bind(user_id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(AttendanceModel::into_entity).transpose()
    }

    #[instrument(skip(self))]
    async fn list_by_round(&self, round_id: Snowflake) -> RepoResult<Vec<Attendance>> {
        let mut filter = QueryFilter::new();
        filter.push("round_id = {}");
        let sql = format!(
            "SELECT {ATTENDANCE_COLUMNS} FROM attendances {} ORDER BY marked_at ASC, id ASC",
            filter.where_sql()
        );

        let rows = sqlx::query_as::<_, AttendanceModel>(&sql)
            .bind(round_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter()
            .map(AttendanceModel::into_entity)
            .collect()
    }

    #[instrument(skip(self))]
    async fn create(&self, attendance: &Attendance) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO attendances (id, round_id, user_id, status, marked_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(attendance.id.into_inner())
        .bind(attendance.round_id.into_inner())
        .bind(attendance.user_id.into_inner())
        .bind(attendance.status.as_str())
        .bind(attendance.marked_at)
        .bind(attendance.created_at)
        .bind(attendance.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AttendanceAlreadyMarked))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(&soft_delete::by_id_sql("attendances"))
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::DatabaseError(
                "attendance record not found".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgAttendanceRepository>();
    }
}
