//! PostgreSQL implementation of RoundRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use club_core::entities::Round;
use club_core::traits::{RepoResult, RoundRepository};
use club_core::value_objects::{Cursor, Page, PageRequest, Snowflake};

use crate::models::RoundModel;
use crate::query::{pagination, soft_delete, QueryFilter};

use super::error::{map_db_error, round_not_found};

const ROUND_COLUMNS: &str = "id, community_id, sequence_no, starts_at, ends_at, location, \
                             created_at, updated_at, deleted_at";

/// PostgreSQL implementation of RoundRepository
#[derive(Clone)]
pub struct PgRoundRepository {
    pool: PgPool,
}

impl PgRoundRepository {
    /// Create a new PgRoundRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoundRepository for PgRoundRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Round>> {
        let mut filter = QueryFilter::new();
        filter.push("id = {}");
        let sql = format!("SELECT {ROUND_COLUMNS} FROM rounds {}", filter.where_sql());

        let result = sqlx::query_as::<_, RoundModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Round::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, community_id: Snowflake, page: &PageRequest) -> RepoResult<Page<Round>> {
        let mut filter = QueryFilter::new();
        filter.push("community_id = {}");
        pagination::push_cursor_window(&mut filter, page, "created_at");
        let limit_param = filter.claim_param();

        let sql = format!(
            "SELECT {ROUND_COLUMNS} FROM rounds {} {} LIMIT ${limit_param}",
            filter.where_sql(),
            pagination::order_by_sql(&filter, page, "created_at"),
        );

        let mut q = sqlx::query_as::<_, RoundModel>(&sql).bind(community_id.into_inner());
        if let Some(cursor) = page.cursor() {
            q = q.bind(cursor.created_at).bind(cursor.id.into_inner());
        }

        let rows = q
            .bind(page.fetch_limit())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let rounds: Vec<Round> = rows.into_iter().map(Round::from).collect();
        Ok(Page::assemble(rounds, page, |r| {
            Cursor::new(r.created_at, r.id)
        }))
    }

    #[instrument(skip(self))]
    async fn next_sequence_no(&self, community_id: Snowflake) -> RepoResult<i32> {
        let mut filter = QueryFilter::new();
        filter.push("community_id = {}");
        let sql = format!(
            "SELECT COALESCE(MAX(sequence_no), 0) + 1 FROM rounds {}",
            filter.where_sql()
        );

        let next = sqlx::query_scalar::<_, i32>(&sql)
            .bind(community_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(next)
    }

    #[instrument(skip(self))]
    async fn create(&self, round: &Round) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO rounds (id, community_id, sequence_no, starts_at, ends_at, location,
                                created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(round.id.into_inner())
        .bind(round.community_id.into_inner())
        .bind(round.sequence_no)
        .bind(round.starts_at)
        .bind(round.ends_at)
        .bind(&round.location)
        .bind(round.created_at)
        .bind(round.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, round: &Round) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE rounds
            SET starts_at = $2, ends_at = $3, location = $4, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(round.id.into_inner())
        .bind(round.starts_at)
        .bind(round.ends_at)
        .bind(&round.location)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(round_not_found(round.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(&soft_delete::by_id_sql("rounds"))
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(round_not_found(id));
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
        assert_send_sync::<PgRoundRepository>();
    }
}
