//! PostgreSQL implementation of GoalRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use club_core::entities::StudyGoal;
use club_core::traits::{GoalRepository, RepoResult};
use club_core::value_objects::{Cursor, Page, PageRequest, Snowflake};

use crate::models::StudyGoalModel;
use crate::query::{pagination, soft_delete, QueryFilter};

use super::error::{goal_not_found, map_db_error};

const GOAL_COLUMNS: &str = "id, owner_id, community_id, round_id, title, description, is_team, \
                            is_completed, start_date, end_date, created_at, updated_at, deleted_at";

/// PostgreSQL implementation of GoalRepository
#[derive(Clone)]
pub struct PgGoalRepository {
    pool: PgPool,
}

impl PgGoalRepository {
    /// Create a new PgGoalRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Shared cursor-paginated list over one scoping predicate
    async fn list_where(
        &self,
        scope: &str,
        scope_id: Snowflake,
        extra: Option<&str>,
        page: &PageRequest,
    ) -> RepoResult<Page<StudyGoal>> {
        let mut filter = QueryFilter::new();
        filter.push(&format!("{scope} = {{}}"));
        if let Some(extra) = extra {
            filter.push(extra);
        }
        pagination::push_cursor_window(&mut filter, page, "created_at");
        let limit_param = filter.claim_param();

        let sql = format!(
            "SELECT {GOAL_COLUMNS} FROM study_goals {} {} LIMIT ${limit_param}",
            filter.where_sql(),
            pagination::order_by_sql(&filter, page, "created_at"),
        );

        let mut q = sqlx::query_as::<_, StudyGoalModel>(&sql).bind(scope_id.into_inner());
        if let Some(cursor) = page.cursor() {
            q = q.bind(cursor.created_at).bind(cursor.id.into_inner());
        }

        let rows = q
            .bind(page.fetch_limit())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let goals: Vec<StudyGoal> = rows.into_iter().map(StudyGoal::from).collect();
        Ok(Page::assemble(goals, page, |g| {
            Cursor::new(g.created_at, g.id)
        }))
    }
}

#[async_trait]
impl GoalRepository for PgGoalRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<StudyGoal>> {
        let mut filter = QueryFilter::new();
        filter.push("id = {}");
        let sql = format!(
            "SELECT {GOAL_COLUMNS} FROM study_goals {}",
            filter.where_sql()
        );

        let result = sqlx::query_as::<_, StudyGoalModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(StudyGoal::from))
    }

    #[instrument(skip(self))]
    async fn list_by_owner(
        &self,
        owner_id: Snowflake,
        page: &PageRequest,
    ) -> RepoResult<Page<StudyGoal>> {
        self.list_where("owner_id", owner_id, None, page).await
    }

    #[instrument(skip(self))]
    async fn list_by_community(
        &self,
        community_id: Snowflake,
        page: &PageRequest,
    ) -> RepoResult<Page<StudyGoal>> {
        self.list_where("community_id", community_id, Some("is_team = TRUE"), page)
            .await
    }

    #[instrument(skip(self))]
    async fn create(&self, goal: &StudyGoal) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO study_goals (id, owner_id, community_id, round_id, title, description,
                                     is_team, is_completed, start_date, end_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(goal.id.into_inner())
        .bind(goal.owner_id.into_inner())
        .bind(goal.community_id.map(Snowflake::into_inner))
        .bind(goal.round_id.map(Snowflake::into_inner))
        .bind(&goal.title)
        .bind(&goal.description)
        .bind(goal.is_team)
        .bind(goal.is_completed)
        .bind(goal.start_date)
        .bind(goal.end_date)
        .bind(goal.created_at)
        .bind(goal.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, goal: &StudyGoal) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE study_goals
            SET title = $2, description = $3, is_completed = $4, start_date = $5, end_date = $6,
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(goal.id.into_inner())
        .bind(&goal.title)
        .bind(&goal.description)
        .bind(goal.is_completed)
        .bind(goal.start_date)
        .bind(goal.end_date)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(goal_not_found(goal.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(&soft_delete::by_id_sql("study_goals"))
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(goal_not_found(id));
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
        assert_send_sync::<PgGoalRepository>();
    }
}
