//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use club_core::entities::{CommunityMember, MemberRole};
use club_core::error::DomainError;
use club_core::traits::{MemberRepository, RepoResult};
use club_core::value_objects::{Cursor, Page, PageRequest, Snowflake};

use crate::models::CommunityMemberModel;
use crate::query::{pagination, soft_delete, QueryFilter};

use super::error::{map_db_error, map_unique_violation, member_not_found};

const MEMBER_COLUMNS: &str =
    "id, community_id, user_id, role, joined_at, updated_at, deleted_at";

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<CommunityMember>> {
        let mut filter = QueryFilter::new();
        filter.push("id = {}");
        let sql = format!(
            "SELECT {MEMBER_COLUMNS} FROM community_members {}",
            filter.where_sql()
        );

        let result = sqlx::query_as::<_, CommunityMemberModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(CommunityMemberModel::into_entity).transpose()
    }

    #[instrument(skip(self))]
    async fn find(
        &self,
        community_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<CommunityMember>> {
        let mut filter = QueryFilter::new();
        filter.push("community_id = {}");
        filter.push("user_id = {}");
        let sql = format!(
            "SELECT {MEMBER_COLUMNS} FROM community_members {}",
            filter.where_sql()
        );

        let result = sqlx::query_as::<_, CommunityMemberModel>(&sql)
            .bind(community_id.into_inner())
            .bind(user_id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(CommunityMemberModel::into_entity).transpose()
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        community_id: Snowflake,
        page: &PageRequest,
    ) -> RepoResult<Page<CommunityMember>> {
        let mut filter = QueryFilter::new();
        filter.push("community_id = {}");
        pagination::push_cursor_window(&mut filter, page, "joined_at");
        let limit_param = filter.claim_param();

        let sql = format!(
            "SELECT {MEMBER_COLUMNS} FROM community_members {} {} LIMIT ${limit_param}",
            filter.where_sql(),
            pagination::order_by_sql(&filter, page, "joined_at"),
        );

        let mut q = sqlx::query_as::<_, CommunityMemberModel>(&sql)
            .bind(community_id.into_inner());
        if let Some(cursor) = page.cursor() {
            q = q.bind(cursor.created_at).bind(cursor.id.into_inner());
        }

        let rows = q
            .bind(page.fetch_limit())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let members = rows
            .into_iter()
            .map(CommunityMemberModel::into_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::assemble(members, page, |m| {
            Cursor::new(m.joined_at, m.id)
        }))
    }

    #[instrument(skip(self))]
    async fn is_member(&self, community_id: Snowflake, user_id: Snowflake) -> RepoResult<bool> {
        let mut filter = QueryFilter::new();
        filter.push("community_id = {}");
        filter.push("user_id = {}");
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM community_members {})",
            filter.where_sql()
        );

        let exists = sqlx::query_scalar::<_, bool>(&sql)
            .bind(community_id.into_inner())
            .bind(user_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn count_admins(&self, community_id: Snowflake) -> RepoResult<i64> {
        let mut filter = QueryFilter::new();
        filter.push("community_id = {}");
        filter.push("role IN ('admin', 'owner')");
        let sql = format!(
            "SELECT COUNT(*) FROM community_members {}",
            filter.where_sql()
        );

        let count = sqlx::query_scalar::<_, i64>(&sql)
            .bind(community_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn create(&self, member: &CommunityMember) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO community_members (id, community_id, user_id, role, joined_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(member.id.into_inner())
        .bind(member.community_id.into_inner())
        .bind(member.user_id.into_inner())
        .bind(member.role.as_str())
        .bind(member.joined_at)
        .bind(member.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyMember))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_role(&self, id: Snowflake, role: MemberRole) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE community_members
            SET role = $2, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.into_inner())
        .bind(role.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(member_not_found());
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(&soft_delete::by_id_sql("community_members"))
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(member_not_found());
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
        assert_send_sync::<PgMemberRepository>();
    }
}
