//! PostgreSQL implementation of CommunityRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use club_core::entities::Community;
use club_core::traits::{CommunityQuery, CommunityRepository, RepoResult};
use club_core::value_objects::{Cursor, Page, PageRequest, Snowflake};

use crate::models::CommunityModel;
use crate::query::{pagination, soft_delete, QueryFilter};

use super::error::{community_not_found, map_db_error};

const COMMUNITY_COLUMNS: &str = "id, name, description, is_public, region, sub_region, tags, \
                                 image_url, owner_id, created_at, updated_at, deleted_at";

/// PostgreSQL implementation of CommunityRepository
#[derive(Clone)]
pub struct PgCommunityRepository {
    pool: PgPool,
}

impl PgCommunityRepository {
    /// Create a new PgCommunityRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommunityRepository for PgCommunityRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Community>> {
        let mut filter = QueryFilter::new();
        filter.push("id = {}");
        let sql = format!(
            "SELECT {COMMUNITY_COLUMNS} FROM communities {}",
            filter.where_sql()
        );

        let result = sqlx::query_as::<_, CommunityModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Community::from))
    }

    #[instrument(skip(self))]
    async fn search(
        &self,
        query: &CommunityQuery,
        page: &PageRequest,
    ) -> RepoResult<Page<Community>> {
        let mut filter = QueryFilter::with_alias("c");
        filter.push("c.is_public = TRUE");
        if query.name.is_some() {
            filter.push("c.name ILIKE {}");
        }
        if query.region.is_some() {
            filter.push("c.region = {}");
        }
        if query.sub_region.is_some() {
            filter.push("c.sub_region = {}");
        }
        if query.tag.is_some() {
            filter.push("{} = ANY(c.tags)");
        }
        pagination::push_cursor_window(&mut filter, page, "created_at");
        let limit_param = filter.claim_param();

        let sql = format!(
            "SELECT {COMMUNITY_COLUMNS} FROM communities c {} {} LIMIT ${limit_param}",
            filter.where_sql(),
            pagination::order_by_sql(&filter, page, "created_at"),
        );

        // Binds follow push order exactly
        let mut q = sqlx::query_as::<_, CommunityModel>(&sql);
        if let Some(name) = &query.name {
            q = q.bind(format!("%{name}%"));
        }
        if let Some(region) = &query.region {
            q = q.bind(region);
        }
        if let Some(sub_region) = &query.sub_region {
            q = q.bind(sub_region);
        }
        if let Some(tag) = &query.tag {
            q = q.bind(tag);
        }
        if let Some(cursor) = page.cursor() {
            q = q.bind(cursor.created_at).bind(cursor.id.into_inner());
        }

        let rows = q
            .bind(page.fetch_limit())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let communities: Vec<Community> = rows.into_iter().map(Community::from).collect();
        Ok(Page::assemble(communities, page, |c| {
            Cursor::new(c.created_at, c.id)
        }))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Community>> {
        let mut filter = QueryFilter::with_alias("c");
        filter.push("m.user_id = {}");
        filter.push("m.deleted_at IS NULL");
        let sql = format!(
            "SELECT c.id, c.name, c.description, c.is_public, c.region, c.sub_region, c.tags, \
             c.image_url, c.owner_id, c.created_at, c.updated_at, c.deleted_at \
             FROM communities c \
             JOIN community_members m ON m.community_id = c.id \
             {} ORDER BY m.joined_at DESC",
            filter.where_sql()
        );

        let rows = sqlx::query_as::<_, CommunityModel>(&sql)
            .bind(user_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Community::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, community: &Community) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO communities (id, name, description, is_public, region, sub_region, tags,
                                     image_url, owner_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(community.id.into_inner())
        .bind(&community.name)
        .bind(&community.description)
        .bind(community.is_public)
        .bind(&community.region)
        .bind(&community.sub_region)
        .bind(&community.tags)
        .bind(&community.image_url)
        .bind(community.owner_id.into_inner())
        .bind(community.created_at)
        .bind(community.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, community: &Community) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE communities
            SET name = $2, description = $3, is_public = $4, region = $5, sub_region = $6,
                tags = $7, image_url = $8, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(community.id.into_inner())
        .bind(&community.name)
        .bind(&community.description)
        .bind(community.is_public)
        .bind(&community.region)
        .bind(&community.sub_region)
        .bind(&community.tags)
        .bind(&community.image_url)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(community_not_found(community.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(&soft_delete::by_id_sql("communities"))
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(community_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn member_count(&self, community_id: Snowflake) -> RepoResult<i64> {
        let mut filter = QueryFilter::new();
        filter.push("community_id = {}");
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
}
