//! PostgreSQL implementation of NotificationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use club_core::entities::Notification;
use club_core::traits::{NotificationRepository, RepoResult};
use club_core::value_objects::{Cursor, Page, PageRequest, Snowflake};

use crate::models::NotificationModel;
use crate::query::{pagination, soft_delete, QueryFilter};

use super::error::{map_db_error, notification_not_found};

const NOTIFICATION_COLUMNS: &str =
    "id, community_id, author_id, title, content, is_pinned, created_at, updated_at, deleted_at";

/// PostgreSQL implementation of NotificationRepository
#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    /// Create a new PgNotificationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Notification>> {
        let mut filter = QueryFilter::new();
        filter.push("id = {}");
        let sql = format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications {}",
            filter.where_sql()
        );

        let result = sqlx::query_as::<_, NotificationModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Notification::from))
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        community_id: Snowflake,
        page: &PageRequest,
    ) -> RepoResult<Page<Notification>> {
        let mut filter = QueryFilter::new();
        filter.push("community_id = {}");
        pagination::push_cursor_window(&mut filter, page, "created_at");
        let limit_param = filter.claim_param();

        let sql = format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications {} {} LIMIT ${limit_param}",
            filter.where_sql(),
            pagination::order_by_sql(&filter, page, "created_at"),
        );

        let mut q = sqlx::query_as::<_, NotificationModel>(&sql)
            .bind(community_id.into_inner());
        if let Some(cursor) = page.cursor() {
            q = q.bind(cursor.created_at).bind(cursor.id.into_inner());
        }

        let rows = q
            .bind(page.fetch_limit())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let notifications: Vec<Notification> =
            rows.into_iter().map(Notification::from).collect();
        Ok(Page::assemble(notifications, page, |n| {
            Cursor::new(n.created_at, n.id)
        }))
    }

    #[instrument(skip(self))]
    async fn find_pinned(&self, community_id: Snowflake) -> RepoResult<Option<Notification>> {
        let mut filter = QueryFilter::new();
        filter.push("community_id = {}");
        filter.push("is_pinned = TRUE");
        let sql = format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications {}",
            filter.where_sql()
        );

        let result = sqlx::query_as::<_, NotificationModel>(&sql)
            .bind(community_id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Notification::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, notification: &Notification) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO notifications (id, community_id, author_id, title, content, is_pinned,
                                       created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(notification.id.into_inner())
        .bind(notification.community_id.into_inner())
        .bind(notification.author_id.into_inner())
        .bind(&notification.title)
        .bind(&notification.content)
        .bind(notification.is_pinned)
        .bind(notification.created_at)
        .bind(notification.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, notification: &Notification) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE notifications
            SET title = $2, content = $3, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(notification.id.into_inner())
        .bind(&notification.title)
        .bind(&notification.content)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(notification_not_found(notification.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_pinned(&self, id: Snowflake, pinned: bool) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE notifications
            SET is_pinned = $2, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.into_inner())
        .bind(pinned)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(notification_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(&soft_delete::by_id_sql("notifications"))
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(notification_not_found(id));
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
        assert_send_sync::<PgNotificationRepository>();
    }
}
