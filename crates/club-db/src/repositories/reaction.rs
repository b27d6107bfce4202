//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use club_core::entities::Reaction;
use club_core::traits::{ReactionRepository, RepoResult};
use club_core::value_objects::Snowflake;

use crate::models::ReactionModel;
use crate::query::{soft_delete, QueryFilter};

use super::error::{map_db_error, reaction_not_found};

const REACTION_COLUMNS: &str =
    "id, user_id, member_id, text, created_at, updated_at, deleted_at";

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Reaction>> {
        let mut filter = QueryFilter::new();
        filter.push("id = {}");
        let sql = format!(
            "SELECT {REACTION_COLUMNS} FROM reactions {}",
            filter.where_sql()
        );

        let result = sqlx::query_as::<_, ReactionModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Reaction::from))
    }

    #[instrument(skip(self))]
    async fn list_by_member(&self, member_id: Snowflake) -> RepoResult<Vec<Reaction>> {
        let mut filter = QueryFilter::new();
        filter.push("member_id = {}");
        let sql = format!(
            "SELECT {REACTION_COLUMNS} FROM reactions {} ORDER BY created_at ASC, id ASC",
            filter.where_sql()
        );

        let rows = sqlx::query_as::<_, ReactionModel>(&sql)
            .bind(member_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Reaction::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, reaction: &Reaction) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO reactions (id, user_id, member_id, text, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(reaction.id.into_inner())
        .bind(reaction.user_id.into_inner())
        .bind(reaction.member_id.into_inner())
        .bind(&reaction.text)
        .bind(reaction.created_at)
        .bind(reaction.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(&soft_delete::by_id_sql("reactions"))
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(reaction_not_found(id));
        }

        Ok(())
    }
}
