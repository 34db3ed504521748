use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::{has_many_query, map_db_error};
use crate::data::comment_repository::{CommentRepository, NewComment};
use crate::domain::comment::Comment;
use crate::domain::error::DomainError;
use crate::domain::relation::{Entity, Relation};

const COMMENT_COLUMNS: &str = "id, body, user_id, post_id, created_at, updated_at";

#[derive(Debug, Clone)]
pub(crate) struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: i64,
    body: String,
    user_id: i64,
    post_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn create_comment(&self, input: NewComment) -> Result<Comment, DomainError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            INSERT INTO comments (body, user_id, post_id)
            VALUES ($1, $2, $3)
            RETURNING id, body, user_id, post_id, created_at, updated_at
            "#,
        )
        .bind(input.body)
        .bind(input.user_id)
        .bind(input.post_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_row_to_comment(row)
    }

    async fn list_related(
        &self,
        relation: Relation,
        owner_id: i64,
    ) -> Result<Vec<Comment>, DomainError> {
        let sql = has_many_query(relation, Entity::Comment, COMMENT_COLUMNS)?;
        let rows = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(map_row_to_comment).collect()
    }
}

fn map_row_to_comment(row: CommentRow) -> Result<Comment, DomainError> {
    Comment::new(
        row.id,
        row.body,
        row.user_id,
        row.post_id,
        row.created_at,
        row.updated_at,
    )
    .map_err(|err| DomainError::Unexpected(err.to_string()))
}
