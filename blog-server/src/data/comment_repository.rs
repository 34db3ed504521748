use async_trait::async_trait;

use crate::domain::comment::Comment;
use crate::domain::error::DomainError;
use crate::domain::relation::Relation;

#[derive(Debug, Clone)]
pub(crate) struct NewComment {
    pub(crate) body: String,
    pub(crate) user_id: i64,
    pub(crate) post_id: i64,
}

#[async_trait]
pub(crate) trait CommentRepository: Send + Sync {
    async fn create_comment(&self, input: NewComment) -> Result<Comment, DomainError>;
    /// Comments whose `relation.foreign_key` column equals `owner_id`.
    async fn list_related(
        &self,
        relation: Relation,
        owner_id: i64,
    ) -> Result<Vec<Comment>, DomainError>;
}
