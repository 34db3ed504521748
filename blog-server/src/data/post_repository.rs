use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::post::Post;
use crate::domain::relation::Relation;

#[derive(Debug, Clone)]
pub(crate) struct NewPost {
    pub(crate) title: String,
    pub(crate) body: String,
    pub(crate) author: Option<i64>,
}

#[async_trait]
pub(crate) trait PostRepository: Send + Sync {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError>;
    async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError>;
    async fn list_posts(&self) -> Result<Vec<Post>, DomainError>;
    /// Posts whose `relation.foreign_key` column equals `owner_id`.
    async fn list_related(&self, relation: Relation, owner_id: i64)
    -> Result<Vec<Post>, DomainError>;
}
