use sqlx::PgPool;
use std::sync::Arc;

use crate::application::blog_service::BlogService;
use crate::data::repositories::postgres::comment_repository::PostgresCommentRepository;
use crate::data::repositories::postgres::post_repository::PostgresPostRepository;
use crate::data::repositories::postgres::user_repository::PostgresUserRepository;

pub(crate) mod http;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) blog_service: Arc<BlogService>,
}

impl AppState {
    pub(crate) fn new(blog_service: Arc<BlogService>) -> Self {
        Self { blog_service }
    }

    /// Wires the PostgreSQL repositories around a shared pool.
    pub(crate) fn from_pool(pool: PgPool) -> Self {
        let blog_service = BlogService::new(
            Arc::new(PostgresUserRepository::new(pool.clone())),
            Arc::new(PostgresPostRepository::new(pool.clone())),
            Arc::new(PostgresCommentRepository::new(pool)),
        );
        Self::new(Arc::new(blog_service))
    }
}
