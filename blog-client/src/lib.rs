//! Клиентская библиотека для работы с REST API blog-server.
//!
//! Предоставляет `BlogClient` поверх HTTP (`reqwest`): пользователи, посты и
//! комментарии. Создающие методы возвращают идентификатор новой записи.
#![warn(missing_docs)]

mod error;
mod http_client;
mod models;

pub use error::{BlogClientError, BlogClientResult};
pub use models::{Comment, NewComment, NewPost, NewUser, Post, PostDetails, User};

use http_client::HttpClient;

#[derive(Debug, Clone)]
/// Клиент блог-сервиса.
pub struct BlogClient {
    http: HttpClient,
}

impl BlogClient {
    /// Создаёт клиент для сервера с базовым URL, например `http://127.0.0.1:3000`.
    pub fn new(base_url: impl Into<String>) -> BlogClientResult<Self> {
        Ok(Self {
            http: HttpClient::new(base_url)?,
        })
    }

    /// Создаёт пользователя и возвращает его идентификатор.
    pub async fn create_user(&self, user: &NewUser) -> BlogClientResult<i64> {
        self.http.create_user(user).await
    }

    /// Возвращает пользователя по идентификатору.
    ///
    /// `include` перечисляет связи для загрузки: `posts`, `comments`.
    pub async fn get_user(&self, id: i64, include: &[&str]) -> BlogClientResult<User> {
        self.http.get_user(id, include).await
    }

    /// Возвращает все посты.
    pub async fn list_posts(&self) -> BlogClientResult<Vec<Post>> {
        self.http.list_posts().await
    }

    /// Возвращает пост вместе с автором и комментариями.
    pub async fn get_post(&self, id: i64) -> BlogClientResult<PostDetails> {
        self.http.get_post(id).await
    }

    /// Создаёт пост и возвращает его идентификатор.
    pub async fn create_post(&self, post: &NewPost) -> BlogClientResult<i64> {
        self.http.create_post(post).await
    }

    /// Создаёт комментарий и возвращает его идентификатор.
    pub async fn create_comment(&self, comment: &NewComment) -> BlogClientResult<i64> {
        self.http.create_comment(comment).await
    }
}
