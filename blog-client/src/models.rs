use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Публичная модель пользователя.
pub struct User {
    /// Идентификатор пользователя.
    pub id: i64,
    /// Полное имя.
    pub name: String,
    /// Логин.
    pub username: String,
    /// Email.
    pub email: String,
    /// Дата и время создания пользователя (UTC).
    pub created_at: DateTime<Utc>,
    /// Дата и время последнего обновления пользователя (UTC).
    pub updated_at: DateTime<Utc>,
    /// Посты пользователя, если были запрошены через `include=posts`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts: Option<Vec<Post>>,
    /// Комментарии пользователя, если были запрошены через `include=comments`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Публичная модель поста.
pub struct Post {
    /// Идентификатор поста.
    pub id: i64,
    /// Заголовок поста.
    pub title: String,
    /// Текст поста.
    pub body: String,
    /// Идентификатор автора, если он указан.
    pub author: Option<i64>,
    /// Дата и время создания поста (UTC).
    pub created_at: DateTime<Utc>,
    /// Дата и время последнего обновления поста (UTC).
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Пост вместе с автором и комментариями, как его отдаёт `GET /post/{id}`.
pub struct PostDetails {
    /// Идентификатор поста.
    pub id: i64,
    /// Заголовок поста.
    pub title: String,
    /// Текст поста.
    pub body: String,
    /// Дата и время создания поста (UTC).
    pub created_at: DateTime<Utc>,
    /// Дата и время последнего обновления поста (UTC).
    pub updated_at: DateTime<Utc>,
    /// Автор поста.
    pub author: Option<User>,
    /// Комментарии к посту в порядке создания.
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Публичная модель комментария.
pub struct Comment {
    /// Идентификатор комментария.
    pub id: i64,
    /// Текст комментария.
    pub body: String,
    /// Идентификатор автора комментария.
    pub user_id: i64,
    /// Идентификатор поста.
    pub post_id: i64,
    /// Дата и время создания комментария (UTC).
    pub created_at: DateTime<Utc>,
    /// Дата и время последнего обновления комментария (UTC).
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
/// Данные для создания пользователя.
pub struct NewUser {
    /// Полное имя.
    pub name: String,
    /// Логин.
    pub username: String,
    /// Email.
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
/// Данные для создания поста.
pub struct NewPost {
    /// Заголовок поста.
    pub title: String,
    /// Текст поста.
    pub body: String,
    /// Идентификатор автора.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
/// Данные для создания комментария.
pub struct NewComment {
    /// Текст комментария.
    pub body: String,
    /// Идентификатор автора комментария.
    pub user_id: i64,
    /// Идентификатор поста.
    pub post_id: i64,
}
