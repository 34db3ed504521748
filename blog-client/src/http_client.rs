use reqwest::{Client, Method};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;

use crate::error::{BlogClientError, BlogClientResult};
use crate::models::{Comment, NewComment, NewPost, NewUser, Post, PostDetails, User};

#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CreatedDto {
    id: i64,
}

#[derive(Serialize)]
struct IncludeQuery {
    include: String,
}

#[derive(Debug, Clone)]
/// HTTP-клиент для работы с REST API `blog-server`.
pub(crate) struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Создаёт новый HTTP-клиент с базовым URL сервера.
    pub(crate) fn new(base_url: impl Into<String>) -> BlogClientResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode_error(response: reqwest::Response) -> BlogClientError {
        let status = response.status();

        let message = match response.json::<ErrorResponseDto>().await {
            Ok(body) => body.error,
            Err(_) => None,
        };
        BlogClientError::from_http_status(status, message)
    }

    async fn read_json<TRes>(response: reqwest::Response) -> BlogClientResult<TRes>
    where
        TRes: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        response
            .json::<TRes>()
            .await
            .map_err(BlogClientError::from_reqwest)
    }

    /// универсальный helper для POST-запросов, возвращающих `{"id": ...}`
    async fn create<TReq>(&self, path: &str, body: &TReq) -> BlogClientResult<i64>
    where
        TReq: Serialize,
    {
        let response = self
            .client
            .request(Method::POST, self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(BlogClientError::from_reqwest)?;

        let created: CreatedDto = Self::read_json(response).await?;
        Ok(created.id)
    }

    async fn get<TRes>(&self, path: &str, include: &[&str]) -> BlogClientResult<TRes>
    where
        TRes: DeserializeOwned,
    {
        let mut request = self.client.request(Method::GET, self.endpoint(path));
        if !include.is_empty() {
            request = request.query(&IncludeQuery {
                include: include.join(","),
            });
        }

        let response = request
            .send()
            .await
            .map_err(BlogClientError::from_reqwest)?;
        Self::read_json(response).await
    }

    pub(crate) async fn create_user(&self, user: &NewUser) -> BlogClientResult<i64> {
        self.create("/user", user).await
    }

    pub(crate) async fn get_user(&self, id: i64, include: &[&str]) -> BlogClientResult<User> {
        self.get(&format!("/user/{id}"), include).await
    }

    pub(crate) async fn list_posts(&self) -> BlogClientResult<Vec<Post>> {
        self.get("/posts", &[]).await
    }

    pub(crate) async fn get_post(&self, id: i64) -> BlogClientResult<PostDetails> {
        self.get(&format!("/post/{id}"), &[]).await
    }

    pub(crate) async fn create_post(&self, post: &NewPost) -> BlogClientResult<i64> {
        self.create("/post", post).await
    }

    pub(crate) async fn create_comment(&self, comment: &NewComment) -> BlogClientResult<i64> {
        self.create("/comment", comment).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_normalizes_slashes() {
        let client = HttpClient::new("http://localhost:3000/").expect("client must build");
        let full = client.endpoint("/post/7");
        assert_eq!(full, "http://localhost:3000/post/7");
    }

    #[test]
    fn post_details_accepts_null_author() {
        let raw = r#"{
            "id": 3,
            "title": "Test Post",
            "body": "This is just a test post with no content.",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "author": null,
            "comments": []
        }"#;

        let details: PostDetails = serde_json::from_str(raw).expect("must decode");
        assert!(details.author.is_none());
        assert!(details.comments.is_empty());
    }

    #[test]
    fn user_without_includes_has_no_relations() {
        let raw = r#"{
            "id": 1,
            "name": "Sally Low",
            "username": "sally",
            "email": "sally@example.org",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;

        let user: User = serde_json::from_str(raw).expect("must decode");
        assert!(user.posts.is_none());
        assert!(user.comments.is_none());
    }

    #[test]
    fn new_post_without_author_omits_the_field() {
        let post = NewPost {
            title: "t".to_string(),
            body: "b".to_string(),
            author: None,
        };

        let json = serde_json::to_value(&post).expect("must encode");
        assert!(json.get("author").is_none());
    }

    #[test]
    fn comment_decodes_foreign_keys() {
        let raw = r#"{
            "id": 9,
            "body": "first!",
            "user_id": 1,
            "post_id": 3,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;

        let comment: Comment = serde_json::from_str(raw).expect("must decode");
        assert_eq!((comment.user_id, comment.post_id), (1, 3));
    }
}
