use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::comments::CommentDto;
use super::users::UserDto;
use super::{CreatedDto, required};
use crate::domain::error::DomainError;
use crate::domain::post::{CreatePostRequest, Post, PostDetails, PostInclude};
use crate::domain::relation::Includable;
use crate::presentation::AppState;
use crate::presentation::http::app_error::AppResult;

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub(crate) struct CreatePostDto {
    #[validate(length(max = 255))]
    pub(crate) title: Option<String>,
    pub(crate) body: Option<String>,
    /// Id of the authoring user.
    pub(crate) author: Option<i64>,
}

impl CreatePostDto {
    fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none() && self.author.is_none()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PostDto {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) body: String,
    pub(crate) author: Option<i64>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

/// Post with `author` replaced by the nested user and its comments attached.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PostDetailsDto {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) body: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
    pub(crate) author: Option<UserDto>,
    pub(crate) comments: Vec<CommentDto>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            body: post.body,
            author: post.author,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<PostDetails> for PostDetailsDto {
    fn from(details: PostDetails) -> Self {
        Self {
            id: details.post.id,
            title: details.post.title,
            body: details.post.body,
            created_at: details.post.created_at,
            updated_at: details.post.updated_at,
            author: details.author.map(UserDto::from),
            comments: details
                .comments
                .unwrap_or_default()
                .into_iter()
                .map(CommentDto::from)
                .collect(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    responses(
        (status = 200, description = "All posts", body = [PostDto]),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_posts(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<PostDto>>)> {
    let posts = state.blog_service.list_posts().await?;

    Ok((
        StatusCode::OK,
        Json(posts.into_iter().map(PostDto::from).collect()),
    ))
}

#[utoipa::path(
    get,
    path = "/post/{id}",
    tag = "posts",
    params(
        ("id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Post with author and comments", body = PostDetailsDto),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn get_post(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<(StatusCode, Json<PostDetailsDto>)> {
    let Path(id) = path?;
    let result = state.blog_service.get_post(id, PostInclude::ALL).await?;

    Ok((StatusCode::OK, Json(PostDetailsDto::from(result))))
}

#[utoipa::path(
    post,
    path = "/post",
    tag = "posts",
    request_body = CreatePostDto,
    responses(
        (status = 200, description = "Post created", body = CreatedDto),
        (status = 400, description = "Empty body or validation error"),
        (status = 500, description = "Internal error, e.g. unknown author")
    )
)]
pub(crate) async fn create_post(
    State(state): State<AppState>,
    payload: Result<Json<CreatePostDto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreatedDto>)> {
    let Json(dto) = payload?;
    if dto.is_empty() {
        return Err(DomainError::EmptyBody.into());
    }
    dto.validate()?;

    let req = CreatePostRequest {
        title: required("title", dto.title)?,
        body: required("body", dto.body)?,
        author: dto.author,
    };

    let post = state.blog_service.create_post(req).await?;
    Ok((StatusCode::OK, Json(CreatedDto { id: post.id })))
}
