use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::comments::CommentDto;
use super::posts::PostDto;
use super::{CreatedDto, IncludeQuery, required};
use crate::domain::error::DomainError;
use crate::domain::relation::parse_includes;
use crate::domain::user::{CreateUserRequest, User, UserDetails, UserInclude};
use crate::presentation::AppState;
use crate::presentation::http::app_error::AppResult;

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub(crate) struct CreateUserDto {
    #[validate(length(max = 255))]
    pub(crate) name: Option<String>,
    #[validate(length(max = 255))]
    pub(crate) username: Option<String>,
    #[validate(length(max = 255))]
    pub(crate) email: Option<String>,
}

impl CreateUserDto {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.username.is_none() && self.email.is_none()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct UserDto {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) posts: Option<Vec<PostDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) comments: Option<Vec<CommentDto>>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
            posts: None,
            comments: None,
        }
    }
}

impl From<UserDetails> for UserDto {
    fn from(details: UserDetails) -> Self {
        Self {
            posts: details
                .posts
                .map(|posts| posts.into_iter().map(PostDto::from).collect()),
            comments: details
                .comments
                .map(|comments| comments.into_iter().map(CommentDto::from).collect()),
            ..UserDto::from(details.user)
        }
    }
}

#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User id"),
        IncludeQuery
    ),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 400, description = "Unknown relation in include"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<IncludeQuery>, QueryRejection>,
) -> AppResult<(StatusCode, Json<UserDto>)> {
    let Path(id) = path?;
    let Query(query) = query?;
    let includes = parse_includes::<UserInclude>(query.include.as_deref())?;

    let result = state.blog_service.get_user(id, &includes).await?;

    Ok((StatusCode::OK, Json(UserDto::from(result))))
}

#[utoipa::path(
    post,
    path = "/user",
    tag = "users",
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User created", body = CreatedDto),
        (status = 400, description = "Empty body or validation error"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreatedDto>)> {
    let Json(dto) = payload?;
    if dto.is_empty() {
        return Err(DomainError::EmptyBody.into());
    }
    dto.validate()?;

    let req = CreateUserRequest {
        name: required("name", dto.name)?,
        username: required("username", dto.username)?,
        email: required("email", dto.email)?,
    };

    let user = state.blog_service.create_user(req).await?;
    Ok((StatusCode::OK, Json(CreatedDto { id: user.id })))
}
