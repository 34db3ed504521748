use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{CreatedDto, required};
use crate::domain::comment::{Comment, CreateCommentRequest};
use crate::domain::error::DomainError;
use crate::presentation::AppState;
use crate::presentation::http::app_error::AppResult;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub(crate) struct CreateCommentDto {
    pub(crate) body: Option<String>,
    pub(crate) user_id: Option<i64>,
    pub(crate) post_id: Option<i64>,
}

impl CreateCommentDto {
    fn is_empty(&self) -> bool {
        self.body.is_none() && self.user_id.is_none() && self.post_id.is_none()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct CommentDto {
    pub(crate) id: i64,
    pub(crate) body: String,
    pub(crate) user_id: i64,
    pub(crate) post_id: i64,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            body: comment.body,
            user_id: comment.user_id,
            post_id: comment.post_id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

#[utoipa::path(
    post,
    path = "/comment",
    tag = "comments",
    request_body = CreateCommentDto,
    responses(
        (status = 200, description = "Comment created", body = CreatedDto),
        (status = 400, description = "Empty body or missing field"),
        (status = 500, description = "Internal error, e.g. unknown user or post")
    )
)]
pub(crate) async fn create_comment(
    State(state): State<AppState>,
    payload: Result<Json<CreateCommentDto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreatedDto>)> {
    let Json(dto) = payload?;
    if dto.is_empty() {
        return Err(DomainError::EmptyBody.into());
    }

    let req = CreateCommentRequest {
        body: required("body", dto.body)?,
        user_id: required("user_id", dto.user_id)?,
        post_id: required("post_id", dto.post_id)?,
    };

    let comment = state.blog_service.create_comment(req).await?;
    Ok((StatusCode::OK, Json(CreatedDto { id: comment.id })))
}
