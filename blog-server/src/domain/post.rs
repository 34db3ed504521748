use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::comment::Comment;
use super::error::DomainError;
use super::relation::{Entity, Includable, Relation};
use super::user::User;
use super::validation::{validate_column_width, validate_positive_i64};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Post {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) body: String,
    pub(crate) author: Option<i64>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl Post {
    pub(crate) const AUTHOR: Relation =
        Relation::belongs_to("author", Entity::Post, Entity::User, Some("author"));
    pub(crate) const COMMENTS: Relation = Comment::POST.inverse("comments");

    pub(crate) fn new(
        id: i64,
        title: impl Into<String>,
        body: impl Into<String>,
        author: Option<i64>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        validate_positive_i64("id", id)?;
        if let Some(author) = author {
            validate_positive_i64("author", author)?;
        }

        if updated_at < created_at {
            return Err(DomainError::Validation {
                field: "updated_at",
                message: "must be >= created_at",
            });
        }

        Ok(Self {
            id,
            title: title.into(),
            body: body.into(),
            author,
            created_at,
            updated_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CreatePostRequest {
    pub(crate) title: String,
    pub(crate) body: String,
    pub(crate) author: Option<i64>,
}

impl CreatePostRequest {
    /// `body` is `TEXT` and `author` is checked by its foreign key, so only the title is bounded.
    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        validate_column_width("title", &self.title)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PostInclude {
    Author,
    Comments,
}

impl Includable for PostInclude {
    const ALL: &'static [Self] = &[PostInclude::Author, PostInclude::Comments];

    fn relation(self) -> Relation {
        match self {
            PostInclude::Author => Post::AUTHOR,
            PostInclude::Comments => Post::COMMENTS,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct PostDetails {
    pub(crate) post: Post,
    pub(crate) author: Option<User>,
    pub(crate) comments: Option<Vec<Comment>>,
}
