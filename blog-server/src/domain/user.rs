use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::comment::Comment;
use super::error::DomainError;
use super::post::Post;
use super::relation::{Includable, Relation};
use super::validation::{validate_column_width, validate_positive_i64};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct User {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl User {
    pub(crate) const POSTS: Relation = Post::AUTHOR.inverse("posts");
    pub(crate) const COMMENTS: Relation = Comment::USER.inverse("comments");

    pub(crate) fn new(
        id: i64,
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        validate_positive_i64("id", id)?;
        if updated_at < created_at {
            return Err(DomainError::Validation {
                field: "updated_at",
                message: "must be >= created_at",
            });
        }

        Ok(Self {
            id,
            name: name.into(),
            username: username.into(),
            email: email.into(),
            created_at,
            updated_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CreateUserRequest {
    pub(crate) name: String,
    pub(crate) username: String,
    pub(crate) email: String,
}

impl CreateUserRequest {
    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        validate_column_width("name", &self.name)?;
        validate_column_width("username", &self.username)?;
        validate_column_width("email", &self.email)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UserInclude {
    Posts,
    Comments,
}

impl Includable for UserInclude {
    const ALL: &'static [Self] = &[UserInclude::Posts, UserInclude::Comments];

    fn relation(self) -> Relation {
        match self {
            UserInclude::Posts => User::POSTS,
            UserInclude::Comments => User::COMMENTS,
        }
    }
}

/// User together with whatever relations were requested.
///
/// `None` means the relation was not requested, which is different from an empty list.
#[derive(Debug, Clone)]
pub(crate) struct UserDetails {
    pub(crate) user: User,
    pub(crate) posts: Option<Vec<Post>>,
    pub(crate) comments: Option<Vec<Comment>>,
}
