use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::relation::{Entity, Relation};
use super::validation::validate_positive_i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Comment {
    pub(crate) id: i64,
    pub(crate) body: String,
    pub(crate) user_id: i64,
    pub(crate) post_id: i64,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl Comment {
    pub(crate) const USER: Relation =
        Relation::belongs_to("user", Entity::Comment, Entity::User, None);
    pub(crate) const POST: Relation =
        Relation::belongs_to("post", Entity::Comment, Entity::Post, None);

    pub(crate) fn new(
        id: i64,
        body: impl Into<String>,
        user_id: i64,
        post_id: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        validate_positive_i64("id", id)?;
        validate_positive_i64("user_id", user_id)?;
        validate_positive_i64("post_id", post_id)?;
        if updated_at < created_at {
            return Err(DomainError::Validation {
                field: "updated_at",
                message: "must be >= created_at",
            });
        }

        Ok(Self {
            id,
            body: body.into(),
            user_id,
            post_id,
            created_at,
            updated_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CreateCommentRequest {
    pub(crate) body: String,
    pub(crate) user_id: i64,
    pub(crate) post_id: i64,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::Comment;
    use crate::domain::error::DomainError;

    #[test]
    fn comment_new_rejects_non_positive_post_id() {
        let now = Utc::now();
        let err = Comment::new(3, "comment", 1, 0, now, now).expect_err("post_id must be rejected");
        assert!(matches!(
            err,
            DomainError::Validation {
                field: "post_id",
                ..
            }
        ));
    }

    #[test]
    fn comment_new_builds_comment() {
        let now = Utc::now();
        let comment = Comment::new(3, "hello", 1, 2, now, now).expect("comment must be valid");
        assert_eq!(comment.id, 3);
        assert_eq!(comment.user_id, 1);
        assert_eq!(comment.post_id, 2);
    }
}
