use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::data::comment_repository::{CommentRepository, NewComment};
use crate::data::post_repository::{NewPost, PostRepository};
use crate::data::user_repository::{NewUser, UserRepository};
use crate::domain::comment::Comment;
use crate::domain::error::DomainError;
use crate::domain::post::Post;
use crate::domain::relation::{Entity, Relation, RelationKind};
use crate::domain::user::User;

/// In-process stand-in for PostgreSQL: serial ids, store-side timestamps, FK checks.
#[derive(Clone, Default)]
pub(crate) struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    last_user_id: i64,
    last_post_id: i64,
    last_comment_id: i64,
}

impl MemoryStore {
    pub(crate) fn user_count(&self) -> usize {
        self.lock().users.len()
    }

    pub(crate) fn post_count(&self) -> usize {
        self.lock().posts.len()
    }

    pub(crate) fn comment_count(&self) -> usize {
        self.lock().comments.len()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().expect("memory store mutex poisoned")
    }
}

fn foreign_key_violation(constraint: &str) -> DomainError {
    DomainError::Unexpected(format!("foreign key violation: {constraint}"))
}

fn check_has_many(relation: Relation, target: Entity) -> Result<(), DomainError> {
    if relation.kind != RelationKind::HasMany || relation.target != target {
        return Err(DomainError::Unexpected(format!(
            "relation '{}' does not load rows from {}",
            relation.name,
            target.table()
        )));
    }
    Ok(())
}

fn unknown_column(table: &str, column: &str) -> DomainError {
    DomainError::Unexpected(format!("column {table}.{column} does not exist"))
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create_user(&self, input: NewUser) -> Result<User, DomainError> {
        let mut tables = self.lock();
        tables.last_user_id += 1;
        let now = Utc::now();
        let user = User::new(
            tables.last_user_id,
            input.name,
            input.username,
            input.email,
            now,
            now,
        )?;
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, DomainError> {
        Ok(self.lock().users.iter().find(|user| user.id == id).cloned())
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let mut tables = self.lock();
        if let Some(author) = input.author
            && !tables.users.iter().any(|user| user.id == author)
        {
            return Err(foreign_key_violation("posts_author_fkey"));
        }

        tables.last_post_id += 1;
        let now = Utc::now();
        let post = Post::new(
            tables.last_post_id,
            input.title,
            input.body,
            input.author,
            now,
            now,
        )?;
        tables.posts.push(post.clone());
        Ok(post)
    }

    async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError> {
        Ok(self.lock().posts.iter().find(|post| post.id == id).cloned())
    }

    async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.lock().posts.clone())
    }

    async fn list_related(
        &self,
        relation: Relation,
        owner_id: i64,
    ) -> Result<Vec<Post>, DomainError> {
        check_has_many(relation, Entity::Post)?;
        if relation.foreign_key != "author" {
            return Err(unknown_column("posts", relation.foreign_key));
        }

        Ok(self
            .lock()
            .posts
            .iter()
            .filter(|post| post.author == Some(owner_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn create_comment(&self, input: NewComment) -> Result<Comment, DomainError> {
        let mut tables = self.lock();
        if !tables.users.iter().any(|user| user.id == input.user_id) {
            return Err(foreign_key_violation("comments_user_id_fkey"));
        }
        if !tables.posts.iter().any(|post| post.id == input.post_id) {
            return Err(foreign_key_violation("comments_post_id_fkey"));
        }

        tables.last_comment_id += 1;
        let now = Utc::now();
        let comment = Comment::new(
            tables.last_comment_id,
            input.body,
            input.user_id,
            input.post_id,
            now,
            now,
        )?;
        tables.comments.push(comment.clone());
        Ok(comment)
    }

    async fn list_related(
        &self,
        relation: Relation,
        owner_id: i64,
    ) -> Result<Vec<Comment>, DomainError> {
        check_has_many(relation, Entity::Comment)?;
        let column: fn(&Comment) -> i64 = match relation.foreign_key {
            "user_id" => |comment| comment.user_id,
            "post_id" => |comment| comment.post_id,
            other => return Err(unknown_column("comments", other)),
        };

        Ok(self
            .lock()
            .comments
            .iter()
            .filter(|comment| column(comment) == owner_id)
            .cloned()
            .collect())
    }
}
