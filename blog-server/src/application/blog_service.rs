use std::sync::Arc;

use crate::data::comment_repository::{CommentRepository, NewComment};
use crate::data::post_repository::{NewPost, PostRepository};
use crate::data::user_repository::{NewUser, UserRepository};
use crate::domain::comment::{Comment, CreateCommentRequest};
use crate::domain::error::DomainError;
use crate::domain::post::{CreatePostRequest, Post, PostDetails, PostInclude};
use crate::domain::user::{CreateUserRequest, User, UserDetails, UserInclude};

pub(crate) struct BlogService {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl BlogService {
    pub(crate) fn new(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            users,
            posts,
            comments,
        }
    }

    pub(crate) async fn create_user(&self, req: CreateUserRequest) -> Result<User, DomainError> {
        req.validate()?;

        let new_user = NewUser {
            name: req.name,
            username: req.username,
            email: req.email,
        };
        self.users.create_user(new_user).await
    }

    pub(crate) async fn get_user(
        &self,
        id: i64,
        includes: &[UserInclude],
    ) -> Result<UserDetails, DomainError> {
        let user = self
            .users
            .get_user(id)
            .await?
            .ok_or(DomainError::NotFound(format!("user id: {id}")))?;

        let mut details = UserDetails {
            user,
            posts: None,
            comments: None,
        };

        for include in includes {
            match include {
                UserInclude::Posts => {
                    let posts = self.posts.list_related(User::POSTS, id).await?;
                    details.posts = Some(posts);
                }
                UserInclude::Comments => {
                    let comments = self.comments.list_related(User::COMMENTS, id).await?;
                    details.comments = Some(comments);
                }
            }
        }

        Ok(details)
    }

    pub(crate) async fn create_post(&self, req: CreatePostRequest) -> Result<Post, DomainError> {
        req.validate()?;

        let new_post = NewPost {
            title: req.title,
            body: req.body,
            author: req.author,
        };
        self.posts.create_post(new_post).await
    }

    pub(crate) async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        self.posts.list_posts().await
    }

    pub(crate) async fn get_post(
        &self,
        id: i64,
        includes: &[PostInclude],
    ) -> Result<PostDetails, DomainError> {
        let post = self
            .posts
            .get_post(id)
            .await?
            .ok_or(DomainError::NotFound(format!("post id: {id}")))?;

        let mut details = PostDetails {
            post,
            author: None,
            comments: None,
        };

        for include in includes {
            match include {
                PostInclude::Author => {
                    // a dangling author id resolves to no author
                    if let Some(author_id) = details.post.author {
                        details.author = self.users.get_user(author_id).await?;
                    }
                }
                PostInclude::Comments => {
                    let comments = self.comments.list_related(Post::COMMENTS, id).await?;
                    details.comments = Some(comments);
                }
            }
        }

        Ok(details)
    }

    pub(crate) async fn create_comment(
        &self,
        req: CreateCommentRequest,
    ) -> Result<Comment, DomainError> {
        let new_comment = NewComment {
            body: req.body,
            user_id: req.user_id,
            post_id: req.post_id,
        };
        self.comments.create_comment(new_comment).await
    }
}
