use utoipa::OpenApi;

use crate::presentation::http::handlers::CreatedDto;
use crate::presentation::http::handlers::comments::{CommentDto, CreateCommentDto};
use crate::presentation::http::handlers::health::HealthzResponse;
use crate::presentation::http::handlers::posts::{CreatePostDto, PostDetailsDto, PostDto};
use crate::presentation::http::handlers::users::{CreateUserDto, UserDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::handlers::health::health_handler,
        crate::presentation::http::handlers::users::get_user,
        crate::presentation::http::handlers::users::create_user,
        crate::presentation::http::handlers::posts::list_posts,
        crate::presentation::http::handlers::posts::get_post,
        crate::presentation::http::handlers::posts::create_post,
        crate::presentation::http::handlers::comments::create_comment
    ),
    components(
        schemas(
            HealthzResponse,
            CreatedDto,
            CreateUserDto,
            UserDto,
            CreatePostDto,
            PostDto,
            PostDetailsDto,
            CreateCommentDto,
            CommentDto
        )
    ),
    tags(
        (name = "users", description = "User endpoints"),
        (name = "posts", description = "Post endpoints"),
        (name = "comments", description = "Comment endpoints"),
        (name = "health", description = "Liveness probe")
    )
)]
pub(crate) struct ApiDoc;
