use axum::{
    Router,
    routing::{get, post},
};

use crate::presentation::AppState;
use crate::presentation::http::handlers::posts::{create_post, get_post, list_posts};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_posts))
        .route("/post", post(create_post))
        .route("/post/{id}", get(get_post))
}
