use axum::{Router, routing::get};

use crate::presentation::AppState;
use crate::presentation::http::handlers::health::health_handler;

pub(crate) mod comments;
pub(crate) mod posts;
pub(crate) mod users;

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .merge(users::router())
        .merge(posts::router())
        .merge(comments::router())
        .with_state(state)
}
