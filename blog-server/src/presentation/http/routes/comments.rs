use axum::{Router, routing::post};

use crate::presentation::AppState;
use crate::presentation::http::handlers::comments::create_comment;

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/comment", post(create_comment))
}
