use axum::{
    Router,
    routing::{get, post},
};

use crate::presentation::AppState;
use crate::presentation::http::handlers::users::{create_user, get_user};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/user", post(create_user))
        .route("/user/{id}", get(get_user))
}
