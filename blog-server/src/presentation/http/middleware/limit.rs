use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

pub(crate) fn apply_body_limit(router: Router, limit_bytes: usize) -> Router {
    router.layer(RequestBodyLimitLayer::new(limit_bytes))
}
