pub mod image;
use std::sync::Arc;

use crate::ServiceState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

/// Over-long prompts below this size still reach the handler and get the JSON 400.
const MAX_BODY_BYTES: usize = 1024 * 1024;

pub fn create_router(state: Arc<ServiceState>) -> Router {
    let router = Router::new();
    let router = image::add_routers(router);
    let router = router.layer(DefaultBodyLimit::max(MAX_BODY_BYTES));
    router.with_state(state).layer(
        TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default().include_headers(true)),
    )
}
