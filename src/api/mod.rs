//! HTTP interface.
//!
//! - `POST /check-article-categories`: classify a batch of titles
//! - `GET /health`: liveness and loaded class map size

mod handlers;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::context::Context;

pub use handlers::{CheckRequest, CheckResponse, HealthResponse};

/// Build the router with every route and the request trace layer.
pub fn router(ctx: Context) -> Router {
    Router::new()
        .route(
            "/check-article-categories",
            post(handlers::check_article_categories),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
