pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;

use std::sync::Arc;

use axum::{
    Router, middleware as axum_middleware,
    routing::get,
};

use crate::application::catalog::CatalogService;

use middleware::log_responses;

#[derive(Clone)]
pub struct HttpState {
    pub catalog: Arc<CatalogService>,
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/assets",
            get(handlers::list_assets).post(handlers::create_asset),
        )
        .route("/api/assets/{id}", get(handlers::get_asset))
        .route("/api/metrics", get(handlers::metrics))
        .with_state(state)
        .layer(axum_middleware::from_fn(log_responses))
}
