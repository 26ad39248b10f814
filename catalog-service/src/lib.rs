use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use models::store::{Backend, MemoryStore};
use routes::{
    books::{create, delete, list, show, update},
    health::{health_check, root},
};
use services::query::BoundsPolicy;

/// Shared by every handler. The store is the only mutable state.
#[derive(Clone)]
pub struct AppState {
    pub backend: Backend,
    pub pagination: BoundsPolicy,
}

impl AppState {
    pub fn new(pagination: BoundsPolicy) -> Self {
        Self {
            backend: Arc::new(MemoryStore::new()),
            pagination,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(BoundsPolicy::default())
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/status", get(health_check))
        .route("/books", post(create).get(list))
        .route("/books/:id", get(show).put(update).delete(delete))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
