use crate::models::responses::HealthResponse;
use crate::models::store::BookStore;
use crate::AppState;
use axum::{extract::State, response::Json};

pub async fn root() -> &'static str {
    "Welcome to the book catalog"
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "catalog-service".to_string(),
        status: "running".to_string(),
        books: state.backend.len(),
    })
}
