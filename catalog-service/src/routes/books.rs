use crate::error::CatalogError;
use crate::models::book::{Book, BookInput};
use crate::services::catalog::{create_book, delete_book, get_book, list_books, update_status};
use crate::services::query::ListQuery;
use crate::utils::params::ListParams;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use tracing::{info, warn};

fn decode_input(body: &[u8]) -> Result<BookInput, CatalogError> {
    serde_json::from_slice(body).map_err(CatalogError::from)
}

fn log_rejection<T>(operation: &str, result: Result<T, CatalogError>) -> Result<T, CatalogError> {
    if let Err(e) = &result {
        warn!("Rejected {}: {}", operation, e);
    }
    result
}

pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Book>, CatalogError> {
    let result = decode_input(&body).and_then(|input| create_book(&state.backend, input));
    log_rejection("create", result).map(Json)
}

pub async fn list(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Book>>, CatalogError> {
    let params: ListParams = pairs.into_iter().collect();
    let result = ListQuery::try_from(params)
        .map_err(CatalogError::from)
        .and_then(|query| list_books(&state.backend, &query, state.pagination));
    log_rejection("list", result).map(Json)
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>, CatalogError> {
    log_rejection("get", get_book(&state.backend, &id)).map(Json)
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Book>, CatalogError> {
    info!("Updating status of book {}", id);
    // An unknown id is reported before a malformed body.
    let result = get_book(&state.backend, &id)
        .and_then(|_| decode_input(&body))
        .and_then(|input| update_status(&state.backend, &id, input));
    log_rejection("update", result).map(Json)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, CatalogError> {
    log_rejection("delete", delete_book(&state.backend, &id)).map(|()| StatusCode::NO_CONTENT)
}
