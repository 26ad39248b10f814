use crate::models::responses::ErrorResponse;
use crate::models::store::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Reasons a create or update payload is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid status")]
    InvalidStatus,
    #[error("missing author")]
    MissingAuthor,
    #[error("missing title")]
    MissingTitle,
    #[error("identifier must not be supplied")]
    IdentifierSupplied,
    #[error("only status may be provided")]
    OnlyStatusAllowed,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("offset {offset} is out of range for {len} books")]
    Offset { offset: usize, len: usize },
    #[error("limit {limit} is out of range for {len} books")]
    Limit { limit: usize, len: usize },
    #[error("{param} must be a non-negative integer, got {value:?}")]
    NotAnInteger { param: &'static str, value: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("malformed request body: {0}")]
    Decode(String),
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    NotFound(#[from] StoreError),
    #[error("{0}")]
    Range(#[from] RangeError),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}

impl CatalogError {
    /// Every failure here is caused by the client.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });
        (status, body).into_response()
    }
}
