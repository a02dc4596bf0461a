//! REST API handlers grouped by domain.

pub mod achievements;
pub mod stats;
pub mod users;

use std::fmt::Display;

use achievements_db::DbError;
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};

/// Error response: status plus a `{"detail": ...}` body.
pub type ApiError = (StatusCode, Json<Value>);

const DEFAULT_LIST_LIMIT: u32 = 100;

/// Standard error response.
pub fn err_json(status: StatusCode, message: &str) -> ApiError {
    (status, Json(json!({ "detail": message })))
}

/// Log the cause and answer with an opaque 500.
pub fn internal_error(err: impl Display) -> ApiError {
    tracing::error!("Request failed: {err}");
    err_json(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

/// Map a storage error to its HTTP response.
pub fn db_error(err: DbError) -> ApiError {
    match err {
        DbError::NotFound(message) => err_json(StatusCode::NOT_FOUND, &message),
        DbError::Conflict(message) => err_json(StatusCode::BAD_REQUEST, &message),
        DbError::InvalidData(message) => err_json(StatusCode::UNPROCESSABLE_ENTITY, &message),
        other => internal_error(other),
    }
}

/// Malformed query string: keep axum's status, use the `detail` body.
pub fn query_error(rejection: QueryRejection) -> ApiError {
    err_json(rejection.status(), &rejection.body_text())
}

/// `skip`/`limit` paging parameters of list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl ListQuery {
    /// Resolve to `(skip, limit)` with `limit` capped at `max_limit`.
    pub fn page(&self, max_limit: u32) -> (u32, u32) {
        let limit = self.limit.unwrap_or(DEFAULT_LIST_LIMIT).min(max_limit);
        (self.skip.unwrap_or(0), limit)
    }
}
