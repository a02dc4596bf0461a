//! Users API.

use achievements_db::{Language, LocalizedAchievement, User};
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use crate::app::SharedState;

use super::{ApiError, ListQuery, db_error, err_json, query_error};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    #[serde(default)]
    pub language: Language,
}

/// POST /users/
pub async fn create_user(
    State(state): State<SharedState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state
        .db()
        .create_user(&body.username, body.language)
        .map_err(db_error)?;
    tracing::info!(user_id = user.id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/
pub async fn get_users(
    State(state): State<SharedState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<User>>, ApiError> {
    let Query(query) = query.map_err(query_error)?;
    let (skip, limit) = query.page(state.config().list_limit_max);
    let users = state.db().get_users(skip, limit).map_err(db_error)?;
    Ok(Json(users))
}

/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<SharedState>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    state
        .db()
        .get_user(user_id)
        .map_err(db_error)?
        .map(Json)
        .ok_or_else(|| err_json(StatusCode::NOT_FOUND, "User not found"))
}

/// GET /users/{user_id}/achievements
pub async fn get_user_achievements(
    State(state): State<SharedState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<LocalizedAchievement>>, ApiError> {
    let achievements = state
        .db()
        .get_user_achievements(user_id)
        .map_err(db_error)?;
    Ok(Json(achievements))
}
