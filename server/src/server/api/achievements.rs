//! Achievements and awarding API.

use achievements_db::{Achievement, DbError, NewAchievement, UserAchievement};
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::app::SharedState;

use super::{ApiError, ListQuery, db_error, err_json, query_error};

#[derive(Debug, Deserialize)]
pub struct AwardRequest {
    pub user_id: i64,
    pub achievement_id: i64,
    /// Backdated award time; defaults to now.
    #[serde(default)]
    pub awarded_at: Option<DateTime<Utc>>,
}

/// POST /achievements/
pub async fn create_achievement(
    State(state): State<SharedState>,
    Json(body): Json<NewAchievement>,
) -> Result<(StatusCode, Json<Achievement>), ApiError> {
    let achievement = state.db().create_achievement(&body).map_err(db_error)?;
    tracing::info!(achievement_id = achievement.id, "Achievement created");
    Ok((StatusCode::CREATED, Json(achievement)))
}

/// GET /achievements/
pub async fn get_achievements(
    State(state): State<SharedState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Achievement>>, ApiError> {
    let Query(query) = query.map_err(query_error)?;
    let (skip, limit) = query.page(state.config().list_limit_max);
    let achievements = state
        .db()
        .get_achievements(skip, limit)
        .map_err(db_error)?;
    Ok(Json(achievements))
}

/// GET /achievements/{achievement_id}
pub async fn get_achievement(
    State(state): State<SharedState>,
    Path(achievement_id): Path<i64>,
) -> Result<Json<Achievement>, ApiError> {
    state
        .db()
        .get_achievement(achievement_id)
        .map_err(db_error)?
        .map(Json)
        .ok_or_else(|| err_json(StatusCode::NOT_FOUND, "Achievement not found"))
}

/// POST /achievements/award
///
/// Unknown users or achievements are a bad request here, not a 404.
pub async fn award_achievement(
    State(state): State<SharedState>,
    Json(body): Json<AwardRequest>,
) -> Result<(StatusCode, Json<UserAchievement>), ApiError> {
    let award = state
        .db()
        .award_achievement(body.user_id, body.achievement_id, body.awarded_at)
        .map_err(|e| match e {
            DbError::NotFound(message) => err_json(StatusCode::BAD_REQUEST, &message),
            other => db_error(other),
        })?;
    tracing::info!(
        user_id = award.user_id,
        achievement_id = award.achievement_id,
        "Achievement awarded"
    );
    Ok((StatusCode::CREATED, Json(award)))
}
