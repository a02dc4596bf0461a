//! Statistics API. Every query reads a fresh snapshot on the blocking pool.

use achievement_stats::{
    DEFAULT_STREAK_MIN_DAYS, PointsSpread, StatisticsEngine, StatsError, TopUser,
};
use achievements_db::Database;
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::app::SharedState;

use super::{ApiError, internal_error, query_error};

type ApiResult = Result<Json<Value>, ApiError>;

const NO_RANKED_USERS: &str = "No users with achievements found";
const NOT_ENOUGH_USERS: &str = "Not enough users to calculate difference";

#[derive(Debug, Deserialize)]
pub struct StreakQuery {
    pub min_days: Option<u32>,
}

/// Run a statistics query off the async runtime.
async fn run_query<T, F>(state: &SharedState, query: F) -> Result<T, ApiError>
where
    F: FnOnce(&StatisticsEngine<Database>) -> Result<T, StatsError> + Send + 'static,
    T: Send + 'static,
{
    let engine = state.stats().clone();
    tokio::task::spawn_blocking(move || query(&engine))
        .await
        .map_err(internal_error)?
        .map_err(internal_error)
}

/// GET /stats/top-by-achievements
pub async fn top_by_achievements(State(state): State<SharedState>) -> ApiResult {
    let top = run_query(&state, |engine| engine.top_by_achievement_count()).await?;
    Ok(Json(match top {
        TopUser::Ranked(user) => json!({
            "user_id": user.user_id,
            "username": user.username,
            "achievement_count": user.award_count,
        }),
        TopUser::NoRankedUsers => json!({ "message": NO_RANKED_USERS }),
    }))
}

/// GET /stats/top-by-points
pub async fn top_by_points(State(state): State<SharedState>) -> ApiResult {
    let top = run_query(&state, |engine| engine.top_by_points()).await?;
    Ok(Json(match top {
        TopUser::Ranked(user) => json!({
            "user_id": user.user_id,
            "username": user.username,
            "total_points": user.total_points,
        }),
        TopUser::NoRankedUsers => json!({ "message": NO_RANKED_USERS }),
    }))
}

/// GET /stats/min-max-points-difference
pub async fn points_spread(State(state): State<SharedState>) -> ApiResult {
    let spread = run_query(&state, |engine| engine.points_spread()).await?;
    Ok(Json(match spread {
        PointsSpread::Spread {
            min,
            max,
            difference,
        } => json!({
            "min_points_user": {
                "user_id": min.user_id,
                "username": min.username,
                "total_points": min.total_points,
            },
            "max_points_user": {
                "user_id": max.user_id,
                "username": max.username,
                "total_points": max.total_points,
            },
            "points_difference": difference,
        }),
        PointsSpread::InsufficientUsers => json!({ "message": NOT_ENOUGH_USERS }),
    }))
}

/// GET /stats/7-day-streak-users
pub async fn seven_day_streak_users(State(state): State<SharedState>) -> ApiResult {
    streak_response(&state, DEFAULT_STREAK_MIN_DAYS).await
}

/// GET /stats/streak-users?min_days=N
///
/// Without `min_days` the threshold comes from `STREAK_MIN_DAYS`.
pub async fn streak_users(
    State(state): State<SharedState>,
    query: Result<Query<StreakQuery>, QueryRejection>,
) -> ApiResult {
    let Query(query) = query.map_err(query_error)?;
    let min_days = query.min_days.unwrap_or(state.config().streak_min_days);
    streak_response(&state, min_days).await
}

async fn streak_response(state: &SharedState, min_days: u32) -> ApiResult {
    let streaks =
        run_query(state, move |engine| engine.consecutive_day_streaks(min_days)).await?;
    let body = serde_json::to_value(streaks).map_err(internal_error)?;
    Ok(Json(body))
}
