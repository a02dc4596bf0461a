use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::api;
use crate::app::SharedState;

/// Create the axum router with all routes.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        // --- Core ---
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        // --- Users ---
        .route("/users", get(api::users::get_users).post(api::users::create_user))
        .route("/users/", get(api::users::get_users).post(api::users::create_user))
        .route("/users/{user_id}", get(api::users::get_user))
        .route("/users/{user_id}/achievements", get(api::users::get_user_achievements))
        // --- Achievements ---
        .route("/achievements", get(api::achievements::get_achievements).post(api::achievements::create_achievement))
        .route("/achievements/", get(api::achievements::get_achievements).post(api::achievements::create_achievement))
        .route("/achievements/award", post(api::achievements::award_achievement))
        .route("/achievements/{achievement_id}", get(api::achievements::get_achievement))
        // --- Statistics ---
        .route("/stats/top-by-achievements", get(api::stats::top_by_achievements))
        .route("/stats/top-by-points", get(api::stats::top_by_points))
        .route("/stats/min-max-points-difference", get(api::stats::points_spread))
        .route("/stats/7-day-streak-users", get(api::stats::seven_day_streak_users))
        .route("/stats/streak-users", get(api::stats::streak_users))
        // --- Middleware ---
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Achievements API is running!" }))
}

async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
