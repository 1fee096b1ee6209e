use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::dto::leaderboard::LeaderboardEntry;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    responses(
        (status = 200, description = "Club standings sorted by handicap, then best 18-hole score", body = Vec<LeaderboardEntry>)
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(State(state): State<AppState>) -> Result<Response, WebError> {
    let entries = services::get_leaderboard(state.pool()).await?;

    Ok(Json(entries).into_response())
}
