use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::score::{
    CreateScoreRequest, CreateScoreResponse, DeleteScoreRequest, DeleteScoreResponse,
    RecentScoreEntry, RecentScoresParams, RecentScoresResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::auth;
use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/scores",
    request_body = CreateScoreRequest,
    responses(
        (status = 201, description = "Score created with computed net score", body = CreateScoreResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Course or user not found")
    ),
    tag = "scores"
)]
pub async fn create_score(
    State(state): State<AppState>,
    Json(req): Json<CreateScoreRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let (score, outcome) = services::create_score(state.pool(), &req).await?;

    tracing::info!(
        user_id = %score.user_id,
        score_id = %score.score_id,
        handicap = outcome.handicap(),
        "score created"
    );

    let response = CreateScoreResponse {
        score: score.into(),
        handicap: outcome.handicap(),
    };

    Ok((StatusCode::CREATED, Json(response)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/scores/{score_id}",
    params(
        ("score_id" = Uuid, Path, description = "Score to delete")
    ),
    request_body = DeleteScoreRequest,
    responses(
        (status = 200, description = "Score deleted, owner's handicap recomputed", body = DeleteScoreResponse),
        (status = 403, description = "Requester is neither owner nor admin"),
        (status = 404, description = "Score not found")
    ),
    tag = "scores"
)]
pub async fn delete_score(
    State(state): State<AppState>,
    Path(score_id): Path<Uuid>,
    Json(req): Json<DeleteScoreRequest>,
) -> Result<Response, WebError> {
    let (owner_id, outcome) = services::delete_score(
        state.pool(),
        score_id,
        req.requesting_user_id,
        req.requesting_user_is_admin,
    )
    .await?;

    // Renew the owner's credential only when the stored handicap moved and
    // the owner is the one holding the session.
    let token = if outcome.changed() && owner_id == req.requesting_user_id {
        let owner = services::find_user(state.pool(), owner_id).await?;
        Some(auth::issue_token(&state.config.jwt_secret, &owner)?)
    } else {
        None
    };

    tracing::info!(%score_id, %owner_id, handicap = outcome.handicap(), "score deleted");

    let response = DeleteScoreResponse {
        handicap: outcome.handicap(),
        token,
    };

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/scores/{score_id}",
    params(
        ("score_id" = Uuid, Path, description = "Score id")
    ),
    responses(
        (status = 200, description = "Score with player and course details", body = RecentScoreEntry),
        (status = 404, description = "Score not found")
    ),
    tag = "scores"
)]
pub async fn get_score(
    State(state): State<AppState>,
    Path(score_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let score = services::get_score_detailed(state.pool(), score_id).await?;

    Ok(Json(score).into_response())
}

#[utoipa::path(
    get,
    path = "/api/scores",
    params(RecentScoresParams),
    responses(
        (status = 200, description = "Most recent rounds across the club", body = RecentScoresResponse)
    ),
    tag = "scores"
)]
pub async fn list_recent_scores(
    State(state): State<AppState>,
    Query(params): Query<RecentScoresParams>,
) -> Result<Response, WebError> {
    let (scores, total_scores) = services::list_recent(state.pool(), params.limit).await?;

    let response = RecentScoresResponse {
        scores,
        total_scores,
    };

    Ok(Json(response).into_response())
}
