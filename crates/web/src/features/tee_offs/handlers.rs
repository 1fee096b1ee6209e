use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use storage::dto::common::{PaginatedResponse, PaginationParams};
use storage::dto::tee_off::{
    AddGolferRequest, CreateTeeOffRequest, RemoveGolferRequest, TeeOffResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/tee-offs",
    request_body = CreateTeeOffRequest,
    responses(
        (status = 201, description = "Tee-off slot created", body = TeeOffResponse),
        (status = 404, description = "Course, creator or golfer not found")
    ),
    tag = "tee-offs"
)]
pub async fn create_tee_off(
    State(state): State<AppState>,
    Json(req): Json<CreateTeeOffRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let tee_off = services::create_tee_off(state.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(TeeOffResponse::from(tee_off))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/tee-offs",
    params(PaginationParams),
    responses(
        (status = 200, description = "Upcoming tee-off slots", body = PaginatedResponse<TeeOffResponse>)
    ),
    tag = "tee-offs"
)]
pub async fn list_tee_offs(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Response, WebError> {
    params.validate().map_err(WebError::BadRequest)?;

    let today = Utc::now().date_naive();
    let (tee_offs, total_items) =
        services::list_upcoming(state.pool(), today, params.limit(), params.offset()).await?;

    let data: Vec<TeeOffResponse> = tee_offs.into_iter().map(TeeOffResponse::from).collect();

    let response = PaginatedResponse::new(data, params.page, params.page_size, total_items);

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/tee-offs/{tee_off_id}/golfers",
    params(
        ("tee_off_id" = Uuid, Path, description = "Tee-off slot")
    ),
    request_body = AddGolferRequest,
    responses(
        (status = 200, description = "Golfer added", body = TeeOffResponse),
        (status = 404, description = "Tee-off or user not found"),
        (status = 409, description = "Golfer already added")
    ),
    tag = "tee-offs"
)]
pub async fn add_golfer(
    State(state): State<AppState>,
    Path(tee_off_id): Path<Uuid>,
    Json(req): Json<AddGolferRequest>,
) -> Result<Response, WebError> {
    let tee_off = services::add_golfer(state.pool(), tee_off_id, req.user_id).await?;

    Ok(Json(TeeOffResponse::from(tee_off)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/tee-offs/{tee_off_id}/golfers",
    params(
        ("tee_off_id" = Uuid, Path, description = "Tee-off slot")
    ),
    request_body = RemoveGolferRequest,
    responses(
        (status = 200, description = "Golfer removed; empty slots are cancelled", body = TeeOffResponse),
        (status = 404, description = "Tee-off not found"),
        (status = 409, description = "Golfer not in this tee-off")
    ),
    tag = "tee-offs"
)]
pub async fn remove_golfer(
    State(state): State<AppState>,
    Path(tee_off_id): Path<Uuid>,
    Json(req): Json<RemoveGolferRequest>,
) -> Result<Response, WebError> {
    let tee_off = services::remove_golfer(state.pool(), tee_off_id, req.user_id).await?;

    Ok(Json(TeeOffResponse::from(tee_off)).into_response())
}
