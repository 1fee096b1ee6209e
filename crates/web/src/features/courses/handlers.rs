use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::course::{CourseResponse, CreateCourseRequest, UpdateCourseRequest};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "Active courses sorted by name", body = Vec<CourseResponse>)
    ),
    tag = "courses"
)]
pub async fn list_courses(State(state): State<AppState>) -> Result<Response, WebError> {
    let courses = services::list_active(state.pool()).await?;

    let response: Vec<CourseResponse> = courses.into_iter().map(CourseResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "courses"
)]
pub async fn create_course(
    State(state): State<AppState>,
    Json(req): Json<CreateCourseRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    req.validate_ratings().map_err(WebError::BadRequest)?;

    let course = services::create_course(state.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(CourseResponse::from(course))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/courses/{course_id}",
    params(
        ("course_id" = Uuid, Path, description = "Course to update")
    ),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated", body = CourseResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Course not found")
    ),
    tag = "courses"
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    Json(req): Json<UpdateCourseRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    req.validate_ratings().map_err(WebError::BadRequest)?;

    let course = services::update_course(state.pool(), course_id, &req).await?;

    Ok(Json(CourseResponse::from(course)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/courses/{course_id}",
    params(
        ("course_id" = Uuid, Path, description = "Course to delete")
    ),
    responses(
        (status = 204, description = "Course deleted; existing scores keep their snapshot"),
        (status = 404, description = "Course not found")
    ),
    tag = "courses"
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_course(state.pool(), course_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
