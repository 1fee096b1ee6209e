use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::dto::score::RecomputeHandicapResponse;
use storage::dto::user::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use storage::error::StorageError;
use storage::services::handicap::RecomputeOutcome;
use uuid::Uuid;
use validator::Validate;

use crate::auth;
use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/users/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Member registered, pending approval", body = UserResponse),
        (status = 400, description = "Validation error or email already in use")
    ),
    tag = "users"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let password_hash = bcrypt::hash(&req.password, bcrypt::DEFAULT_COST)?;

    // The unique index on email is the arbiter for duplicates; a lookup
    // beforehand would still race with a concurrent registration.
    let user = match services::register(
        state.pool(),
        &req,
        &password_hash,
        state.config.default_handicap,
    )
    .await
    {
        Ok(user) => user,
        Err(e) if e.is_unique_violation() => {
            return Err(WebError::BadRequest("Email already in use".to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    // Notification delivery is an external concern; the admin-facing event
    // is recorded here.
    tracing::info!(
        admin = %state.config.admin_email,
        member = %user.email,
        name = %user.full_name(),
        "new member registration pending approval"
    );

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))).into_response())
}

#[utoipa::path(
    post,
    path = "/api/users/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid email or password")
    ),
    tag = "users"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let user = services::find_by_email(state.pool(), &req.email)
        .await?
        .ok_or(WebError::Unauthorized)?;

    if !bcrypt::verify(&req.password, &user.password_hash)? {
        return Err(WebError::Unauthorized);
    }

    let token = auth::issue_token(&state.config.jwt_secret, &user)?;

    let response = LoginResponse {
        token,
        user: UserResponse::from(user),
    };

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/pending",
    responses(
        (status = 200, description = "Members awaiting approval", body = Vec<UserResponse>)
    ),
    tag = "users"
)]
pub async fn list_pending_users(State(state): State<AppState>) -> Result<Response, WebError> {
    let users = services::list_pending(state.pool()).await?;

    let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/users/{user_id}/approve",
    params(
        ("user_id" = Uuid, Path, description = "Pending member")
    ),
    responses(
        (status = 200, description = "Member approved", body = UserResponse),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn approve_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let user = services::approve(state.pool(), user_id, &state.config.admin_email).await?;

    tracing::info!(member = %user.email, "member approved");

    Ok(Json(UserResponse::from(user)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    params(
        ("user_id" = Uuid, Path, description = "Member to deny")
    ),
    responses(
        (status = 200, description = "Member denied and removed"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Member has recorded activity")
    ),
    tag = "users"
)]
pub async fn deny_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, WebError> {
    match services::deny(state.pool(), user_id).await {
        Ok(()) => {}
        Err(e) if e.is_foreign_key_violation() => {
            return Err(StorageError::ConstraintViolation(
                "Cannot delete a member with recorded activity".to_string(),
            )
            .into());
        }
        Err(e) => return Err(e.into()),
    }

    Ok(Json(json!({ "message": "User denied and deleted successfully" })).into_response())
}

#[utoipa::path(
    post,
    path = "/api/users/{user_id}/handicap",
    params(
        ("user_id" = Uuid, Path, description = "Member whose handicap to recompute")
    ),
    responses(
        (status = 200, description = "Handicap recomputed", body = RecomputeHandicapResponse),
        (status = 400, description = "No valid scores with course data available"),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn recompute_handicap(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let outcome = services::recompute_handicap(state.pool(), user_id).await?;

    match outcome {
        RecomputeOutcome::InsufficientData { .. } => Err(WebError::InsufficientData),
        RecomputeOutcome::Updated { .. } => {
            let token = if outcome.changed() {
                let user = services::find_by_id(state.pool(), user_id).await?;
                Some(auth::issue_token(&state.config.jwt_secret, &user)?)
            } else {
                None
            };

            tracing::info!(%user_id, handicap = outcome.handicap(), "handicap recomputed");

            let response = RecomputeHandicapResponse {
                handicap: outcome.handicap(),
                token,
            };

            Ok(Json(response).into_response())
        }
    }
}
