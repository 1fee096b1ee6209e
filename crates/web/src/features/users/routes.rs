use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::handlers::{approve_user, deny_user, list_pending_users, login, recompute_handicap, register};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/pending", get(list_pending_users))
        .route("/:user_id/approve", post(approve_user))
        .route("/:user_id", delete(deny_user))
        .route("/:user_id/handicap", post(recompute_handicap))
}
