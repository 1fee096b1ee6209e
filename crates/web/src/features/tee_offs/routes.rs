use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::handlers::{add_golfer, create_tee_off, list_tee_offs, remove_golfer};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_tee_off))
        .route("/", get(list_tee_offs))
        .route("/:tee_off_id/golfers", post(add_golfer))
        .route("/:tee_off_id/golfers", delete(remove_golfer))
}
