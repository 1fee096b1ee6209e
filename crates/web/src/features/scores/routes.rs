use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::handlers::{create_score, delete_score, get_score, list_recent_scores};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_score))
        .route("/", get(list_recent_scores))
        .route("/:score_id", get(get_score))
        .route("/:score_id", delete(delete_score))
}
