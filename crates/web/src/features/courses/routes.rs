use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

use super::handlers::{create_course, delete_course, list_courses, update_course};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses))
        .route("/", post(create_course))
        .route("/:course_id", put(update_course))
        .route("/:course_id", delete(delete_course))
}
