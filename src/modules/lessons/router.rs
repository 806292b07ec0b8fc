use axum::{
    Router,
    routing::{post, put},
};

use crate::state::AppState;

use super::controller::{
    copy_lesson, create_batch_lessons, create_lesson, delete_lesson, get_lessons, update_lesson,
};

pub fn init_lessons_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_lesson).get(get_lessons))
        .route("/batch", post(create_batch_lessons))
        .route("/{lesson_id}/copy", post(copy_lesson))
        .route("/{lesson_id}", put(update_lesson).delete(delete_lesson))
}
