use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_comment, delete_comment, get_comments};

pub fn init_comments_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_comment))
        .route("/{lesson_id}", get(get_comments).delete(delete_comment))
}
