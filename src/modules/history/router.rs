use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_class_history, get_history};

pub fn init_history_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_history))
        .route("/class/{class_subject_id}", get(get_class_history))
}
