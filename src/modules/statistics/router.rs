use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_class_statistics;

pub fn init_statistics_router() -> Router<AppState> {
    Router::new().route("/{class_subject_id}", get(get_class_statistics))
}
