use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{get_workplan, save_workplan_bulk, save_workplan_entry};

pub fn init_workplan_router() -> Router<AppState> {
    Router::new()
        .route(
            "/{class_subject_id}",
            post(save_workplan_entry).get(get_workplan),
        )
        .route("/{class_subject_id}/bulk", post(save_workplan_bulk))
}
