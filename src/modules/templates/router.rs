use axum::{
    Router,
    routing::{delete, post},
};

use crate::state::AppState;

use super::controller::{create_template, delete_template, get_templates, use_template};

pub fn init_templates_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_template).get(get_templates))
        .route("/{template_id}/use", post(use_template))
        .route("/{template_id}", delete(delete_template))
}
