use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{generate_material, get_suggestions};

pub fn init_ai_router() -> Router<AppState> {
    Router::new()
        .route("/suggestions", post(get_suggestions))
        .route("/material", post(generate_material))
}
