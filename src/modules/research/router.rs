use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{search_images, search_papers, search_videos, translate};

pub fn init_research_router() -> Router<AppState> {
    Router::new()
        .route("/images", get(search_images))
        .route("/videos", get(search_videos))
        .route("/papers", get(search_papers))
        .route("/translate", post(translate))
}
