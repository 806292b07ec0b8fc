use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{export_excel, export_material, export_pdf, export_word};

pub fn init_export_router() -> Router<AppState> {
    Router::new()
        .route("/excel/{class_subject_id}", get(export_excel))
        .route("/word/{class_subject_id}", get(export_word))
        .route("/pdf/{class_subject_id}", get(export_pdf))
        .route("/material", post(export_material))
}
