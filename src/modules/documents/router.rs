use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::controller::{delete_document, download_document, get_documents, upload_document};

pub fn init_documents_router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload_document).get(get_documents))
        .route("/{document_id}/download", get(download_document))
        .route("/{document_id}", delete(delete_document))
}
