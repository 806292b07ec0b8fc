use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::controller::{
    create_share, delete_share, get_class_shares, get_my_shares, get_share_qrcode,
    get_shared_with_me,
};

pub fn init_shares_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_share))
        .route("/my-shares", get(get_my_shares))
        .route("/shared-with-me", get(get_shared_with_me))
        .route("/class/{class_subject_id}", get(get_class_shares))
        .route("/{share_id}/qrcode", get(get_share_qrcode))
        .route("/{share_id}", delete(delete_share))
}
