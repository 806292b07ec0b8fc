use axum::{
    Router,
    routing::{post, put},
};

use crate::state::AppState;

use super::controller::{create_class, delete_class, get_classes, update_class};

pub fn init_classes_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_class).get(get_classes))
        .route("/{class_id}", put(update_class).delete(delete_class))
}
