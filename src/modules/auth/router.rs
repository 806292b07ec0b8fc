use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

use super::controller::{get_me, login, register, update_settings};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(get_me))
        .route("/settings", put(update_settings))
}
