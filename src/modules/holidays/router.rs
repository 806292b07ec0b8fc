use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::controller::{
    create_holiday, delete_holiday, get_bundeslaender, get_holidays, get_public_holidays,
    get_school_holidays,
};

pub fn init_holidays_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_holiday).get(get_holidays))
        .route("/bundeslaender", get(get_bundeslaender))
        .route("/school-holidays/{bundesland}", get(get_school_holidays))
        .route("/public-holidays", get(get_public_holidays))
        .route("/{holiday_id}", delete(delete_holiday))
}
