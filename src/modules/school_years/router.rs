use axum::{
    Router,
    routing::{delete, post},
};

use crate::state::AppState;

use super::controller::{create_school_year, delete_school_year, get_school_years};

pub fn init_school_years_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_school_year).get(get_school_years))
        .route("/{year_id}", delete(delete_school_year))
}
