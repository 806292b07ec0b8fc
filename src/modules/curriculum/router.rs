use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    deutsch_hinweise, deutsch_schulbuch, deutsch_schulbuecher, deutsch_struktur, deutsch_thema,
    mathe_schulbuch, mathe_schulbuecher, mathe_struktur, mathe_thema,
};

pub fn init_mathe_router() -> Router<AppState> {
    Router::new()
        .route("/struktur", get(mathe_struktur))
        .route("/thema", get(mathe_thema))
        .route("/schulbuecher", get(mathe_schulbuecher))
        .route("/schulbuch/{id}", get(mathe_schulbuch))
}

pub fn init_deutsch_router() -> Router<AppState> {
    Router::new()
        .route("/struktur", get(deutsch_struktur))
        .route("/thema", get(deutsch_thema))
        .route("/schulbuecher", get(deutsch_schulbuecher))
        .route("/schulbuch/{id}", get(deutsch_schulbuch))
        .route("/hinweise", get(deutsch_hinweise))
}
