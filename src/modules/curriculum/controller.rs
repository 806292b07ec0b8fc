use axum::Json;
use axum::extract::{Path, Query};
use tracing::instrument;

use crate::modules::auth::controller::ErrorResponse;
use crate::utils::errors::AppError;

use super::model::{Fach, SchulbuchQueryParams, ThemaQueryParams};
use super::service::CurriculumService;

// The curriculum is public reference data, so these handlers take no
// bearer token, mirroring the static holiday lookups.

/// Mathematik curriculum structure
#[utoipa::path(
    get,
    path = "/api/mathe/struktur",
    responses((status = 200, description = "Grade bands, competency areas and topics")),
    tag = "Lehrplan Mathematik"
)]
#[instrument]
pub async fn mathe_struktur() -> Json<serde_json::Value> {
    Json(CurriculumService::struktur(Fach::Mathe))
}

/// Mathematik topic detail
#[utoipa::path(
    get,
    path = "/api/mathe/thema",
    params(ThemaQueryParams),
    responses(
        (status = 200, description = "Topic with G/M/E proficiency texts"),
        (status = 404, description = "Thema nicht gefunden", body = ErrorResponse)
    ),
    tag = "Lehrplan Mathematik"
)]
#[instrument]
pub async fn mathe_thema(
    Query(params): Query<ThemaQueryParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    Ok(Json(CurriculumService::thema(Fach::Mathe, &params)?))
}

/// Mathematik textbook catalog
#[utoipa::path(
    get,
    path = "/api/mathe/schulbuecher",
    params(SchulbuchQueryParams),
    responses((status = 200, description = "Textbooks with chapter keys")),
    tag = "Lehrplan Mathematik"
)]
#[instrument]
pub async fn mathe_schulbuecher(
    Query(params): Query<SchulbuchQueryParams>,
) -> Json<Vec<serde_json::Value>> {
    Json(CurriculumService::schulbuecher(Fach::Mathe, &params))
}

/// One Mathematik textbook with chapters
#[utoipa::path(
    get,
    path = "/api/mathe/schulbuch/{id}",
    params(("id" = String, Path, description = "Textbook id")),
    responses(
        (status = 200, description = "Textbook with chapter details"),
        (status = 404, description = "Schulbuch nicht gefunden", body = ErrorResponse)
    ),
    tag = "Lehrplan Mathematik"
)]
#[instrument]
pub async fn mathe_schulbuch(
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    Ok(Json(CurriculumService::schulbuch(Fach::Mathe, &id)?))
}

/// Deutsch curriculum structure
#[utoipa::path(
    get,
    path = "/api/deutsch/struktur",
    responses((status = 200, description = "Grade bands, competency areas and topics")),
    tag = "Lehrplan Deutsch"
)]
#[instrument]
pub async fn deutsch_struktur() -> Json<serde_json::Value> {
    Json(CurriculumService::struktur(Fach::Deutsch))
}

/// Deutsch topic detail
#[utoipa::path(
    get,
    path = "/api/deutsch/thema",
    params(ThemaQueryParams),
    responses(
        (status = 200, description = "Topic with G/M/E proficiency texts"),
        (status = 404, description = "Thema nicht gefunden", body = ErrorResponse)
    ),
    tag = "Lehrplan Deutsch"
)]
#[instrument]
pub async fn deutsch_thema(
    Query(params): Query<ThemaQueryParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    Ok(Json(CurriculumService::thema(Fach::Deutsch, &params)?))
}

/// Deutsch textbook catalog
#[utoipa::path(
    get,
    path = "/api/deutsch/schulbuecher",
    params(SchulbuchQueryParams),
    responses((status = 200, description = "Textbooks with chapter keys")),
    tag = "Lehrplan Deutsch"
)]
#[instrument]
pub async fn deutsch_schulbuecher(
    Query(params): Query<SchulbuchQueryParams>,
) -> Json<Vec<serde_json::Value>> {
    Json(CurriculumService::schulbuecher(Fach::Deutsch, &params))
}

/// One Deutsch textbook with chapters
#[utoipa::path(
    get,
    path = "/api/deutsch/schulbuch/{id}",
    params(("id" = String, Path, description = "Textbook id")),
    responses(
        (status = 200, description = "Textbook with chapter details"),
        (status = 404, description = "Schulbuch nicht gefunden", body = ErrorResponse)
    ),
    tag = "Lehrplan Deutsch"
)]
#[instrument]
pub async fn deutsch_schulbuch(
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    Ok(Json(CurriculumService::schulbuch(Fach::Deutsch, &id)?))
}

/// Assessment guidance for Deutsch
#[utoipa::path(
    get,
    path = "/api/deutsch/hinweise",
    responses((status = 200, description = "Leistungsbewertung guidance")),
    tag = "Lehrplan Deutsch"
)]
#[instrument]
pub async fn deutsch_hinweise() -> Json<serde_json::Value> {
    Json(crate::data::lehrplan_deutsch::HINWEISE_LEISTUNGSBEWERTUNG.clone())
}
