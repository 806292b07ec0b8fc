use axum::Json;
use axum::extract::{Query, State};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{PaperQueryParams, ResearchQueryParams, TranslateDto};
use super::service::ResearchService;

/// Image search for teaching material
#[utoipa::path(
    get,
    path = "/api/research/images",
    params(ResearchQueryParams),
    responses((status = 200, description = "Image results or static search links")),
    tag = "Research",
    security(("bearer_auth" = []))
)]
#[instrument]
pub async fn search_images(
    _auth_user: AuthUser,
    Query(params): Query<ResearchQueryParams>,
) -> Json<serde_json::Value> {
    Json(ResearchService::images(&params.q).await)
}

/// Video search for teaching material
#[utoipa::path(
    get,
    path = "/api/research/videos",
    params(ResearchQueryParams),
    responses((status = 200, description = "Video results or channel suggestions")),
    tag = "Research",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn search_videos(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Query(params): Query<ResearchQueryParams>,
) -> Json<serde_json::Value> {
    Json(ResearchService::videos(&state.external_config, &params.q).await)
}

/// Educational paper search
#[utoipa::path(
    get,
    path = "/api/research/papers",
    params(PaperQueryParams),
    responses((status = 200, description = "Paper results, empty payload on upstream failure")),
    tag = "Research",
    security(("bearer_auth" = []))
)]
#[instrument]
pub async fn search_papers(
    _auth_user: AuthUser,
    Query(params): Query<PaperQueryParams>,
) -> Json<serde_json::Value> {
    Json(ResearchService::papers(&params.q, params.source.as_deref()).await)
}

/// Translate a text to German
#[utoipa::path(
    post,
    path = "/api/research/translate",
    request_body = TranslateDto,
    responses((status = 200, description = "Translation, or passthrough with error note")),
    tag = "Research",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn translate(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<TranslateDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    Ok(Json(
        ResearchService::translate(&state.external_config, &dto).await,
    ))
}
