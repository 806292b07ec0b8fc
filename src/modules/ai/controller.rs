use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{MaterialDto, SuggestionsDto, SuggestionsResponse};
use super::service::AiService;

/// Lesson topic suggestions
#[utoipa::path(
    post,
    path = "/api/ai/suggestions",
    request_body = SuggestionsDto,
    responses(
        (status = 200, description = "Up to five suggestions, static fallback on AI failure", body = SuggestionsResponse),
        (status = 500, description = "AI service not configured", body = ErrorResponse)
    ),
    tag = "AI",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn get_suggestions(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<SuggestionsDto>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let response = AiService::suggestions(&state.external_config, &dto).await?;
    Ok(Json(response))
}

/// Generate teaching material
#[utoipa::path(
    post,
    path = "/api/ai/material",
    request_body = MaterialDto,
    responses(
        (status = 200, description = "Generated material JSON"),
        (status = 500, description = "Not configured or unparseable AI answer", body = ErrorResponse),
        (status = 504, description = "KI-Anfrage Timeout", body = ErrorResponse)
    ),
    tag = "AI",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn generate_material(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<MaterialDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    let material = AiService::material(&state.external_config, &dto).await?;
    Ok(Json(material))
}
