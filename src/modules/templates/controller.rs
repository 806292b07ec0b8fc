use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateTemplateDto, Template, TemplateQueryParams};
use super::service::TemplateService;

/// Create a lesson template
#[utoipa::path(
    post,
    path = "/api/templates",
    request_body = CreateTemplateDto,
    responses(
        (status = 201, description = "Template created", body = Template),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Templates",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_template(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateTemplateDto>,
) -> Result<(StatusCode, Json<Template>), AppError> {
    let template = TemplateService::create(&state.db, auth_user.user_id()?, dto).await?;
    Ok((StatusCode::CREATED, Json(template)))
}

/// List my templates, most used first
#[utoipa::path(
    get,
    path = "/api/templates",
    params(TemplateQueryParams),
    responses(
        (status = 200, description = "Templates ordered by use count", body = [Template]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Templates",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_templates(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<TemplateQueryParams>,
) -> Result<Json<Vec<Template>>, AppError> {
    let templates = TemplateService::list(&state.db, auth_user.user_id()?, params.subject).await?;
    Ok(Json(templates))
}

/// Apply a template, incrementing its use counter
#[utoipa::path(
    post,
    path = "/api/templates/{template_id}/use",
    params(("template_id" = Uuid, Path, description = "Template id")),
    responses(
        (status = 200, description = "Template to apply", body = Template),
        (status = 404, description = "Vorlage nicht gefunden", body = ErrorResponse)
    ),
    tag = "Templates",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn use_template(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(template_id): Path<Uuid>,
) -> Result<Json<Template>, AppError> {
    let template = TemplateService::use_template(&state.db, auth_user.user_id()?, template_id).await?;
    Ok(Json(template))
}

/// Delete a template
#[utoipa::path(
    delete,
    path = "/api/templates/{template_id}",
    params(("template_id" = Uuid, Path, description = "Template id")),
    responses(
        (status = 204, description = "Template deleted"),
        (status = 404, description = "Vorlage nicht gefunden", body = ErrorResponse)
    ),
    tag = "Templates",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_template(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(template_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    TemplateService::delete(&state.db, auth_user.user_id()?, template_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
