use axum::Json;
use axum::extract::{Path, Query, State};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{
    WorkplanBulkSaveDto, WorkplanEntry, WorkplanEntryDto, WorkplanRangeParams,
    WorkplanSaveResponse,
};
use super::service::WorkplanService;

/// Workplan entries of a class, optionally restricted to a date range
#[utoipa::path(
    get,
    path = "/api/workplan/{class_subject_id}",
    params(
        ("class_subject_id" = Uuid, Path, description = "Class id"),
        WorkplanRangeParams
    ),
    responses(
        (status = 200, description = "Entries ordered by date and period", body = [WorkplanEntry]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Workplan",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_workplan(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(class_subject_id): Path<Uuid>,
    Query(params): Query<WorkplanRangeParams>,
) -> Result<Json<Vec<WorkplanEntry>>, AppError> {
    let entries = WorkplanService::list(&state.db, class_subject_id, params).await?;
    Ok(Json(entries))
}

/// Save or update one workplan slot
#[utoipa::path(
    post,
    path = "/api/workplan/{class_subject_id}",
    params(("class_subject_id" = Uuid, Path, description = "Class id")),
    request_body = WorkplanEntryDto,
    responses(
        (status = 200, description = "Saved entry", body = WorkplanEntry),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Workplan",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn save_workplan_entry(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(class_subject_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<WorkplanEntryDto>,
) -> Result<Json<WorkplanEntry>, AppError> {
    let entry =
        WorkplanService::save_entry(&state.db, auth_user.user_id()?, class_subject_id, dto).await?;
    Ok(Json(entry))
}

/// Save several workplan slots at once
#[utoipa::path(
    post,
    path = "/api/workplan/{class_subject_id}/bulk",
    params(("class_subject_id" = Uuid, Path, description = "Class id")),
    request_body = WorkplanBulkSaveDto,
    responses(
        (status = 200, description = "Number of saved entries", body = WorkplanSaveResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Workplan",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn save_workplan_bulk(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(class_subject_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<WorkplanBulkSaveDto>,
) -> Result<Json<WorkplanSaveResponse>, AppError> {
    let saved = WorkplanService::save_bulk(
        &state.db,
        auth_user.user_id()?,
        class_subject_id,
        dto.entries,
    )
    .await?;
    Ok(Json(WorkplanSaveResponse { saved }))
}
