use axum::Json;
use axum::extract::{Path, Query, State};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{HistoryEntry, HistoryQueryParams};
use super::service::HistoryService;

/// List audit history with optional entity filters
#[utoipa::path(
    get,
    path = "/api/history",
    params(HistoryQueryParams),
    responses(
        (status = 200, description = "History entries, newest first", body = [HistoryEntry]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "History",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_history(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<HistoryQueryParams>,
) -> Result<Json<Vec<HistoryEntry>>, AppError> {
    let entries = HistoryService::list(&state.db, auth_user.user_id()?, params).await?;
    Ok(Json(entries))
}

/// History of one class including its lessons
#[utoipa::path(
    get,
    path = "/api/history/class/{class_subject_id}",
    params(("class_subject_id" = Uuid, Path, description = "Class id")),
    responses(
        (status = 200, description = "History entries, newest first", body = [HistoryEntry]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "History",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_class_history(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(class_subject_id): Path<Uuid>,
) -> Result<Json<Vec<HistoryEntry>>, AppError> {
    let entries = HistoryService::list_for_class(&state.db, class_subject_id).await?;
    Ok(Json(entries))
}
