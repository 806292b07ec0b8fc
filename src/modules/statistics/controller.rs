use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::StatisticsResponse;
use super::service::StatisticsService;

/// Progress statistics for one class
#[utoipa::path(
    get,
    path = "/api/statistics/{class_subject_id}",
    params(("class_subject_id" = Uuid, Path, description = "Class id")),
    responses(
        (status = 200, description = "Hours, completion and upcoming entries", body = StatisticsResponse),
        (status = 404, description = "Class not found", body = ErrorResponse)
    ),
    tag = "Statistics",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_class_statistics(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(class_subject_id): Path<Uuid>,
) -> Result<Json<StatisticsResponse>, AppError> {
    let stats =
        StatisticsService::class_statistics(&state.db, auth_user.user_id()?, class_subject_id)
            .await?;
    Ok(Json(stats))
}
