use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateSchoolYearDto, SchoolYear};
use super::service::SchoolYearService;

/// Create a school year
#[utoipa::path(
    post,
    path = "/api/school-years",
    request_body = CreateSchoolYearDto,
    responses(
        (status = 201, description = "School year created", body = SchoolYear),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "School Years",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_school_year(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateSchoolYearDto>,
) -> Result<(StatusCode, Json<SchoolYear>), AppError> {
    let year = SchoolYearService::create(&state.db, auth_user.user_id()?, dto).await?;
    Ok((StatusCode::CREATED, Json(year)))
}

/// List my school years
#[utoipa::path(
    get,
    path = "/api/school-years",
    responses(
        (status = 200, description = "School years", body = [SchoolYear]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "School Years",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_school_years(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<SchoolYear>>, AppError> {
    let years = SchoolYearService::list(&state.db, auth_user.user_id()?).await?;
    Ok(Json(years))
}

/// Delete a school year (cascades to its classes and lessons)
#[utoipa::path(
    delete,
    path = "/api/school-years/{year_id}",
    params(("year_id" = Uuid, Path, description = "School year id")),
    responses(
        (status = 204, description = "School year deleted"),
        (status = 404, description = "School year not found", body = ErrorResponse)
    ),
    tag = "School Years",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_school_year(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(year_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    SchoolYearService::delete(&state.db, auth_user.user_id()?, year_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
