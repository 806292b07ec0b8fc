use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::data::holidays::{BUNDESLAENDER, Bundesland, HolidayPeriod, PUBLIC_HOLIDAYS, PublicHoliday, holidays_for};
use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateHolidayDto, Holiday, HolidayQueryParams};
use super::service::HolidayService;

/// List the supported Bundesländer
#[utoipa::path(
    get,
    path = "/api/holidays/bundeslaender",
    responses(
        (status = 200, description = "Bundesländer with holiday data", body = [Bundesland])
    ),
    tag = "Holidays"
)]
#[instrument]
pub async fn get_bundeslaender() -> Json<&'static [Bundesland]> {
    Json(BUNDESLAENDER)
}

/// School holidays 2025/26 for one Bundesland
#[utoipa::path(
    get,
    path = "/api/holidays/school-holidays/{bundesland}",
    params(("bundesland" = String, Path, description = "Bundesland id, e.g. rheinland-pfalz")),
    responses(
        (status = 200, description = "Holiday periods", body = [HolidayPeriod]),
        (status = 404, description = "Bundesland nicht gefunden", body = ErrorResponse)
    ),
    tag = "Holidays"
)]
#[instrument]
pub async fn get_school_holidays(
    Path(bundesland): Path<String>,
) -> Result<Json<&'static [HolidayPeriod]>, AppError> {
    holidays_for(&bundesland)
        .map(Json)
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Bundesland nicht gefunden")))
}

/// German public holidays 2025/26
#[utoipa::path(
    get,
    path = "/api/holidays/public-holidays",
    responses(
        (status = 200, description = "Public holidays", body = [PublicHoliday])
    ),
    tag = "Holidays"
)]
#[instrument]
pub async fn get_public_holidays() -> Json<&'static [PublicHoliday]> {
    Json(PUBLIC_HOLIDAYS)
}

/// Create a holiday range for a school year
#[utoipa::path(
    post,
    path = "/api/holidays",
    request_body = CreateHolidayDto,
    responses(
        (status = 201, description = "Holiday created", body = Holiday),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Holidays",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_holiday(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateHolidayDto>,
) -> Result<(StatusCode, Json<Holiday>), AppError> {
    let holiday = HolidayService::create(&state.db, auth_user.user_id()?, dto).await?;
    Ok((StatusCode::CREATED, Json(holiday)))
}

/// List my holiday ranges
#[utoipa::path(
    get,
    path = "/api/holidays",
    params(HolidayQueryParams),
    responses(
        (status = 200, description = "Holidays", body = [Holiday]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Holidays",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_holidays(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<HolidayQueryParams>,
) -> Result<Json<Vec<Holiday>>, AppError> {
    let holidays =
        HolidayService::list(&state.db, auth_user.user_id()?, params.school_year_id).await?;
    Ok(Json(holidays))
}

/// Delete a holiday range
#[utoipa::path(
    delete,
    path = "/api/holidays/{holiday_id}",
    params(("holiday_id" = Uuid, Path, description = "Holiday id")),
    responses(
        (status = 204, description = "Holiday deleted"),
        (status = 404, description = "Holiday not found", body = ErrorResponse)
    ),
    tag = "Holidays",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_holiday(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(holiday_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    HolidayService::delete(&state.db, auth_user.user_id()?, holiday_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
