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

use super::model::{
    BatchCreateLessonDto, CopyLessonParams, CreateLessonDto, Lesson, LessonQueryParams,
    UpdateLessonDto,
};
use super::service::LessonService;

/// Create a lesson
#[utoipa::path(
    post,
    path = "/api/lessons",
    request_body = CreateLessonDto,
    responses(
        (status = 201, description = "Lesson created", body = Lesson),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Lessons",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_lesson(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateLessonDto>,
) -> Result<(StatusCode, Json<Lesson>), AppError> {
    let lesson = LessonService::create(&state.db, auth_user.user_id()?, dto).await?;
    Ok((StatusCode::CREATED, Json(lesson)))
}

/// Create one lesson per date in a list
#[utoipa::path(
    post,
    path = "/api/lessons/batch",
    request_body = BatchCreateLessonDto,
    responses(
        (status = 201, description = "Lessons created", body = [Lesson]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Lessons",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_batch_lessons(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<BatchCreateLessonDto>,
) -> Result<(StatusCode, Json<Vec<Lesson>>), AppError> {
    let lessons = LessonService::create_batch(&state.db, auth_user.user_id()?, dto).await?;
    Ok((StatusCode::CREATED, Json(lessons)))
}

/// List lessons with optional class and date-range filters
#[utoipa::path(
    get,
    path = "/api/lessons",
    params(LessonQueryParams),
    responses(
        (status = 200, description = "Lessons sorted by date", body = [Lesson]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Lessons",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_lessons(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<LessonQueryParams>,
) -> Result<Json<Vec<Lesson>>, AppError> {
    let lessons = LessonService::list(&state.db, auth_user.user_id()?, params).await?;
    Ok(Json(lessons))
}

/// Copy a lesson to a new date
#[utoipa::path(
    post,
    path = "/api/lessons/{lesson_id}/copy",
    params(
        ("lesson_id" = Uuid, Path, description = "Lesson id"),
        CopyLessonParams
    ),
    responses(
        (status = 201, description = "Copied lesson", body = Lesson),
        (status = 404, description = "Stunde nicht gefunden", body = ErrorResponse)
    ),
    tag = "Lessons",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn copy_lesson(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(lesson_id): Path<Uuid>,
    Query(params): Query<CopyLessonParams>,
) -> Result<(StatusCode, Json<Lesson>), AppError> {
    let lesson =
        LessonService::copy(&state.db, auth_user.user_id()?, lesson_id, params.new_date).await?;
    Ok((StatusCode::CREATED, Json(lesson)))
}

/// Partially update a lesson
#[utoipa::path(
    put,
    path = "/api/lessons/{lesson_id}",
    params(("lesson_id" = Uuid, Path, description = "Lesson id")),
    request_body = UpdateLessonDto,
    responses(
        (status = 200, description = "Updated lesson", body = Lesson),
        (status = 404, description = "Stunde nicht gefunden", body = ErrorResponse)
    ),
    tag = "Lessons",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_lesson(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(lesson_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateLessonDto>,
) -> Result<Json<Lesson>, AppError> {
    let lesson = LessonService::update(&state.db, auth_user.user_id()?, lesson_id, dto).await?;
    Ok(Json(lesson))
}

/// Delete a lesson
#[utoipa::path(
    delete,
    path = "/api/lessons/{lesson_id}",
    params(("lesson_id" = Uuid, Path, description = "Lesson id")),
    responses(
        (status = 204, description = "Lesson deleted"),
        (status = 404, description = "Stunde nicht gefunden", body = ErrorResponse)
    ),
    tag = "Lessons",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_lesson(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(lesson_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    LessonService::delete(&state.db, auth_user.user_id()?, lesson_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
