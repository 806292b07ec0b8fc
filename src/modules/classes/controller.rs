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

use super::model::{ClassQueryParams, ClassSubject, CreateClassDto};
use super::service::ClassService;

/// Create a class/subject
#[utoipa::path(
    post,
    path = "/api/classes",
    request_body = CreateClassDto,
    responses(
        (status = 201, description = "Class created", body = ClassSubject),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Classes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_class(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateClassDto>,
) -> Result<(StatusCode, Json<ClassSubject>), AppError> {
    let class = ClassService::create(&state.db, auth_user.user_id()?, dto).await?;
    Ok((StatusCode::CREATED, Json(class)))
}

/// List my classes, optionally filtered by school year
#[utoipa::path(
    get,
    path = "/api/classes",
    params(ClassQueryParams),
    responses(
        (status = 200, description = "Classes", body = [ClassSubject]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Classes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_classes(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<ClassQueryParams>,
) -> Result<Json<Vec<ClassSubject>>, AppError> {
    let classes =
        ClassService::list(&state.db, auth_user.user_id()?, params.school_year_id).await?;
    Ok(Json(classes))
}

/// Replace a class
#[utoipa::path(
    put,
    path = "/api/classes/{class_id}",
    params(("class_id" = Uuid, Path, description = "Class id")),
    request_body = CreateClassDto,
    responses(
        (status = 200, description = "Updated class", body = ClassSubject),
        (status = 404, description = "Class not found", body = ErrorResponse)
    ),
    tag = "Classes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_class(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(class_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<CreateClassDto>,
) -> Result<Json<ClassSubject>, AppError> {
    let class = ClassService::update(&state.db, auth_user.user_id()?, class_id, dto).await?;
    Ok(Json(class))
}

/// Delete a class (cascades to its lessons)
#[utoipa::path(
    delete,
    path = "/api/classes/{class_id}",
    params(("class_id" = Uuid, Path, description = "Class id")),
    responses(
        (status = 204, description = "Class deleted"),
        (status = 404, description = "Class not found", body = ErrorResponse)
    ),
    tag = "Classes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_class(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(class_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    ClassService::delete(&state.db, auth_user.user_id()?, class_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
