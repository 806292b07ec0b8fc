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

use super::model::{Comment, CreateCommentDto};
use super::service::CommentService;

/// Comment on a lesson
#[utoipa::path(
    post,
    path = "/api/comments",
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = Comment),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Comments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_comment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateCommentDto>,
) -> Result<(StatusCode, Json<Comment>), AppError> {
    let comment = CommentService::create(&state.db, auth_user.user_id()?, dto).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// List comments for a lesson, newest first
#[utoipa::path(
    get,
    path = "/api/comments/{lesson_id}",
    params(("lesson_id" = Uuid, Path, description = "Lesson id")),
    responses(
        (status = 200, description = "Comments for the lesson", body = [Comment]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Comments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_comments(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(lesson_id): Path<Uuid>,
) -> Result<Json<Vec<Comment>>, AppError> {
    let comments = CommentService::list_for_lesson(&state.db, lesson_id).await?;
    Ok(Json(comments))
}

/// Delete my comment
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    params(("comment_id" = Uuid, Path, description = "Comment id")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 404, description = "Kommentar nicht gefunden", body = ErrorResponse)
    ),
    tag = "Comments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_comment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(comment_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    CommentService::delete(&state.db, auth_user.user_id()?, comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
