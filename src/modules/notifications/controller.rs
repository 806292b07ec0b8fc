use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{Notification, UnreadCountResponse};
use super::service::NotificationService;

/// List my notifications (newest 50)
#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "Notifications", body = [Notification]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Notifications",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_notifications(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Notification>>, AppError> {
    let notifications = NotificationService::list(&state.db, auth_user.user_id()?).await?;
    Ok(Json(notifications))
}

/// Count my unread notifications
#[utoipa::path(
    get,
    path = "/api/notifications/unread-count",
    responses(
        (status = 200, description = "Unread count", body = UnreadCountResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Notifications",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_unread_count(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<UnreadCountResponse>, AppError> {
    let count = NotificationService::unread_count(&state.db, auth_user.user_id()?).await?;
    Ok(Json(UnreadCountResponse { count }))
}

/// Mark one notification as read
#[utoipa::path(
    put,
    path = "/api/notifications/{notification_id}/read",
    params(("notification_id" = Uuid, Path, description = "Notification id")),
    responses(
        (status = 204, description = "Marked as read"),
        (status = 404, description = "Benachrichtigung nicht gefunden", body = ErrorResponse)
    ),
    tag = "Notifications",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn mark_as_read(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(notification_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    NotificationService::mark_read(&state.db, auth_user.user_id()?, notification_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Mark all my notifications as read
#[utoipa::path(
    put,
    path = "/api/notifications/read-all",
    responses(
        (status = 204, description = "All marked as read"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Notifications",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn mark_all_as_read(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<StatusCode, AppError> {
    NotificationService::mark_all_read(&state.db, auth_user.user_id()?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a notification
#[utoipa::path(
    delete,
    path = "/api/notifications/{notification_id}",
    params(("notification_id" = Uuid, Path, description = "Notification id")),
    responses(
        (status = 204, description = "Notification deleted"),
        (status = 404, description = "Benachrichtigung nicht gefunden", body = ErrorResponse)
    ),
    tag = "Notifications",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_notification(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(notification_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    NotificationService::delete(&state.db, auth_user.user_id()?, notification_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
