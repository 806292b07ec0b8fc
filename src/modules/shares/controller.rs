use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateShareDto, Share, SharedClassResponse};
use super::service::ShareService;

/// Share one of my Arbeitspläne with another teacher
#[utoipa::path(
    post,
    path = "/api/shares",
    request_body = CreateShareDto,
    responses(
        (status = 201, description = "Share created", body = Share),
        (status = 400, description = "Self-share or duplicate", body = ErrorResponse),
        (status = 404, description = "Class or recipient not found", body = ErrorResponse)
    ),
    tag = "Shares",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_share(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateShareDto>,
) -> Result<(StatusCode, Json<Share>), AppError> {
    let share = ShareService::create(&state.db, auth_user.user_id()?, dto).await?;
    Ok((StatusCode::CREATED, Json(share)))
}

/// Shares I have granted
#[utoipa::path(
    get,
    path = "/api/shares/my-shares",
    responses(
        (status = 200, description = "My outgoing shares", body = [Share]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Shares",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_my_shares(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Share>>, AppError> {
    let shares = ShareService::list_my_shares(&state.db, auth_user.user_id()?).await?;
    Ok(Json(shares))
}

/// Classes shared with me
#[utoipa::path(
    get,
    path = "/api/shares/shared-with-me",
    responses(
        (status = 200, description = "Classes other teachers shared with me", body = [SharedClassResponse]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Shares",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_shared_with_me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<SharedClassResponse>>, AppError> {
    let classes = ShareService::list_shared_with_me(&state.db, auth_user.user_id()?).await?;
    Ok(Json(classes))
}

/// Shares of one of my classes
#[utoipa::path(
    get,
    path = "/api/shares/class/{class_subject_id}",
    params(("class_subject_id" = Uuid, Path, description = "Class id")),
    responses(
        (status = 200, description = "Shares of the class", body = [Share]),
        (status = 404, description = "Klasse nicht gefunden", body = ErrorResponse)
    ),
    tag = "Shares",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_class_shares(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(class_subject_id): Path<Uuid>,
) -> Result<Json<Vec<Share>>, AppError> {
    let shares =
        ShareService::list_for_class(&state.db, auth_user.user_id()?, class_subject_id).await?;
    Ok(Json(shares))
}

/// QR code for a share link
#[utoipa::path(
    get,
    path = "/api/shares/{share_id}/qrcode",
    params(("share_id" = Uuid, Path, description = "Share id")),
    responses(
        (status = 200, description = "PNG QR code encoding the share link", content_type = "image/png"),
        (status = 404, description = "Freigabe nicht gefunden", body = ErrorResponse)
    ),
    tag = "Shares",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_share_qrcode(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(share_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let png = ShareService::qrcode_png(
        &state.db,
        auth_user.user_id()?,
        share_id,
        &state.external_config.frontend_url,
    )
    .await?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}

/// Revoke a share
#[utoipa::path(
    delete,
    path = "/api/shares/{share_id}",
    params(("share_id" = Uuid, Path, description = "Share id")),
    responses(
        (status = 204, description = "Share revoked"),
        (status = 404, description = "Freigabe nicht gefunden", body = ErrorResponse)
    ),
    tag = "Shares",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_share(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(share_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    ShareService::delete(&state.db, auth_user.user_id()?, share_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
