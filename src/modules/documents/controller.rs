use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{DocumentInfo, DocumentQueryParams};
use super::service::DocumentService;

/// Upload a document (multipart/form-data)
///
/// Expects a `file` part plus a `class_subject_id` field and an optional
/// `lesson_id` field.
#[utoipa::path(
    post,
    path = "/api/documents",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Document stored", body = DocumentInfo),
        (status = 400, description = "Missing file or disallowed type", body = ErrorResponse)
    ),
    tag = "Documents",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, multipart))]
pub async fn upload_document(
    State(state): State<AppState>,
    auth_user: AuthUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<DocumentInfo>), AppError> {
    let mut file: Option<(String, String, Vec<u8>)> = None;
    let mut class_subject_id: Option<Uuid> = None;
    let mut lesson_id: Option<Uuid> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(anyhow::anyhow!("Invalid multipart body: {e}")))?
    {
        match field.name().unwrap_or_default() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::bad_request(anyhow::anyhow!("Failed to read file: {e}"))
                })?;
                file = Some((filename, content_type, bytes.to_vec()));
            }
            "class_subject_id" => {
                let text = field.text().await.map_err(|e| {
                    AppError::bad_request(anyhow::anyhow!("Invalid class_subject_id: {e}"))
                })?;
                class_subject_id = Some(text.parse().map_err(|_| {
                    AppError::bad_request(anyhow::anyhow!("class_subject_id must be a UUID"))
                })?);
            }
            "lesson_id" => {
                let text = field.text().await.map_err(|e| {
                    AppError::bad_request(anyhow::anyhow!("Invalid lesson_id: {e}"))
                })?;
                if !text.is_empty() {
                    lesson_id = Some(text.parse().map_err(|_| {
                        AppError::bad_request(anyhow::anyhow!("lesson_id must be a UUID"))
                    })?);
                }
            }
            _ => {}
        }
    }

    let (filename, content_type, content) =
        file.ok_or_else(|| AppError::bad_request(anyhow::anyhow!("file is required")))?;
    let class_subject_id = class_subject_id
        .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("class_subject_id is required")))?;

    let document = DocumentService::upload(
        &state.db,
        auth_user.user_id()?,
        class_subject_id,
        lesson_id,
        &filename,
        &content_type,
        content,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(document)))
}

/// List my documents (metadata only)
#[utoipa::path(
    get,
    path = "/api/documents",
    params(DocumentQueryParams),
    responses(
        (status = 200, description = "Document metadata", body = [DocumentInfo]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Documents",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_documents(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<DocumentQueryParams>,
) -> Result<Json<Vec<DocumentInfo>>, AppError> {
    let documents = DocumentService::list(&state.db, auth_user.user_id()?, params).await?;
    Ok(Json(documents))
}

/// Download a document
#[utoipa::path(
    get,
    path = "/api/documents/{document_id}/download",
    params(("document_id" = Uuid, Path, description = "Document id")),
    responses(
        (status = 200, description = "The stored file"),
        (status = 404, description = "Document not found", body = ErrorResponse)
    ),
    tag = "Documents",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn download_document(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(document_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let blob = DocumentService::download(&state.db, auth_user.user_id()?, document_id).await?;

    Ok((
        [
            (header::CONTENT_TYPE, blob.content_type),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", blob.filename),
            ),
        ],
        blob.content,
    ))
}

/// Delete a document
#[utoipa::path(
    delete,
    path = "/api/documents/{document_id}",
    params(("document_id" = Uuid, Path, description = "Document id")),
    responses(
        (status = 204, description = "Document deleted"),
        (status = 404, description = "Document not found", body = ErrorResponse)
    ),
    tag = "Documents",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_document(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(document_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    DocumentService::delete(&state.db, auth_user.user_id()?, document_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
