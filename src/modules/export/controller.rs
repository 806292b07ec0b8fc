use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::MaterialExportDto;
use super::service::{ExportFile, ExportService};

fn download_response(file: ExportFile) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.filename),
            ),
        ],
        file.bytes,
    )
}

/// Export a class plan as xlsx
#[utoipa::path(
    get,
    path = "/api/export/excel/{class_subject_id}",
    params(("class_subject_id" = Uuid, Path, description = "Class id")),
    responses(
        (status = 200, description = "Spreadsheet download"),
        (status = 404, description = "Class not found", body = ErrorResponse)
    ),
    tag = "Export",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn export_excel(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(class_subject_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let file = ExportService::excel(&state.db, auth_user.user_id()?, class_subject_id).await?;
    Ok(download_response(file))
}

/// Export a class plan as docx
#[utoipa::path(
    get,
    path = "/api/export/word/{class_subject_id}",
    params(("class_subject_id" = Uuid, Path, description = "Class id")),
    responses(
        (status = 200, description = "Word document download"),
        (status = 404, description = "Class not found", body = ErrorResponse)
    ),
    tag = "Export",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn export_word(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(class_subject_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let file = ExportService::word(&state.db, auth_user.user_id()?, class_subject_id).await?;
    Ok(download_response(file))
}

/// Export a class plan as pdf
#[utoipa::path(
    get,
    path = "/api/export/pdf/{class_subject_id}",
    params(("class_subject_id" = Uuid, Path, description = "Class id")),
    responses(
        (status = 200, description = "PDF download"),
        (status = 404, description = "Class not found", body = ErrorResponse)
    ),
    tag = "Export",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn export_pdf(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(class_subject_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let file = ExportService::pdf(&state.db, auth_user.user_id()?, class_subject_id).await?;
    Ok(download_response(file))
}

/// Render AI material as a worksheet/solution zip
#[utoipa::path(
    post,
    path = "/api/export/material",
    request_body = MaterialExportDto,
    responses(
        (status = 200, description = "Zip with worksheet and solution docx"),
        (status = 400, description = "Unknown material type", body = ErrorResponse)
    ),
    tag = "Export",
    security(("bearer_auth" = []))
)]
#[instrument(skip(dto))]
pub async fn export_material(
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<MaterialExportDto>,
) -> Result<impl IntoResponse, AppError> {
    let file = ExportService::material_zip(&dto)?;
    Ok(download_response(file))
}
