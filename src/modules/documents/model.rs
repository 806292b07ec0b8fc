use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Metadata of an uploaded file. The binary blob is only loaded for
/// downloads, never for listings.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct DocumentInfo {
    pub id: Uuid,
    pub user_id: Uuid,
    pub class_subject_id: Uuid,
    pub lesson_id: Option<Uuid>,
    pub filename: String,
    pub content_type: String,
    pub size: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct DocumentBlob {
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct DocumentQueryParams {
    pub class_subject_id: Option<Uuid>,
    pub lesson_id: Option<Uuid>,
}
