use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// One slot of the table-view plan, keyed by (class, date, period).
/// Lessons and workplan entries coexist; the statistics module reconciles
/// the two representations.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkplanEntry {
    pub id: Uuid,
    pub class_subject_id: Uuid,
    pub date: NaiveDate,
    pub period: i32,
    pub unterrichtseinheit: String,
    pub lehrplan: String,
    pub stundenthema: String,
    pub updated_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct WorkplanEntryDto {
    pub date: NaiveDate,
    #[validate(range(min = 1, max = 10, message = "period must be between 1 and 10"))]
    pub period: i32,
    #[serde(default)]
    pub unterrichtseinheit: String,
    #[serde(default)]
    pub lehrplan: String,
    #[serde(default)]
    pub stundenthema: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct WorkplanBulkSaveDto {
    #[validate(length(min = 1, message = "entries must not be empty"), nested)]
    pub entries: Vec<WorkplanEntryDto>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct WorkplanRangeParams {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WorkplanSaveResponse {
    pub saved: usize,
}
