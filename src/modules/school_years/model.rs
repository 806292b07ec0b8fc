use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SchoolYear {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub semester: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSchoolYearDto {
    /// e.g. "2025/2026"
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// e.g. "1. Halbjahr"
    #[validate(length(min = 1, message = "semester must not be empty"))]
    pub semester: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
