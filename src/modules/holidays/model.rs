use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// A user-entered holiday/closure range within one school year. Distinct
/// from the static per-Bundesland school holiday tables.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Holiday {
    pub id: Uuid,
    pub user_id: Uuid,
    pub school_year_id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateHolidayDto {
    pub school_year_id: Uuid,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct HolidayQueryParams {
    pub school_year_id: Option<Uuid>,
}
