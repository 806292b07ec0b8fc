use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// A single planned (or cancelled) teaching hour.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Lesson {
    pub id: Uuid,
    pub user_id: Uuid,
    pub class_subject_id: Uuid,
    pub date: NaiveDate,
    /// Stundennummer (1-10) within the day, if the plan tracks periods.
    pub period: Option<i32>,
    pub topic: String,
    pub objective: String,
    pub curriculum_reference: String,
    pub educational_standards: String,
    pub key_terms: String,
    pub notes: String,
    pub teaching_units: i32,
    pub is_cancelled: bool,
    pub cancellation_reason: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLessonDto {
    pub class_subject_id: Uuid,
    pub date: NaiveDate,
    #[validate(range(min = 1, max = 10, message = "period must be between 1 and 10"))]
    pub period: Option<i32>,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub objective: String,
    #[serde(default)]
    pub curriculum_reference: String,
    #[serde(default)]
    pub educational_standards: String,
    #[serde(default)]
    pub key_terms: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default = "default_teaching_units")]
    pub teaching_units: i32,
    #[serde(default)]
    pub is_cancelled: bool,
    #[serde(default)]
    pub cancellation_reason: String,
}

fn default_teaching_units() -> i32 {
    1
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateLessonDto {
    pub topic: Option<String>,
    pub objective: Option<String>,
    pub curriculum_reference: Option<String>,
    pub educational_standards: Option<String>,
    pub key_terms: Option<String>,
    pub notes: Option<String>,
    pub teaching_units: Option<i32>,
    pub is_cancelled: Option<bool>,
    pub cancellation_reason: Option<String>,
    pub date: Option<NaiveDate>,
    #[validate(range(min = 1, max = 10, message = "period must be between 1 and 10"))]
    pub period: Option<i32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BatchCreateLessonDto {
    pub class_subject_id: Uuid,
    #[validate(length(min = 1, message = "dates must not be empty"))]
    pub dates: Vec<NaiveDate>,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub objective: String,
    #[serde(default)]
    pub curriculum_reference: String,
    #[serde(default = "default_teaching_units")]
    pub teaching_units: i32,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct LessonQueryParams {
    pub class_subject_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CopyLessonParams {
    pub new_date: NaiveDate,
}
