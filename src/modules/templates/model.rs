use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// A reusable lesson blueprint. `use_count` drives the list ordering so
/// frequently applied templates surface first.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Template {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub subject: String,
    pub topic: String,
    pub objective: String,
    pub curriculum_reference: String,
    pub educational_standards: String,
    pub key_terms: String,
    pub notes: String,
    pub teaching_units: i32,
    pub use_count: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTemplateDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "subject must not be empty"))]
    pub subject: String,
    #[validate(length(min = 1, message = "topic must not be empty"))]
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
}

fn default_teaching_units() -> i32 {
    1
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct TemplateQueryParams {
    pub subject: Option<String>,
}
