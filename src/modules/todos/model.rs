use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Todo {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub class_subject_id: Option<Uuid>,
    pub lesson_id: Option<Uuid>,
    /// "low", "medium" or "high".
    pub priority: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTodoDto {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub class_subject_id: Option<Uuid>,
    pub lesson_id: Option<Uuid>,
    #[serde(default = "default_priority")]
    pub priority: String,
}

fn default_priority() -> String {
    "medium".to_string()
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTodoDto {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<String>,
    pub is_completed: Option<bool>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct TodoQueryParams {
    pub completed: Option<bool>,
    pub class_subject_id: Option<Uuid>,
}
