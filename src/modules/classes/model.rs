use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// A class/subject combination ("8a Mathematik"), the unit every plan,
/// lesson, and share hangs off.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ClassSubject {
    pub id: Uuid,
    pub user_id: Uuid,
    pub school_year_id: Uuid,
    pub name: String,
    pub subject: String,
    pub color: String,
    pub hours_per_week: i32,
    /// Weekday name -> period numbers, e.g. `{"monday": [3, 4]}`.
    #[schema(value_type = Object)]
    pub schedule: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClassDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "subject must not be empty"))]
    pub subject: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_hours_per_week")]
    pub hours_per_week: i32,
    pub school_year_id: Uuid,
    pub schedule: Option<HashMap<String, Vec<i32>>>,
}

fn default_color() -> String {
    "#3b82f6".to_string()
}

fn default_hours_per_week() -> i32 {
    4
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ClassQueryParams {
    pub school_year_id: Option<Uuid>,
}
