use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A grant giving another teacher access to one of my Arbeitspläne.
/// The owner name is denormalized so the shared view needs no extra join.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Share {
    pub id: Uuid,
    pub class_subject_id: Uuid,
    pub owner_id: Uuid,
    pub owner_name: String,
    pub shared_with_id: Uuid,
    pub shared_with_email: String,
    pub can_edit: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateShareDto {
    pub class_subject_id: Uuid,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[serde(default)]
    pub can_edit: bool,
}

/// A class as seen from the recipient's side, enriched with owner details.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct SharedClassResponse {
    pub id: Uuid,
    pub share_id: Uuid,
    pub name: String,
    pub subject: String,
    pub color: String,
    pub hours_per_week: i32,
    pub school_year_id: Uuid,
    #[schema(value_type = Object)]
    pub schedule: serde_json::Value,
    pub owner_name: String,
    pub owner_email: String,
    pub can_edit: bool,
}
