use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Discussion note attached to a lesson. The author name is denormalized at
/// write time so comments stay readable even after profile changes.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Comment {
    pub id: Uuid,
    pub lesson_id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCommentDto {
    pub lesson_id: Uuid,
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,
}
