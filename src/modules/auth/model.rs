use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// JWT Claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub email: String,
    pub exp: usize,
    pub iat: usize,
}

/// A registered teacher account. The password hash never leaves the service
/// layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub bundesland: String,
    pub theme: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterDto {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "invitation_code must not be empty"))]
    pub invitation_code: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginDto {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Partial settings update; omitted fields keep their current value.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UserSettingsDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub bundesland: Option<String>,
    pub theme: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}
