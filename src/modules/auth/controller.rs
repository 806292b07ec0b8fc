use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;
use utoipa::ToSchema;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{LoginDto, RegisterDto, TokenResponse, User, UserSettingsDto};
use super::service::AuthService;

#[derive(serde::Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Register a new account (invitation code required)
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = TokenResponse),
        (status = 400, description = "E-Mail bereits registriert", body = ErrorResponse),
        (status = 403, description = "Ungültiger Einladungs-Code", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterDto>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    let response = AuthService::register(
        &state.db,
        dto,
        &state.jwt_config,
        &state.invitation_config,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login and receive a JWT token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginDto>,
) -> Result<Json<TokenResponse>, AppError> {
    let response = AuthService::login(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(response))
}

/// Get the current authenticated user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user", body = User),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<User>, AppError> {
    let user = AuthService::get_me(&state.db, auth_user.user_id()?).await?;
    Ok(Json(user))
}

/// Update profile settings (partial)
#[utoipa::path(
    put,
    path = "/api/auth/settings",
    request_body = UserSettingsDto,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_settings(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UserSettingsDto>,
) -> Result<Json<User>, AppError> {
    let user = AuthService::update_settings(&state.db, auth_user.user_id()?, dto).await?;
    Ok(Json(user))
}
