use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::modules::auth::model::Claims;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that validates the bearer token and yields the authenticated
/// user's claims. Every owned-resource query downstream filters by the
/// user id taken from here.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> Result<uuid::Uuid, AppError> {
        uuid::Uuid::parse_str(&self.0.sub)
            .map_err(|_| AppError::unauthorized(anyhow::anyhow!("Invalid user ID in token")))
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError::unauthorized(anyhow::anyhow!("Missing authorization header"))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::unauthorized(anyhow::anyhow!("Invalid authorization header format"))
        })?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn claims_for(sub: String) -> Claims {
        Claims {
            sub,
            email: "lehrer@test.de".to_string(),
            exp: 9999999999,
            iat: 1234567890,
        }
    }

    #[test]
    fn test_user_id_roundtrip() {
        let user_id = Uuid::new_v4();
        let auth_user = AuthUser(claims_for(user_id.to_string()));

        assert_eq!(auth_user.user_id().unwrap(), user_id);
    }

    #[test]
    fn test_user_id_rejects_garbage_subject() {
        let auth_user = AuthUser(claims_for("not-a-uuid".to_string()));

        assert!(auth_user.user_id().is_err());
    }

    #[test]
    fn test_email_accessor() {
        let auth_user = AuthUser(claims_for(Uuid::new_v4().to_string()));

        assert_eq!(auth_user.email(), "lehrer@test.de");
    }
}
