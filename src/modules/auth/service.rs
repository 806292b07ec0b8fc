use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::invitation::InvitationConfig;
use crate::config::jwt::JwtConfig;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{LoginDto, RegisterDto, TokenResponse, User, UserSettingsDto};

pub struct AuthService;

impl AuthService {
    #[instrument(skip(dto, jwt_config, invitation_config))]
    pub async fn register(
        db: &PgPool,
        dto: RegisterDto,
        jwt_config: &JwtConfig,
        invitation_config: &InvitationConfig,
    ) -> Result<TokenResponse, AppError> {
        if dto.invitation_code != invitation_config.code {
            return Err(AppError::forbidden(anyhow::anyhow!(
                "Ungültiger Einladungs-Code"
            )));
        }

        let existing = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await?;

        if existing.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "E-Mail bereits registriert"
            )));
        }

        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password, name)
             VALUES ($1, $2, $3)
             RETURNING id, email, name, bundesland, theme, created_at",
        )
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(&dto.name)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                AppError::bad_request(anyhow::anyhow!("E-Mail bereits registriert"))
            } else {
                AppError::internal(e)
            }
        })?;

        let access_token = create_access_token(user.id, &user.email, jwt_config)?;

        Ok(TokenResponse {
            access_token,
            token_type: "bearer".to_string(),
            user,
        })
    }

    #[instrument(skip(dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginDto,
        jwt_config: &JwtConfig,
    ) -> Result<TokenResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            email: String,
            name: String,
            bundesland: String,
            theme: String,
            created_at: chrono::DateTime<chrono::Utc>,
            password: String,
        }

        let row = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, email, name, bundesland, theme, created_at, password
             FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Invalid credentials")))?;

        if !verify_password(&dto.password, &row.password)? {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Invalid credentials"
            )));
        }

        let access_token = create_access_token(row.id, &row.email, jwt_config)?;

        Ok(TokenResponse {
            access_token,
            token_type: "bearer".to_string(),
            user: User {
                id: row.id,
                email: row.email,
                name: row.name,
                bundesland: row.bundesland,
                theme: row.theme,
                created_at: row.created_at,
            },
        })
    }

    #[instrument]
    pub async fn get_me(db: &PgPool, user_id: Uuid) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, name, bundesland, theme, created_at FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))
    }

    #[instrument(skip(dto))]
    pub async fn update_settings(
        db: &PgPool,
        user_id: Uuid,
        dto: UserSettingsDto,
    ) -> Result<User, AppError> {
        let existing = Self::get_me(db, user_id).await?;

        sqlx::query_as::<_, User>(
            "UPDATE users SET name = $1, bundesland = $2, theme = $3
             WHERE id = $4
             RETURNING id, email, name, bundesland, theme, created_at",
        )
        .bind(dto.name.unwrap_or(existing.name))
        .bind(dto.bundesland.unwrap_or(existing.bundesland))
        .bind(dto.theme.unwrap_or(existing.theme))
        .bind(user_id)
        .fetch_one(db)
        .await
        .map_err(AppError::internal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            token_expiry_secs: 3600,
        }
    }

    fn test_invitation_config() -> InvitationConfig {
        InvitationConfig {
            code: "LASP2026".to_string(),
        }
    }

    fn register_dto(email: &str) -> RegisterDto {
        RegisterDto {
            email: email.to_string(),
            password: "geheim123".to_string(),
            name: "Maria Muster".to_string(),
            invitation_code: "LASP2026".to_string(),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_register_returns_token_and_defaults(pool: PgPool) {
        let response = AuthService::register(
            &pool,
            register_dto("maria@schule.de"),
            &test_jwt_config(),
            &test_invitation_config(),
        )
        .await
        .unwrap();

        assert!(!response.access_token.is_empty());
        assert_eq!(response.token_type, "bearer");
        assert_eq!(response.user.email, "maria@schule.de");
        assert_eq!(response.user.bundesland, "rheinland-pfalz");
        assert_eq!(response.user.theme, "dark");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_register_rejects_wrong_invitation_code(pool: PgPool) {
        let mut dto = register_dto("maria@schule.de");
        dto.invitation_code = "FALSCH".to_string();

        let err = AuthService::register(&pool, dto, &test_jwt_config(), &test_invitation_config())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.error.to_string(), "Ungültiger Einladungs-Code");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_register_rejects_duplicate_email(pool: PgPool) {
        AuthService::register(
            &pool,
            register_dto("maria@schule.de"),
            &test_jwt_config(),
            &test_invitation_config(),
        )
        .await
        .unwrap();

        let err = AuthService::register(
            &pool,
            register_dto("maria@schule.de"),
            &test_jwt_config(),
            &test_invitation_config(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error.to_string(), "E-Mail bereits registriert");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_login_with_valid_credentials(pool: PgPool) {
        AuthService::register(
            &pool,
            register_dto("maria@schule.de"),
            &test_jwt_config(),
            &test_invitation_config(),
        )
        .await
        .unwrap();

        let response = AuthService::login(
            &pool,
            LoginDto {
                email: "maria@schule.de".to_string(),
                password: "geheim123".to_string(),
            },
            &test_jwt_config(),
        )
        .await
        .unwrap();

        assert_eq!(response.user.name, "Maria Muster");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_login_rejects_wrong_password(pool: PgPool) {
        AuthService::register(
            &pool,
            register_dto("maria@schule.de"),
            &test_jwt_config(),
            &test_invitation_config(),
        )
        .await
        .unwrap();

        let err = AuthService::login(
            &pool,
            LoginDto {
                email: "maria@schule.de".to_string(),
                password: "falsch".to_string(),
            },
            &test_jwt_config(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_login_rejects_unknown_email(pool: PgPool) {
        let err = AuthService::login(
            &pool,
            LoginDto {
                email: "niemand@schule.de".to_string(),
                password: "geheim123".to_string(),
            },
            &test_jwt_config(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_settings_is_partial(pool: PgPool) {
        let registered = AuthService::register(
            &pool,
            register_dto("maria@schule.de"),
            &test_jwt_config(),
            &test_invitation_config(),
        )
        .await
        .unwrap();

        let updated = AuthService::update_settings(
            &pool,
            registered.user.id,
            UserSettingsDto {
                name: None,
                bundesland: Some("bayern".to_string()),
                theme: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.name, "Maria Muster");
        assert_eq!(updated.bundesland, "bayern");
        assert_eq!(updated.theme, "dark");
    }
}
