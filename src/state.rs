use sqlx::PgPool;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::external::ExternalApiConfig;
use crate::config::invitation::InvitationConfig;
use crate::config::jwt::JwtConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub invitation_config: InvitationConfig,
    pub cors_config: CorsConfig,
    pub external_config: ExternalApiConfig,
}

pub async fn init_app_state() -> AppState {
    AppState {
        db: init_db_pool().await,
        jwt_config: JwtConfig::from_env(),
        invitation_config: InvitationConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        external_config: ExternalApiConfig::from_env(),
    }
}
