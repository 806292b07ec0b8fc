use std::env;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub token_expiry_secs: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "planed-secret-key-2025".to_string()),
            // Fixed 24-hour token lifetime.
            token_expiry_secs: 24 * 3600,
        }
    }
}
