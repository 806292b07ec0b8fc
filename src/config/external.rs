use std::env;

/// Keys for third-party services. A missing key never prevents startup;
/// the endpoints depending on it degrade individually.
#[derive(Clone, Debug)]
pub struct ExternalApiConfig {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub youtube_api_key: Option<String>,
    /// Base URL the frontend is served from, used to build share links.
    pub frontend_url: String,
}

impl ExternalApiConfig {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            youtube_api_key: env::var("YOUTUBE_API_KEY").ok().filter(|k| !k.is_empty()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        }
    }
}
