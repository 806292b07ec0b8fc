use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ResearchQueryParams {
    /// Search term.
    pub q: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct PaperQueryParams {
    pub q: String,
    /// "semantic" (default) or "openalex".
    pub source: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TranslateDto {
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

fn default_target_language() -> String {
    "Deutsch".to_string()
}
