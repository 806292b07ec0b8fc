use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SuggestionsDto {
    #[validate(length(min = 1, message = "subject must not be empty"))]
    pub subject: String,
    #[validate(length(min = 1, message = "topic must not be empty"))]
    pub topic: String,
    #[serde(default)]
    pub klassenstufe: String,
    /// Topics already covered, so suggestions do not repeat them.
    #[serde(default)]
    pub previous_topics: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
    /// True when the static fallback was served instead of the AI.
    pub fallback: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct MaterialDto {
    /// One of: arbeitsblatt, quiz, raetsel, zuordnung, lueckentext.
    #[validate(length(min = 1, message = "material_type must not be empty"))]
    pub material_type: String,
    #[validate(length(min = 1, message = "topic must not be empty"))]
    pub topic: String,
    #[serde(default)]
    pub klassenstufe: String,
    /// Proficiency level G, M or E.
    #[serde(default = "default_niveau")]
    pub niveau: String,
}

fn default_niveau() -> String {
    "M".to_string()
}
