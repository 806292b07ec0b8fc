use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// AI-generated material to be rendered as a worksheet/solution bundle.
/// `content` carries the type-specific payload produced by the AI module.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct MaterialExportDto {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    /// One of: arbeitsblatt, quiz, lueckentext, raetsel, zuordnung.
    #[validate(length(min = 1, message = "material_type must not be empty"))]
    pub material_type: String,
    #[serde(default)]
    pub instructions: String,
    #[schema(value_type = Object)]
    pub content: serde_json::Value,
}
