use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::utils::errors::AppError;

/// JSON extractor that runs the DTO's `validator` rules after
/// deserializing. Malformed bodies reject with 400, rule violations with
/// 422; both arrive in the usual `{"error": ...}` envelope so clients
/// handle them like any other [`AppError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

/// Flattens `ValidationErrors` into one comma-separated line, preferring
/// the `message = "..."` texts declared on the DTO fields.
fn rule_violations(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors.iter() {
            match &error.message {
                Some(msg) => messages.push(msg.to_string()),
                None => messages.push(format!("{field} is invalid")),
            }
        }
    }
    messages.join(", ")
}

fn body_rejection(rejection: JsonRejection) -> AppError {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return AppError::bad_request(anyhow!(
            "Missing 'Content-Type: application/json' header"
        ));
    }

    // serde_json's message text is the only handle on which field failed;
    // surface the field name for the two common shapes.
    let detail = rejection.body_text();
    if let Some(rest) = detail.split("missing field `").nth(1)
        && let Some(field) = rest.split('`').next()
    {
        return AppError::bad_request(anyhow!("{field} is required"));
    }
    if detail.contains("invalid type") {
        return AppError::bad_request(anyhow!("Invalid field type in request"));
    }

    AppError::bad_request(anyhow!("Invalid request body"))
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(dto) = Json::<T>::from_request(req, state)
            .await
            .map_err(body_rejection)?;

        dto.validate()
            .map_err(|errors| AppError::unprocessable(anyhow!("{}", rule_violations(&errors))))?;

        Ok(ValidatedJson(dto))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, serde::Deserialize, Validate)]
    struct ClassLikeDto {
        #[validate(length(min = 1, message = "name must not be empty"))]
        name: String,
        #[validate(range(min = 1, message = "hours_per_week must be positive"))]
        hours_per_week: i32,
    }

    #[test]
    fn test_rule_violations_prefer_declared_messages() {
        let dto = ClassLikeDto {
            name: String::new(),
            hours_per_week: 0,
        };

        let text = rule_violations(&dto.validate().unwrap_err());

        assert!(text.contains("name must not be empty"));
        assert!(text.contains("hours_per_week must be positive"));
    }

    #[test]
    fn test_valid_dto_has_no_violations() {
        let dto = ClassLikeDto {
            name: "7a".to_string(),
            hours_per_week: 4,
        };

        assert!(dto.validate().is_ok());
    }
}
