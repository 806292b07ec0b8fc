use std::time::Duration;

use serde_json::{Value, json};
use tracing::{instrument, warn};

use crate::config::external::ExternalApiConfig;
use crate::utils::errors::AppError;

use super::model::{MaterialDto, SuggestionsDto, SuggestionsResponse};

const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
const SUGGESTIONS_TIMEOUT: Duration = Duration::from_secs(25);
const MATERIAL_TIMEOUT: Duration = Duration::from_secs(45);

/// One chat-completion round trip. Returns the assistant message text;
/// network errors, bad status and timeouts all surface as `Err`.
pub(crate) async fn chat_completion(
    config: &ExternalApiConfig,
    system: &str,
    user: &str,
    timeout: Duration,
) -> Result<String, AppError> {
    let api_key = config
        .openai_api_key
        .as_deref()
        .ok_or_else(|| AppError::internal(anyhow::anyhow!("AI service not configured")))?;

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| AppError::internal(anyhow::anyhow!(e)))?;

    let body = json!({
        "model": config.openai_model,
        "messages": [
            {"role": "system", "content": system},
            {"role": "user", "content": user},
        ],
        "temperature": 0.7,
        "max_tokens": 4000,
    });

    let response = client
        .post(OPENAI_URL)
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                AppError::gateway_timeout(anyhow::anyhow!("KI-Anfrage Timeout"))
            } else {
                AppError::internal(anyhow::anyhow!("AI request failed: {e}"))
            }
        })?;

    if !response.status().is_success() {
        return Err(AppError::internal(anyhow::anyhow!(
            "AI request failed with status {}",
            response.status()
        )));
    }

    let payload: Value = response
        .json()
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("AI response unreadable: {e}")))?;

    payload["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| AppError::internal(anyhow::anyhow!("AI response missing content")))
}

/// Drops markdown code fences the model likes to wrap JSON in.
pub(crate) fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    without_open
        .strip_suffix("```")
        .unwrap_or(without_open)
        .trim()
}

/// Pulls the first top-level JSON array out of free-form model output.
fn extract_json_array(text: &str) -> Option<Vec<String>> {
    let text = strip_code_fences(text);
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    let parsed: Value = serde_json::from_str(&text[start..=end]).ok()?;
    parsed.as_array().map(|items| {
        items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect()
    })
}

fn fallback_suggestions(topic: &str) -> Vec<String> {
    vec![
        format!("Einführung in {topic}"),
        format!("Vertiefung: {topic}"),
        format!("Zusammenfassung {topic}"),
    ]
}

fn niveau_text(niveau: &str) -> &'static str {
    match niveau {
        "G" => "grundlegend",
        "E" => "erweitert",
        _ => "mittel",
    }
}

pub struct AiService;

impl AiService {
    /// Topic suggestions for the next lessons. Degrades to static
    /// suggestions when the AI is slow or returns garbage; only a
    /// missing key is a hard error.
    #[instrument(skip(config, dto))]
    pub async fn suggestions(
        config: &ExternalApiConfig,
        dto: &SuggestionsDto,
    ) -> Result<SuggestionsResponse, AppError> {
        if config.openai_api_key.is_none() {
            return Err(AppError::internal(anyhow::anyhow!(
                "AI service not configured"
            )));
        }

        let system = "Du bist ein erfahrener Lehrer an einer Realschule plus in \
                      Rheinland-Pfalz. Antworte ausschließlich mit einem JSON-Array \
                      von Strings.";
        let user = format!(
            "Schlage 3 Stundenthemen für das Fach {} vor, Thema {}, Klassenstufe {}. \
             Bereits behandelt: {}. Antworte als JSON-Array von Strings.",
            dto.subject,
            dto.topic,
            if dto.klassenstufe.is_empty() {
                "unbekannt"
            } else {
                &dto.klassenstufe
            },
            dto.previous_topics.join(", "),
        );

        match chat_completion(config, system, &user, SUGGESTIONS_TIMEOUT).await {
            Ok(text) => match extract_json_array(&text) {
                Some(mut suggestions) if !suggestions.is_empty() => {
                    suggestions.truncate(5);
                    Ok(SuggestionsResponse {
                        suggestions,
                        fallback: false,
                    })
                }
                _ => {
                    warn!("suggestion response was not a JSON array");
                    Ok(SuggestionsResponse {
                        suggestions: vec!["Vorschlag konnte nicht generiert werden".to_string()],
                        fallback: true,
                    })
                }
            },
            Err(e) => {
                warn!(error = %e.error, "suggestion request failed, serving fallback");
                Ok(SuggestionsResponse {
                    suggestions: fallback_suggestions(&dto.topic),
                    fallback: true,
                })
            }
        }
    }

    /// Generates a material JSON document. Unlike suggestions, failures
    /// here are surfaced: 504 on timeout, 500 on parse failure.
    #[instrument(skip(config, dto))]
    pub async fn material(
        config: &ExternalApiConfig,
        dto: &MaterialDto,
    ) -> Result<Value, AppError> {
        if config.openai_api_key.is_none() {
            return Err(AppError::internal(anyhow::anyhow!(
                "AI service not configured"
            )));
        }

        let schema_hint = match dto.material_type.as_str() {
            "arbeitsblatt" => r#"{"aufgaben": [{"frage": "...", "loesung": "..."}]}"#,
            "quiz" => r#"{"fragen": [{"frage": "...", "optionen": ["..."], "richtig": "..."}]}"#,
            "raetsel" => r#"{"woerter": [{"wort": "...", "hinweis": "..."}]}"#,
            "zuordnung" => r#"{"paare": [{"links": "...", "rechts": "..."}]}"#,
            "lueckentext" => r#"{"text": "... ___ ...", "loesungen": ["..."]}"#,
            other => {
                return Err(AppError::bad_request(anyhow::anyhow!(
                    "Unbekannter Materialtyp: {other}"
                )));
            }
        };

        let system = "Du bist ein erfahrener Lehrer und erstellst \
                      Unterrichtsmaterialien. Antworte ausschließlich mit JSON.";
        let user = format!(
            "Erstelle ein Material vom Typ '{}' zum Thema '{}', Klassenstufe {}, \
             Anforderungsniveau {} ({}). Antworte nur mit JSON im Format: {}",
            dto.material_type,
            dto.topic,
            if dto.klassenstufe.is_empty() {
                "unbekannt"
            } else {
                &dto.klassenstufe
            },
            dto.niveau,
            niveau_text(&dto.niveau),
            schema_hint,
        );

        let text = chat_completion(config, system, &user, MATERIAL_TIMEOUT).await?;
        let content: Value = serde_json::from_str(strip_code_fences(&text))
            .map_err(|_| AppError::internal(anyhow::anyhow!("Fehler beim Parsen der KI-Antwort")))?;

        Ok(json!({
            "title": dto.topic,
            "material_type": dto.material_type,
            "niveau": dto.niveau,
            "content": content,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn config_without_key() -> ExternalApiConfig {
        ExternalApiConfig {
            openai_api_key: None,
            openai_model: "gpt-4o-mini".to_string(),
            youtube_api_key: None,
            frontend_url: "http://localhost:3000".to_string(),
        }
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("```\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fences("{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn test_extract_json_array_from_prose() {
        let text = "Hier sind die Themen:\n[\"Brüche kürzen\", \"Brüche erweitern\"]\nViel Erfolg!";
        let items = extract_json_array(text).unwrap();
        assert_eq!(items, vec!["Brüche kürzen", "Brüche erweitern"]);
    }

    #[test]
    fn test_fallback_suggestions_mention_topic() {
        let suggestions = fallback_suggestions("Bruchrechnung");
        assert_eq!(suggestions.len(), 3);
        assert!(suggestions.iter().all(|s| s.contains("Bruchrechnung")));
    }

    #[test]
    fn test_niveau_mapping() {
        assert_eq!(niveau_text("G"), "grundlegend");
        assert_eq!(niveau_text("M"), "mittel");
        assert_eq!(niveau_text("E"), "erweitert");
        assert_eq!(niveau_text(""), "mittel");
    }

    #[tokio::test]
    async fn test_missing_key_is_a_hard_error() {
        let config = config_without_key();

        let err = AiService::material(
            &config,
            &MaterialDto {
                material_type: "quiz".to_string(),
                topic: "Brüche".to_string(),
                klassenstufe: "5/6".to_string(),
                niveau: "M".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error.to_string(), "AI service not configured");
    }

    #[tokio::test]
    async fn test_unknown_material_type_is_rejected_before_any_request() {
        let config = ExternalApiConfig {
            openai_api_key: Some("test-key".to_string()),
            ..config_without_key()
        };

        let err = AiService::material(
            &config,
            &MaterialDto {
                material_type: "poster".to_string(),
                topic: "Brüche".to_string(),
                klassenstufe: String::new(),
                niveau: "M".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
