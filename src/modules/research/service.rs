use std::collections::BTreeMap;
use std::time::Duration;

use serde_json::{Value, json};
use tracing::{instrument, warn};

use crate::config::external::ExternalApiConfig;
use crate::modules::ai::service::chat_completion;
use crate::utils::errors::AppError;

use super::model::TranslateDto;

const USER_AGENT: &str = "PlanEd/2.0 (Unterrichtsplanung; Kontakt über Betreiber)";
const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);
const TRANSLATE_TIMEOUT: Duration = Duration::from_secs(30);

fn http_client() -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .timeout(SEARCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| AppError::internal(anyhow::anyhow!(e)))
}

/// Wikimedia descriptions and author fields arrive as HTML fragments.
fn strip_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    result.trim().to_string()
}

fn image_link_fallback(query: &str) -> Value {
    let encoded: String = query
        .chars()
        .map(|c| if c == ' ' { '+' } else { c })
        .collect();
    json!({
        "results": [
            {
                "title": format!("Wikimedia Commons: {query}"),
                "url": format!("https://commons.wikimedia.org/w/index.php?search={encoded}"),
                "is_link": true
            },
            {
                "title": format!("Pixabay: {query}"),
                "url": format!("https://pixabay.com/de/images/search/{encoded}/"),
                "is_link": true
            },
            {
                "title": format!("Unsplash: {query}"),
                "url": format!("https://unsplash.com/s/photos/{encoded}"),
                "is_link": true
            }
        ],
        "total": 3,
        "source": "links"
    })
}

fn video_fallback(query: &str) -> Value {
    let encoded: String = query
        .chars()
        .map(|c| if c == ' ' { '+' } else { c })
        .collect();
    json!({
        "results": [],
        "total": 0,
        "channel_suggestions": [
            {"name": "simpleclub", "url": "https://www.youtube.com/@simpleclub"},
            {"name": "MrWissen2go", "url": "https://www.youtube.com/@MrWissen2go"},
            {"name": "Duden Learnattack", "url": "https://www.youtube.com/@learnattack"},
            {"name": "TheSimpleClub", "url": "https://www.youtube.com/@TheSimpleMaths"},
            {"name": "musstewissen", "url": "https://www.youtube.com/@musstewissen"}
        ],
        "search_url": format!("https://www.youtube.com/results?search_query={encoded}+Unterricht+Schule")
    })
}

/// OpenAlex ships abstracts as word → position-list maps; rebuild the
/// plain text by position.
fn reconstruct_abstract(inverted_index: &Value) -> String {
    let Some(index) = inverted_index.as_object() else {
        return String::new();
    };
    let mut positions: BTreeMap<u64, &str> = BTreeMap::new();
    for (word, places) in index {
        if let Some(places) = places.as_array() {
            for place in places {
                if let Some(pos) = place.as_u64() {
                    positions.insert(pos, word);
                }
            }
        }
    }
    positions.values().copied().collect::<Vec<_>>().join(" ")
}

pub struct ResearchService;

impl ResearchService {
    /// Image search via Wikimedia Commons; any upstream trouble turns
    /// into a static list of search links.
    #[instrument]
    pub async fn images(query: &str) -> Value {
        match Self::wikimedia_images(query).await {
            Ok(payload) if payload["total"].as_u64().unwrap_or(0) > 0 => payload,
            Ok(_) => image_link_fallback(query),
            Err(e) => {
                warn!(error = %e.error, "image search failed, serving link fallback");
                image_link_fallback(query)
            }
        }
    }

    async fn wikimedia_images(query: &str) -> Result<Value, AppError> {
        let client = http_client()?;
        let response: Value = client
            .get("https://commons.wikimedia.org/w/api.php")
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("generator", "search"),
                ("gsrsearch", &format!("filetype:bitmap {query}")),
                ("gsrnamespace", "6"),
                ("gsrlimit", "15"),
                ("prop", "imageinfo"),
                ("iiprop", "url|extmetadata"),
                ("iiurlwidth", "400"),
            ])
            .send()
            .await
            .map_err(|e| AppError::internal(anyhow::anyhow!(e)))?
            .json()
            .await
            .map_err(|e| AppError::internal(anyhow::anyhow!(e)))?;

        let mut results = Vec::new();
        if let Some(pages) = response["query"]["pages"].as_object() {
            for page in pages.values() {
                let Some(info) = page["imageinfo"].as_array().and_then(|a| a.first()) else {
                    continue;
                };
                let meta = &info["extmetadata"];
                results.push(json!({
                    "title": page["title"].as_str().unwrap_or_default()
                        .trim_start_matches("File:"),
                    "url": info["thumburl"].as_str().or(info["url"].as_str()),
                    "description_url": info["descriptionurl"],
                    "description": strip_html(
                        meta["ImageDescription"]["value"].as_str().unwrap_or_default()
                    ),
                    "author": strip_html(
                        meta["Artist"]["value"].as_str().unwrap_or_default()
                    ),
                    "license": meta["LicenseShortName"]["value"],
                    "is_link": false
                }));
            }
        }

        let total = results.len();
        Ok(json!({
            "results": results,
            "total": total,
            "source": "wikimedia"
        }))
    }

    /// Video search; without a YouTube key the payload degrades to
    /// channel suggestions plus a search URL.
    #[instrument(skip(config))]
    pub async fn videos(config: &ExternalApiConfig, query: &str) -> Value {
        let Some(api_key) = config.youtube_api_key.as_deref() else {
            return video_fallback(query);
        };

        match Self::youtube_videos(api_key, query).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e.error, "video search failed, serving fallback");
                video_fallback(query)
            }
        }
    }

    async fn youtube_videos(api_key: &str, query: &str) -> Result<Value, AppError> {
        let client = http_client()?;
        let response: Value = client
            .get("https://www.googleapis.com/youtube/v3/search")
            .query(&[
                ("part", "snippet"),
                ("q", &format!("{query} Unterricht Schule")),
                ("maxResults", "10"),
                ("type", "video"),
                ("relevanceLanguage", "de"),
                ("safeSearch", "strict"),
                ("key", api_key),
            ])
            .send()
            .await
            .map_err(|e| AppError::internal(anyhow::anyhow!(e)))?
            .json()
            .await
            .map_err(|e| AppError::internal(anyhow::anyhow!(e)))?;

        let results: Vec<Value> = response["items"]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| {
                        let video_id = item["id"]["videoId"].as_str()?;
                        let snippet = &item["snippet"];
                        Some(json!({
                            "title": snippet["title"],
                            "channel": snippet["channelTitle"],
                            "description": snippet["description"],
                            "thumbnail": snippet["thumbnails"]["medium"]["url"],
                            "url": format!("https://www.youtube.com/watch?v={video_id}")
                        }))
                    })
                    .collect()
            })
            .unwrap_or_default();

        let total = results.len();
        Ok(json!({
            "results": results,
            "total": total,
            "source": "youtube"
        }))
    }

    /// Paper search against Semantic Scholar or OpenAlex; failures are
    /// swallowed into an empty payload with an error note.
    #[instrument]
    pub async fn papers(query: &str, source: Option<&str>) -> Value {
        let result = match source {
            Some("openalex") => Self::openalex_papers(query).await,
            _ => Self::semantic_scholar_papers(query).await,
        };

        match result {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e.error, "paper search failed");
                json!({
                    "results": [],
                    "total": 0,
                    "error": "Literatursuche derzeit nicht verfügbar"
                })
            }
        }
    }

    async fn semantic_scholar_papers(query: &str) -> Result<Value, AppError> {
        let client = http_client()?;
        let response: Value = client
            .get("https://api.semanticscholar.org/graph/v1/paper/search")
            .query(&[
                ("query", query),
                ("limit", "10"),
                (
                    "fields",
                    "title,abstract,authors,year,url,citationCount,openAccessPdf",
                ),
            ])
            .send()
            .await
            .map_err(|e| AppError::internal(anyhow::anyhow!(e)))?
            .json()
            .await
            .map_err(|e| AppError::internal(anyhow::anyhow!(e)))?;

        let results: Vec<Value> = response["data"]
            .as_array()
            .map(|papers| {
                papers
                    .iter()
                    .map(|paper| {
                        let authors: Vec<&str> = paper["authors"]
                            .as_array()
                            .map(|a| {
                                a.iter()
                                    .filter_map(|author| author["name"].as_str())
                                    .collect()
                            })
                            .unwrap_or_default();
                        json!({
                            "title": paper["title"],
                            "abstract": paper["abstract"],
                            "authors": authors,
                            "year": paper["year"],
                            "url": paper["url"],
                            "citations": paper["citationCount"],
                            "pdf_url": paper["openAccessPdf"]["url"]
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        let total = results.len();
        Ok(json!({
            "results": results,
            "total": total,
            "source": "semantic_scholar"
        }))
    }

    async fn openalex_papers(query: &str) -> Result<Value, AppError> {
        let client = http_client()?;
        let response: Value = client
            .get("https://api.openalex.org/works")
            .query(&[
                ("search", query),
                ("per-page", "10"),
                ("sort", "cited_by_count:desc"),
            ])
            .send()
            .await
            .map_err(|e| AppError::internal(anyhow::anyhow!(e)))?
            .json()
            .await
            .map_err(|e| AppError::internal(anyhow::anyhow!(e)))?;

        let results: Vec<Value> = response["results"]
            .as_array()
            .map(|works| {
                works
                    .iter()
                    .map(|work| {
                        let authors: Vec<&str> = work["authorships"]
                            .as_array()
                            .map(|a| {
                                a.iter()
                                    .filter_map(|auth| auth["author"]["display_name"].as_str())
                                    .collect()
                            })
                            .unwrap_or_default();
                        json!({
                            "title": work["title"],
                            "abstract": reconstruct_abstract(&work["abstract_inverted_index"]),
                            "authors": authors,
                            "year": work["publication_year"],
                            "url": work["doi"],
                            "citations": work["cited_by_count"]
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        let total = results.len();
        Ok(json!({
            "results": results,
            "total": total,
            "source": "openalex"
        }))
    }

    /// Translation via the chat API; on any failure the original text is
    /// passed through with an error note.
    #[instrument(skip(config, dto))]
    pub async fn translate(config: &ExternalApiConfig, dto: &TranslateDto) -> Value {
        let system = format!(
            "Du bist ein Übersetzer. Übersetze den folgenden Text nach {}. \
             Antworte nur mit der Übersetzung.",
            dto.target_language
        );

        match chat_completion(config, &system, &dto.text, TRANSLATE_TIMEOUT).await {
            Ok(translated) => json!({
                "translated": translated.trim(),
                "target_language": dto.target_language
            }),
            Err(e) => {
                warn!(error = %e.error, "translation failed, passing text through");
                json!({
                    "translated": dto.text,
                    "error": "Übersetzung derzeit nicht verfügbar"
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_removes_tags() {
        assert_eq!(
            strip_html("<a href=\"x\">Jane Doe</a> (<b>CC BY</b>)"),
            "Jane Doe (CC BY)"
        );
        assert_eq!(strip_html("kein HTML"), "kein HTML");
    }

    #[test]
    fn test_image_fallback_is_three_links() {
        let payload = image_link_fallback("Bruchrechnung Pizza");

        let results = payload["results"].as_array().unwrap();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r["is_link"] == true));
        assert!(
            results[0]["url"]
                .as_str()
                .unwrap()
                .contains("Bruchrechnung+Pizza")
        );
    }

    #[test]
    fn test_video_fallback_suggests_channels() {
        let payload = video_fallback("Photosynthese");

        assert_eq!(payload["total"], 0);
        assert_eq!(payload["channel_suggestions"].as_array().unwrap().len(), 5);
        assert!(
            payload["search_url"]
                .as_str()
                .unwrap()
                .ends_with("Photosynthese+Unterricht+Schule")
        );
    }

    #[test]
    fn test_abstract_reconstruction_orders_words() {
        let index = serde_json::json!({
            "Lernen": [1],
            "Digitales": [0],
            "wirkt": [2],
            "positiv": [3]
        });

        assert_eq!(
            reconstruct_abstract(&index),
            "Digitales Lernen wirkt positiv"
        );
    }

    #[tokio::test]
    async fn test_videos_without_key_degrade() {
        let config = ExternalApiConfig {
            openai_api_key: None,
            openai_model: "gpt-4o-mini".to_string(),
            youtube_api_key: None,
            frontend_url: "http://localhost:3000".to_string(),
        };

        let payload = ResearchService::videos(&config, "Brüche").await;

        assert_eq!(payload["total"], 0);
        assert!(payload["channel_suggestions"].is_array());
    }

    #[tokio::test]
    async fn test_translate_without_key_passes_through() {
        let config = ExternalApiConfig {
            openai_api_key: None,
            openai_model: "gpt-4o-mini".to_string(),
            youtube_api_key: None,
            frontend_url: "http://localhost:3000".to_string(),
        };

        let payload = ResearchService::translate(
            &config,
            &TranslateDto {
                text: "The water cycle".to_string(),
                target_language: "Deutsch".to_string(),
            },
        )
        .await;

        assert_eq!(payload["translated"], "The water cycle");
        assert!(payload["error"].is_string());
    }
}
