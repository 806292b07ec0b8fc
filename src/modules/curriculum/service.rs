use serde_json::{Value, json};

use crate::utils::errors::AppError;

use super::model::{Fach, SchulbuchQueryParams, ThemaQueryParams};

pub struct CurriculumService;

impl CurriculumService {
    /// Condensed curriculum tree: grade band → competency areas → topic
    /// names, without the G/M/E proficiency texts.
    pub fn struktur(fach: Fach) -> Value {
        let mut klassenstufen = serde_json::Map::new();
        if let Some(plan) = fach.lehrplan().as_object() {
            for (stufe, bereiche) in plan {
                let areas: Vec<Value> = bereiche
                    .as_object()
                    .map(|map| {
                        map.iter()
                            .map(|(key, bereich)| {
                                let themen: Vec<Value> = bereich
                                    .get("themen")
                                    .and_then(|t| t.as_array())
                                    .map(|themen| {
                                        themen
                                            .iter()
                                            .map(|thema| {
                                                json!({
                                                    "id": thema.get("id"),
                                                    "name": thema.get("name"),
                                                })
                                            })
                                            .collect()
                                    })
                                    .unwrap_or_default();
                                json!({
                                    "id": key,
                                    "name": bereich.get("name"),
                                    "themen": themen,
                                })
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                klassenstufen.insert(stufe.clone(), Value::Array(areas));
            }
        }

        json!({
            "fach": fach.name(),
            "bundesland": "Rheinland-Pfalz",
            "schulart": "Realschule plus",
            "klassenstufen": klassenstufen,
        })
    }

    /// Full topic entry including the G/M/E texts, located by id and
    /// optionally narrowed by grade band and competency area.
    pub fn thema(fach: Fach, params: &ThemaQueryParams) -> Result<Value, AppError> {
        let plan = fach.lehrplan();
        let stufen: Vec<&String> = plan
            .as_object()
            .map(|map| map.keys().collect())
            .unwrap_or_default();

        for stufe in stufen {
            if let Some(wanted) = &params.klassenstufe
                && wanted != stufe
            {
                continue;
            }
            let Some(bereiche) = plan.get(stufe).and_then(|v| v.as_object()) else {
                continue;
            };
            for (bereich_key, bereich) in bereiche {
                if let Some(wanted) = &params.kompetenzbereich
                    && wanted != bereich_key
                {
                    continue;
                }
                let Some(themen) = bereich.get("themen").and_then(|v| v.as_array()) else {
                    continue;
                };
                for thema in themen {
                    if thema.get("id").and_then(|v| v.as_str()) == Some(&params.thema_id) {
                        let mut result = thema.clone();
                        if let Some(map) = result.as_object_mut() {
                            map.insert("klassenstufe".to_string(), json!(stufe));
                            map.insert("kompetenzbereich".to_string(), json!(bereich_key));
                            map.insert(
                                "kompetenzbereich_name".to_string(),
                                bereich.get("name").cloned().unwrap_or(Value::Null),
                            );
                        }
                        return Ok(result);
                    }
                }
            }
        }

        Err(AppError::not_found(anyhow::anyhow!("Thema nicht gefunden")))
    }

    /// Textbook catalog entries with chapter keys only; the chapter
    /// details come from the single-book endpoint.
    pub fn schulbuecher(fach: Fach, params: &SchulbuchQueryParams) -> Vec<Value> {
        fach.schulbuecher()
            .as_object()
            .map(|books| {
                books
                    .values()
                    .filter(|book| {
                        params.klassenstufe.as_deref().is_none_or(|wanted| {
                            book.get("klassenstufe").and_then(|v| v.as_str()) == Some(wanted)
                        })
                    })
                    .map(|book| {
                        let kapitel: Vec<&String> = book
                            .get("kapitel")
                            .and_then(|v| v.as_object())
                            .map(|map| map.keys().collect())
                            .unwrap_or_default();
                        json!({
                            "id": book.get("id"),
                            "name": book.get("name"),
                            "verlag": book.get("verlag"),
                            "isbn": book.get("isbn"),
                            "klassenstufe": book.get("klassenstufe"),
                            "kapitel": kapitel,
                        })
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn schulbuch(fach: Fach, id: &str) -> Result<Value, AppError> {
        fach.schulbuecher()
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Schulbuch nicht gefunden")))
    }
}
