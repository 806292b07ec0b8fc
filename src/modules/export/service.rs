use std::io::{Cursor, Write};

use chrono::{Datelike, NaiveDate, Weekday};
use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use rust_xlsxwriter::{Color, Format, Workbook};
use sqlx::PgPool;
use sqlx::prelude::FromRow;
use tracing::instrument;
use uuid::Uuid;
use zip::write::SimpleFileOptions;

use crate::modules::classes::model::ClassSubject;
use crate::modules::classes::service::ClassService;
use crate::utils::errors::AppError;

use super::crossword;
use super::model::MaterialExportDto;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// A generated download: bytes plus the headers the controller needs.
#[derive(Debug)]
pub struct ExportFile {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

#[derive(FromRow)]
struct ExportLesson {
    date: NaiveDate,
    period: Option<i32>,
    topic: String,
    objective: String,
    curriculum_reference: String,
    key_terms: String,
    teaching_units: i32,
    is_cancelled: bool,
}

fn weekday_abbrev(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Di",
        Weekday::Wed => "Mi",
        Weekday::Thu => "Do",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "So",
    }
}

fn german_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

fn safe_filename(name: &str, subject: &str, extension: &str) -> String {
    let sanitize = |s: &str| -> String {
        s.chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect()
    };
    format!(
        "Arbeitsplan_{}_{}.{extension}",
        sanitize(name),
        sanitize(subject)
    )
}

async fn plan_data(
    db: &PgPool,
    user_id: Uuid,
    class_subject_id: Uuid,
) -> Result<(ClassSubject, String, Vec<ExportLesson>), AppError> {
    let class = ClassService::get_owned(db, user_id, class_subject_id).await?;

    let school_year = sqlx::query_scalar::<_, String>(
        "SELECT name FROM school_years WHERE id = $1",
    )
    .bind(class.school_year_id)
    .fetch_optional(db)
    .await?
    .unwrap_or_default();

    let lessons = sqlx::query_as::<_, ExportLesson>(
        "SELECT date, period, topic, objective, curriculum_reference, key_terms,
                teaching_units, is_cancelled
         FROM lessons
         WHERE class_subject_id = $1
         ORDER BY date, period NULLS LAST",
    )
    .bind(class_subject_id)
    .fetch_all(db)
    .await?;

    Ok((class, school_year, lessons))
}

pub struct ExportService;

impl ExportService {
    #[instrument]
    pub async fn excel(
        db: &PgPool,
        user_id: Uuid,
        class_subject_id: Uuid,
    ) -> Result<ExportFile, AppError> {
        let (class, _, lessons) = plan_data(db, user_id, class_subject_id).await?;

        const HEADERS: &[&str] = &[
            "Datum",
            "Tag",
            "Stunde",
            "Ausfall",
            "Stundenthema",
            "Zielsetzung",
            "Lehrplan",
            "Begriffe",
            "UE",
        ];

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new()
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(Color::RGB(0x1F4E79));

        let mut widths = vec![0usize; HEADERS.len()];
        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
            widths[col] = header.chars().count();
        }

        for (i, lesson) in lessons.iter().enumerate() {
            let row = (i + 1) as u32;
            let cells = [
                german_date(lesson.date),
                weekday_abbrev(lesson.date).to_string(),
                lesson.period.map(|p| p.to_string()).unwrap_or_default(),
                if lesson.is_cancelled { "x" } else { "" }.to_string(),
                lesson.topic.clone(),
                lesson.objective.clone(),
                lesson.curriculum_reference.clone(),
                lesson.key_terms.clone(),
                lesson.teaching_units.to_string(),
            ];
            for (col, value) in cells.iter().enumerate() {
                worksheet.write_string(row, col as u16, value)?;
                widths[col] = widths[col].max(value.chars().count());
            }
        }

        for (col, width) in widths.iter().enumerate() {
            worksheet.set_column_width(col as u16, (*width + 2).min(50) as f64)?;
        }

        let bytes = workbook.save_to_buffer()?;

        Ok(ExportFile {
            filename: safe_filename(&class.name, &class.subject, "xlsx"),
            content_type: XLSX_MIME,
            bytes,
        })
    }

    #[instrument]
    pub async fn word(
        db: &PgPool,
        user_id: Uuid,
        class_subject_id: Uuid,
    ) -> Result<ExportFile, AppError> {
        let (class, school_year, lessons) = plan_data(db, user_id, class_subject_id).await?;

        let header_row = TableRow::new(
            ["Datum", "Thema", "Zielsetzung", "Lehrplan", "Begriffe", "UE"]
                .iter()
                .map(|h| {
                    TableCell::new()
                        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(*h).bold()))
                })
                .collect(),
        );

        let mut rows = vec![header_row];
        for lesson in &lessons {
            let topic = if lesson.is_cancelled {
                format!("{} [AUSFALL]", lesson.topic)
            } else {
                lesson.topic.clone()
            };
            let cells = [
                german_date(lesson.date),
                topic,
                lesson.objective.clone(),
                lesson.curriculum_reference.clone(),
                lesson.key_terms.clone(),
                lesson.teaching_units.to_string(),
            ];
            rows.push(TableRow::new(
                cells
                    .iter()
                    .map(|text| {
                        TableCell::new()
                            .add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
                    })
                    .collect(),
            ));
        }

        let docx = Docx::new()
            .add_paragraph(
                Paragraph::new().add_run(
                    Run::new()
                        .add_text(format!("Arbeitsplan: {} - {}", class.name, class.subject))
                        .bold()
                        .size(32),
                ),
            )
            .add_paragraph(
                Paragraph::new().add_run(Run::new().add_text(format!("Schuljahr: {school_year}"))),
            )
            .add_table(Table::new(rows));

        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor)?;

        Ok(ExportFile {
            filename: safe_filename(&class.name, &class.subject, "docx"),
            content_type: DOCX_MIME,
            bytes: cursor.into_inner(),
        })
    }

    #[instrument]
    pub async fn pdf(
        db: &PgPool,
        user_id: Uuid,
        class_subject_id: Uuid,
    ) -> Result<ExportFile, AppError> {
        let (class, school_year, lessons) = plan_data(db, user_id, class_subject_id).await?;

        let title = format!("Arbeitsplan: {} - {}", class.name, class.subject);
        let (doc, first_page, first_layer) =
            PdfDocument::new(&title, Mm(210.0), Mm(297.0), "Inhalt");
        let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

        let mut layer = doc.get_page(first_page).get_layer(first_layer);
        layer.use_text(&title, 16.0, Mm(20.0), Mm(277.0), &bold);
        layer.use_text(
            format!("Schuljahr: {school_year}"),
            11.0,
            Mm(20.0),
            Mm(269.0),
            &font,
        );

        let mut y = 258.0;
        for lesson in &lessons {
            if y < 20.0 {
                let (page, page_layer) = doc.add_page(Mm(210.0), Mm(297.0), "Inhalt");
                layer = doc.get_page(page).get_layer(page_layer);
                y = 277.0;
            }

            let mut topic: String = lesson.topic.chars().take(50).collect();
            if lesson.is_cancelled {
                topic.push_str(" [AUSFALL]");
            }
            let line = format!(
                "{} ({})  {}",
                german_date(lesson.date),
                weekday_abbrev(lesson.date),
                topic
            );
            layer.use_text(line, 10.0, Mm(20.0), Mm(y), &font);
            y -= 7.0;
        }

        let bytes = doc.save_to_bytes()?;

        Ok(ExportFile {
            filename: safe_filename(&class.name, &class.subject, "pdf"),
            content_type: "application/pdf",
            bytes,
        })
    }

    /// Renders an AI material as a zip of worksheet and solution docx.
    #[instrument(skip(dto))]
    pub fn material_zip(dto: &MaterialExportDto) -> Result<ExportFile, AppError> {
        let sheet = material_docx(dto, false)?;
        let solution = material_docx(dto, true)?;

        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file("Arbeitsblatt.docx", SimpleFileOptions::default())?;
        zip.write_all(&sheet)?;
        zip.start_file("Loesung.docx", SimpleFileOptions::default())?;
        zip.write_all(&solution)?;
        let cursor = zip.finish()?;

        let sanitized: String = dto
            .title
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();

        Ok(ExportFile {
            filename: format!("Material_{sanitized}.zip"),
            content_type: "application/zip",
            bytes: cursor.into_inner(),
        })
    }
}

fn text_field(value: &serde_json::Value, key: &str) -> String {
    value
        .get(key)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

fn material_docx(dto: &MaterialExportDto, with_solutions: bool) -> Result<Vec<u8>, AppError> {
    let heading = if with_solutions {
        format!("{} - Lösung", dto.title)
    } else {
        dto.title.clone()
    };

    let mut docx = Docx::new().add_paragraph(
        Paragraph::new().add_run(Run::new().add_text(heading).bold().size(32)),
    );
    if !dto.instructions.is_empty() {
        docx = docx
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text(&dto.instructions)));
    }

    let paragraph = |text: String| Paragraph::new().add_run(Run::new().add_text(text));

    match dto.material_type.as_str() {
        "arbeitsblatt" => {
            let tasks = dto
                .content
                .get("aufgaben")
                .and_then(|v| v.as_array())
                .cloned()
                .unwrap_or_default();
            for (i, task) in tasks.iter().enumerate() {
                docx = docx.add_paragraph(paragraph(format!(
                    "{}. {}",
                    i + 1,
                    text_field(task, "frage")
                )));
                if with_solutions {
                    docx = docx.add_paragraph(paragraph(format!(
                        "Lösung: {}",
                        text_field(task, "loesung")
                    )));
                } else {
                    docx = docx.add_paragraph(paragraph("____________________".to_string()));
                }
            }
        }
        "quiz" => {
            let questions = dto
                .content
                .get("fragen")
                .and_then(|v| v.as_array())
                .cloned()
                .unwrap_or_default();
            for (i, question) in questions.iter().enumerate() {
                docx = docx.add_paragraph(paragraph(format!(
                    "{}. {}",
                    i + 1,
                    text_field(question, "frage")
                )));
                let options = question
                    .get("optionen")
                    .and_then(|v| v.as_array())
                    .cloned()
                    .unwrap_or_default();
                for (j, option) in options.iter().enumerate() {
                    let letter = (b'a' + j as u8) as char;
                    docx = docx.add_paragraph(paragraph(format!(
                        "   {letter}) {}",
                        option.as_str().unwrap_or_default()
                    )));
                }
                if with_solutions {
                    docx = docx.add_paragraph(paragraph(format!(
                        "Richtig: {}",
                        text_field(question, "richtig")
                    )));
                }
            }
        }
        "lueckentext" => {
            docx = docx.add_paragraph(paragraph(text_field(&dto.content, "text")));
            if with_solutions {
                let solutions = dto
                    .content
                    .get("loesungen")
                    .and_then(|v| v.as_array())
                    .cloned()
                    .unwrap_or_default();
                docx = docx.add_paragraph(paragraph("Lösungen:".to_string()));
                for (i, solution) in solutions.iter().enumerate() {
                    docx = docx.add_paragraph(paragraph(format!(
                        "{}. {}",
                        i + 1,
                        solution.as_str().unwrap_or_default()
                    )));
                }
            }
        }
        "zuordnung" => {
            let pairs = dto
                .content
                .get("paare")
                .and_then(|v| v.as_array())
                .cloned()
                .unwrap_or_default();
            if with_solutions {
                for pair in &pairs {
                    docx = docx.add_paragraph(paragraph(format!(
                        "{}  →  {}",
                        text_field(pair, "links"),
                        text_field(pair, "rechts")
                    )));
                }
            } else {
                for (i, pair) in pairs.iter().enumerate() {
                    docx = docx.add_paragraph(paragraph(format!(
                        "{}. {}",
                        i + 1,
                        text_field(pair, "links")
                    )));
                }
                docx = docx.add_paragraph(paragraph(String::new()));
                for (j, pair) in pairs.iter().enumerate() {
                    let letter = (b'A' + j as u8) as char;
                    docx = docx.add_paragraph(paragraph(format!(
                        "{letter}) {}",
                        text_field(pair, "rechts")
                    )));
                }
            }
        }
        "raetsel" => {
            let entries: Vec<(String, String)> = dto
                .content
                .get("woerter")
                .and_then(|v| v.as_array())
                .map(|words| {
                    words
                        .iter()
                        .map(|w| (text_field(w, "wort"), text_field(w, "hinweis")))
                        .collect()
                })
                .unwrap_or_default();
            let grid = crossword::build_grid(&entries);

            for row in grid.render_rows(with_solutions) {
                docx = docx.add_paragraph(
                    Paragraph::new().add_run(
                        Run::new()
                            .add_text(row)
                            .fonts(docx_rs::RunFonts::new().ascii("Courier New")),
                    ),
                );
            }
            docx = docx.add_paragraph(paragraph("Hinweise:".to_string()));
            for word in &grid.words {
                let direction = match word.direction {
                    crossword::Direction::Across => "waagerecht",
                    crossword::Direction::Down => "senkrecht",
                };
                let mut hint = format!("{}. ({direction}) {}", word.number, word.hint);
                if with_solutions {
                    hint.push_str(&format!(" – {}", word.word));
                }
                docx = docx.add_paragraph(paragraph(hint));
            }
        }
        other => {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Unbekannter Materialtyp: {other}"
            )));
        }
    }

    let mut cursor = Cursor::new(Vec::new());
    docx.build().pack(&mut cursor)?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;

    async fn create_user(pool: &PgPool, email: &str) -> Uuid {
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO users (email, password, name) VALUES ($1, 'hash', 'Maria Muster')
             RETURNING id",
        )
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    async fn create_class(pool: &PgPool, user_id: Uuid) -> Uuid {
        let year = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO school_years (user_id, name, semester, start_date, end_date)
             VALUES ($1, '2025/2026', '1. Halbjahr', '2025-08-18', '2026-01-30')
             RETURNING id",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap();
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO class_subjects (user_id, school_year_id, name, subject, color, hours_per_week)
             VALUES ($1, $2, '7a', 'Mathematik', '#3b82f6', 4)
             RETURNING id",
        )
        .bind(user_id)
        .bind(year)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    async fn create_lesson(pool: &PgPool, user_id: Uuid, class: Uuid) {
        sqlx::query(
            "INSERT INTO lessons (user_id, class_subject_id, date, topic)
             VALUES ($1, $2, '2025-09-01', 'Brüche kürzen')",
        )
        .bind(user_id)
        .bind(class)
        .execute(pool)
        .await
        .unwrap();
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_excel_export_is_a_zip_container(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let class = create_class(&pool, user).await;
        create_lesson(&pool, user, class).await;

        let file = ExportService::excel(&pool, user, class).await.unwrap();

        assert_eq!(file.filename, "Arbeitsplan_7a_Mathematik.xlsx");
        assert_eq!(&file.bytes[..2], b"PK");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_excel_export_has_period_column(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let class = create_class(&pool, user).await;
        sqlx::query(
            "INSERT INTO lessons (user_id, class_subject_id, date, period, topic)
             VALUES ($1, $2, '2025-09-01', 3, 'Brüche kürzen')",
        )
        .bind(user)
        .bind(class)
        .execute(&pool)
        .await
        .unwrap();

        let file = ExportService::excel(&pool, user, class).await.unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(file.bytes)).unwrap();
        let mut contents = String::new();
        for i in 0..archive.len() {
            let mut entry = archive.by_index(i).unwrap();
            let mut text = String::new();
            use std::io::Read;
            entry.read_to_string(&mut text).ok();
            contents.push_str(&text);
        }
        assert!(contents.contains("Stunde"));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_word_export_is_a_zip_container(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let class = create_class(&pool, user).await;
        create_lesson(&pool, user, class).await;

        let file = ExportService::word(&pool, user, class).await.unwrap();

        assert_eq!(file.filename, "Arbeitsplan_7a_Mathematik.docx");
        assert_eq!(&file.bytes[..2], b"PK");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_pdf_export_has_pdf_magic(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let class = create_class(&pool, user).await;
        create_lesson(&pool, user, class).await;

        let file = ExportService::pdf(&pool, user, class).await.unwrap();

        assert_eq!(&file.bytes[..5], b"%PDF-");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_export_foreign_class_is_not_found(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;

        let err = ExportService::excel(&pool, user, Uuid::new_v4())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_material_zip_bundles_sheet_and_solution() {
        let dto = MaterialExportDto {
            title: "Bruchrechnung Quiz".to_string(),
            material_type: "quiz".to_string(),
            instructions: "Kreuze die richtige Antwort an.".to_string(),
            content: json!({
                "fragen": [
                    {
                        "frage": "Was ist 1/2 + 1/4?",
                        "optionen": ["3/4", "2/6", "1/8"],
                        "richtig": "3/4"
                    }
                ]
            }),
        };

        let file = ExportService::material_zip(&dto).unwrap();

        let mut archive =
            zip::ZipArchive::new(Cursor::new(file.bytes)).expect("zip should parse");
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert_eq!(names, vec!["Arbeitsblatt.docx", "Loesung.docx"]);
    }

    #[test]
    fn test_material_unknown_type_is_rejected() {
        let dto = MaterialExportDto {
            title: "X".to_string(),
            material_type: "poster".to_string(),
            instructions: String::new(),
            content: json!({}),
        };

        let err = ExportService::material_zip(&dto).unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
