use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{DocumentBlob, DocumentInfo, DocumentQueryParams};

const ALLOWED_EXTENSIONS: &[&str] = &["docx", "doc", "pdf", "jpg", "jpeg", "png"];

const DOCUMENT_INFO_COLUMNS: &str =
    "id, user_id, class_subject_id, lesson_id, filename, content_type, size, created_at";

pub struct DocumentService;

impl DocumentService {
    #[instrument(skip(content))]
    pub async fn upload(
        db: &PgPool,
        user_id: Uuid,
        class_subject_id: Uuid,
        lesson_id: Option<Uuid>,
        filename: &str,
        content_type: &str,
        content: Vec<u8>,
    ) -> Result<DocumentInfo, AppError> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Dateityp nicht erlaubt. Erlaubt: .docx, .doc, .pdf, .jpg, .jpeg, .png"
            )));
        }

        let document = sqlx::query_as::<_, DocumentInfo>(&format!(
            "INSERT INTO documents
                 (user_id, class_subject_id, lesson_id, filename, content_type, size, content)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {DOCUMENT_INFO_COLUMNS}"
        ))
        .bind(user_id)
        .bind(class_subject_id)
        .bind(lesson_id)
        .bind(filename)
        .bind(content_type)
        .bind(content.len() as i64)
        .bind(&content)
        .fetch_one(db)
        .await?;

        Ok(document)
    }

    #[instrument]
    pub async fn list(
        db: &PgPool,
        user_id: Uuid,
        params: DocumentQueryParams,
    ) -> Result<Vec<DocumentInfo>, AppError> {
        let documents = sqlx::query_as::<_, DocumentInfo>(&format!(
            "SELECT {DOCUMENT_INFO_COLUMNS} FROM documents
             WHERE user_id = $1
               AND ($2::UUID IS NULL OR class_subject_id = $2)
               AND ($3::UUID IS NULL OR lesson_id = $3)
             ORDER BY created_at DESC
             LIMIT 100"
        ))
        .bind(user_id)
        .bind(params.class_subject_id)
        .bind(params.lesson_id)
        .fetch_all(db)
        .await?;

        Ok(documents)
    }

    #[instrument]
    pub async fn download(
        db: &PgPool,
        user_id: Uuid,
        document_id: Uuid,
    ) -> Result<DocumentBlob, AppError> {
        sqlx::query_as::<_, DocumentBlob>(
            "SELECT filename, content_type, content FROM documents
             WHERE id = $1 AND user_id = $2",
        )
        .bind(document_id)
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Document not found")))
    }

    #[instrument]
    pub async fn delete(db: &PgPool, user_id: Uuid, document_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1 AND user_id = $2")
            .bind(document_id)
            .bind(user_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Document not found")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

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

    #[sqlx::test(migrations = "./migrations")]
    async fn test_upload_and_download_roundtrip(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let class = create_class(&pool, user).await;

        let uploaded = DocumentService::upload(
            &pool,
            user,
            class,
            None,
            "arbeitsblatt.pdf",
            "application/pdf",
            vec![1, 2, 3, 4],
        )
        .await
        .unwrap();

        assert_eq!(uploaded.size, 4);

        let blob = DocumentService::download(&pool, user, uploaded.id)
            .await
            .unwrap();
        assert_eq!(blob.filename, "arbeitsblatt.pdf");
        assert_eq!(blob.content, vec![1, 2, 3, 4]);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_upload_rejects_unknown_extension(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let class = create_class(&pool, user).await;

        let err = DocumentService::upload(
            &pool,
            user,
            class,
            None,
            "script.exe",
            "application/octet-stream",
            vec![0],
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_list_returns_metadata_only(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let class = create_class(&pool, user).await;

        DocumentService::upload(
            &pool,
            user,
            class,
            None,
            "tafelbild.png",
            "image/png",
            vec![9; 128],
        )
        .await
        .unwrap();

        let documents = DocumentService::list(
            &pool,
            user,
            DocumentQueryParams {
                class_subject_id: Some(class),
                lesson_id: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].size, 128);
    }
}
