use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{Comment, CreateCommentDto};

pub struct CommentService;

impl CommentService {
    #[instrument(skip(dto))]
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        dto: CreateCommentDto,
    ) -> Result<Comment, AppError> {
        let user_name = sqlx::query_scalar::<_, String>("SELECT name FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(db)
            .await?
            .unwrap_or_else(|| "Unbekannt".to_string());

        let comment = sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (lesson_id, user_id, user_name, text)
             VALUES ($1, $2, $3, $4)
             RETURNING id, lesson_id, user_id, user_name, text, created_at",
        )
        .bind(dto.lesson_id)
        .bind(user_id)
        .bind(&user_name)
        .bind(&dto.text)
        .fetch_one(db)
        .await?;

        Ok(comment)
    }

    #[instrument]
    pub async fn list_for_lesson(db: &PgPool, lesson_id: Uuid) -> Result<Vec<Comment>, AppError> {
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT id, lesson_id, user_id, user_name, text, created_at
             FROM comments
             WHERE lesson_id = $1
             ORDER BY created_at DESC
             LIMIT 100",
        )
        .bind(lesson_id)
        .fetch_all(db)
        .await?;

        Ok(comments)
    }

    /// Only the author may remove a comment.
    #[instrument]
    pub async fn delete(db: &PgPool, user_id: Uuid, comment_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1 AND user_id = $2")
            .bind(comment_id)
            .bind(user_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Kommentar nicht gefunden"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use chrono::NaiveDate;

    async fn create_user(pool: &PgPool, email: &str, name: &str) -> Uuid {
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO users (email, password, name) VALUES ($1, 'hash', $2) RETURNING id",
        )
        .bind(email)
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    async fn create_lesson(pool: &PgPool, user_id: Uuid) -> Uuid {
        let year = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO school_years (user_id, name, semester, start_date, end_date)
             VALUES ($1, '2025/2026', '1. Halbjahr', '2025-08-18', '2026-01-30')
             RETURNING id",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap();
        let class = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO class_subjects (user_id, school_year_id, name, subject, color, hours_per_week)
             VALUES ($1, $2, '7a', 'Mathematik', '#3b82f6', 4)
             RETURNING id",
        )
        .bind(user_id)
        .bind(year)
        .fetch_one(pool)
        .await
        .unwrap();
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO lessons (user_id, class_subject_id, date, topic)
             VALUES ($1, $2, $3, 'Brüche kürzen')
             RETURNING id",
        )
        .bind(user_id)
        .bind(class)
        .bind(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap())
        .fetch_one(pool)
        .await
        .unwrap()
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_denormalizes_author_name(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de", "Maria Muster").await;
        let lesson = create_lesson(&pool, user).await;

        let comment = CommentService::create(
            &pool,
            user,
            CreateCommentDto {
                lesson_id: lesson,
                text: "Gute Stunde!".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(comment.user_name, "Maria Muster");

        let comments = CommentService::list_for_lesson(&pool, lesson).await.unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].text, "Gute Stunde!");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_delete_is_author_only(pool: PgPool) {
        let author = create_user(&pool, "maria@schule.de", "Maria Muster").await;
        let other = create_user(&pool, "tom@schule.de", "Tom Test").await;
        let lesson = create_lesson(&pool, author).await;

        let comment = CommentService::create(
            &pool,
            author,
            CreateCommentDto {
                lesson_id: lesson,
                text: "Notiz".to_string(),
            },
        )
        .await
        .unwrap();

        let err = CommentService::delete(&pool, other, comment.id)
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.error.to_string(), "Kommentar nicht gefunden");

        CommentService::delete(&pool, author, comment.id)
            .await
            .unwrap();
    }
}
