use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::classes::model::ClassSubject;
use crate::modules::classes::service::CLASS_COLUMNS;
use crate::modules::lessons::model::Lesson;
use crate::modules::lessons::service::LESSON_COLUMNS;
use crate::modules::templates::model::Template;
use crate::modules::templates::service::TEMPLATE_COLUMNS;
use crate::modules::todos::model::Todo;
use crate::modules::todos::service::TODO_COLUMNS;
use crate::utils::errors::AppError;

use super::model::SearchResponse;

pub struct SearchService;

impl SearchService {
    /// Case-insensitive substring search across the user's own lessons,
    /// classes, templates and todos.
    #[instrument]
    pub async fn search(db: &PgPool, user_id: Uuid, query: &str) -> Result<SearchResponse, AppError> {
        let query = query.trim();
        if query.chars().count() < 2 {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Suchbegriff muss mindestens 2 Zeichen lang sein"
            )));
        }

        let pattern = format!("%{query}%");

        let lessons = sqlx::query_as::<_, Lesson>(&format!(
            "SELECT {LESSON_COLUMNS} FROM lessons
             WHERE user_id = $1
               AND (topic ILIKE $2 OR key_terms ILIKE $2 OR notes ILIKE $2)
             ORDER BY date DESC
             LIMIT 10"
        ))
        .bind(user_id)
        .bind(&pattern)
        .fetch_all(db)
        .await?;

        let classes = sqlx::query_as::<_, ClassSubject>(&format!(
            "SELECT {CLASS_COLUMNS} FROM class_subjects
             WHERE user_id = $1 AND (name ILIKE $2 OR subject ILIKE $2)
             ORDER BY name
             LIMIT 5"
        ))
        .bind(user_id)
        .bind(&pattern)
        .fetch_all(db)
        .await?;

        let templates = sqlx::query_as::<_, Template>(&format!(
            "SELECT {TEMPLATE_COLUMNS} FROM templates
             WHERE user_id = $1
               AND (name ILIKE $2 OR topic ILIKE $2 OR subject ILIKE $2)
             ORDER BY use_count DESC
             LIMIT 5"
        ))
        .bind(user_id)
        .bind(&pattern)
        .fetch_all(db)
        .await?;

        let todos = sqlx::query_as::<_, Todo>(&format!(
            "SELECT {TODO_COLUMNS} FROM todos
             WHERE user_id = $1 AND title ILIKE $2
             ORDER BY due_date NULLS LAST
             LIMIT 5"
        ))
        .bind(user_id)
        .bind(&pattern)
        .fetch_all(db)
        .await?;

        Ok(SearchResponse {
            query: query.to_string(),
            lessons,
            classes,
            templates,
            todos,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use chrono::NaiveDate;

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

    async fn create_class(pool: &PgPool, user_id: Uuid, name: &str) -> Uuid {
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
             VALUES ($1, $2, $3, 'Mathematik', '#3b82f6', 4)
             RETURNING id",
        )
        .bind(user_id)
        .bind(year)
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_search_groups_matches(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let class = create_class(&pool, user, "7a").await;

        sqlx::query(
            "INSERT INTO lessons (user_id, class_subject_id, date, topic)
             VALUES ($1, $2, $3, 'Brüche kürzen und erweitern')",
        )
        .bind(user)
        .bind(class)
        .bind(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap())
        .execute(&pool)
        .await
        .unwrap();

        sqlx::query("INSERT INTO todos (user_id, title) VALUES ($1, 'Brüche-Test korrigieren')")
            .bind(user)
            .execute(&pool)
            .await
            .unwrap();

        let response = SearchService::search(&pool, user, "brüche").await.unwrap();

        assert_eq!(response.lessons.len(), 1);
        assert_eq!(response.todos.len(), 1);
        assert!(response.classes.is_empty());
        assert!(response.templates.is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_search_is_owner_scoped(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let other = create_user(&pool, "tom@schule.de").await;
        create_class(&pool, other, "Geometrie-AG").await;

        let response = SearchService::search(&pool, user, "Geometrie").await.unwrap();

        assert!(response.classes.is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_short_query_is_rejected(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;

        let err = SearchService::search(&pool, user, "a").await.unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
