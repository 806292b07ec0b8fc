use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::history::service::HistoryService;
use crate::utils::errors::AppError;

use super::model::{ClassSubject, CreateClassDto};

pub(crate) const CLASS_COLUMNS: &str =
    "id, user_id, school_year_id, name, subject, color, hours_per_week, schedule, created_at";

pub struct ClassService;

impl ClassService {
    #[instrument(skip(dto))]
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        dto: CreateClassDto,
    ) -> Result<ClassSubject, AppError> {
        let schedule = serde_json::to_value(dto.schedule.unwrap_or_default())
            .map_err(AppError::internal)?;

        let class = sqlx::query_as::<_, ClassSubject>(&format!(
            "INSERT INTO class_subjects
                 (user_id, school_year_id, name, subject, color, hours_per_week, schedule)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {CLASS_COLUMNS}"
        ))
        .bind(user_id)
        .bind(dto.school_year_id)
        .bind(&dto.name)
        .bind(&dto.subject)
        .bind(&dto.color)
        .bind(dto.hours_per_week)
        .bind(&schedule)
        .fetch_one(db)
        .await?;

        HistoryService::log(
            db,
            user_id,
            "create",
            "class",
            class.id,
            &format!("Klasse {} - {} erstellt", dto.name, dto.subject),
        )
        .await?;

        Ok(class)
    }

    #[instrument]
    pub async fn list(
        db: &PgPool,
        user_id: Uuid,
        school_year_id: Option<Uuid>,
    ) -> Result<Vec<ClassSubject>, AppError> {
        let classes = sqlx::query_as::<_, ClassSubject>(&format!(
            "SELECT {CLASS_COLUMNS} FROM class_subjects
             WHERE user_id = $1 AND ($2::UUID IS NULL OR school_year_id = $2)
             ORDER BY name"
        ))
        .bind(user_id)
        .bind(school_year_id)
        .fetch_all(db)
        .await?;

        Ok(classes)
    }

    #[instrument]
    pub async fn get_owned(
        db: &PgPool,
        user_id: Uuid,
        class_id: Uuid,
    ) -> Result<ClassSubject, AppError> {
        sqlx::query_as::<_, ClassSubject>(&format!(
            "SELECT {CLASS_COLUMNS} FROM class_subjects WHERE id = $1 AND user_id = $2"
        ))
        .bind(class_id)
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Class not found")))
    }

    /// Full replace of all mutable fields, mirroring the create payload.
    #[instrument(skip(dto))]
    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        class_id: Uuid,
        dto: CreateClassDto,
    ) -> Result<ClassSubject, AppError> {
        let schedule = serde_json::to_value(dto.schedule.unwrap_or_default())
            .map_err(AppError::internal)?;

        sqlx::query_as::<_, ClassSubject>(&format!(
            "UPDATE class_subjects
             SET school_year_id = $1, name = $2, subject = $3, color = $4,
                 hours_per_week = $5, schedule = $6
             WHERE id = $7 AND user_id = $8
             RETURNING {CLASS_COLUMNS}"
        ))
        .bind(dto.school_year_id)
        .bind(&dto.name)
        .bind(&dto.subject)
        .bind(&dto.color)
        .bind(dto.hours_per_week)
        .bind(&schedule)
        .bind(class_id)
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Class not found")))
    }

    #[instrument]
    pub async fn delete(db: &PgPool, user_id: Uuid, class_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM class_subjects WHERE id = $1 AND user_id = $2")
            .bind(class_id)
            .bind(user_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Class not found")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::collections::HashMap;

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

    async fn create_school_year(pool: &PgPool, user_id: Uuid) -> Uuid {
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO school_years (user_id, name, semester, start_date, end_date)
             VALUES ($1, '2025/2026', '1. Halbjahr', '2025-08-18', '2026-01-30')
             RETURNING id",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    fn dto(school_year_id: Uuid) -> CreateClassDto {
        CreateClassDto {
            name: "8a".to_string(),
            subject: "Mathematik".to_string(),
            color: "#3b82f6".to_string(),
            hours_per_week: 4,
            school_year_id,
            schedule: Some(HashMap::from([
                ("monday".to_string(), vec![3, 4]),
                ("wednesday".to_string(), vec![1]),
            ])),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_stores_schedule(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let year = create_school_year(&pool, user).await;

        let class = ClassService::create(&pool, user, dto(year)).await.unwrap();

        assert_eq!(class.name, "8a");
        assert_eq!(class.schedule["monday"], serde_json::json!([3, 4]));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_list_filters_by_school_year(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let year_a = create_school_year(&pool, user).await;
        let year_b = create_school_year(&pool, user).await;

        ClassService::create(&pool, user, dto(year_a)).await.unwrap();
        ClassService::create(&pool, user, dto(year_b)).await.unwrap();

        let all = ClassService::list(&pool, user, None).await.unwrap();
        let only_a = ClassService::list(&pool, user, Some(year_a)).await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(only_a.len(), 1);
        assert_eq!(only_a[0].school_year_id, year_a);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_replaces_fields(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let year = create_school_year(&pool, user).await;
        let class = ClassService::create(&pool, user, dto(year)).await.unwrap();

        let mut updated_dto = dto(year);
        updated_dto.name = "8b".to_string();
        updated_dto.hours_per_week = 5;

        let updated = ClassService::update(&pool, user, class.id, updated_dto)
            .await
            .unwrap();

        assert_eq!(updated.name, "8b");
        assert_eq!(updated.hours_per_week, 5);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_foreign_class_is_not_found(pool: PgPool) {
        let maria = create_user(&pool, "maria@schule.de").await;
        let tom = create_user(&pool, "tom@schule.de").await;
        let year = create_school_year(&pool, maria).await;
        let class = ClassService::create(&pool, maria, dto(year)).await.unwrap();

        let err = ClassService::update(&pool, tom, class.id, dto(year))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_delete_cascades_to_lessons(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let year = create_school_year(&pool, user).await;
        let class = ClassService::create(&pool, user, dto(year)).await.unwrap();

        sqlx::query(
            "INSERT INTO lessons (user_id, class_subject_id, date) VALUES ($1, $2, '2025-09-01')",
        )
        .bind(user)
        .bind(class.id)
        .execute(&pool)
        .await
        .unwrap();

        ClassService::delete(&pool, user, class.id).await.unwrap();

        let remaining =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM lessons WHERE user_id = $1")
                .bind(user)
                .fetch_one(&pool)
                .await
                .unwrap();

        assert_eq!(remaining, 0);
    }
}
