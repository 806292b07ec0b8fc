use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::history::service::HistoryService;
use crate::utils::errors::AppError;

use super::model::{CreateSchoolYearDto, SchoolYear};

pub struct SchoolYearService;

impl SchoolYearService {
    #[instrument(skip(dto))]
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        dto: CreateSchoolYearDto,
    ) -> Result<SchoolYear, AppError> {
        let year = sqlx::query_as::<_, SchoolYear>(
            "INSERT INTO school_years (user_id, name, semester, start_date, end_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, user_id, name, semester, start_date, end_date, created_at",
        )
        .bind(user_id)
        .bind(&dto.name)
        .bind(&dto.semester)
        .bind(dto.start_date)
        .bind(dto.end_date)
        .fetch_one(db)
        .await?;

        HistoryService::log(
            db,
            user_id,
            "create",
            "school_year",
            year.id,
            &format!("Schuljahr {} erstellt", dto.name),
        )
        .await?;

        Ok(year)
    }

    #[instrument]
    pub async fn list(db: &PgPool, user_id: Uuid) -> Result<Vec<SchoolYear>, AppError> {
        let years = sqlx::query_as::<_, SchoolYear>(
            "SELECT id, user_id, name, semester, start_date, end_date, created_at
             FROM school_years WHERE user_id = $1
             ORDER BY start_date",
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;

        Ok(years)
    }

    /// Deleting a school year removes its classes and, transitively, their
    /// lessons (ON DELETE CASCADE).
    #[instrument]
    pub async fn delete(db: &PgPool, user_id: Uuid, year_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM school_years WHERE id = $1 AND user_id = $2")
            .bind(year_id)
            .bind(user_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("School year not found")));
        }

        Ok(())
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

    fn dto() -> CreateSchoolYearDto {
        CreateSchoolYearDto {
            name: "2025/2026".to_string(),
            semester: "1. Halbjahr".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 8, 18).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 30).unwrap(),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_and_list_scoped_to_owner(pool: PgPool) {
        let maria = create_user(&pool, "maria@schule.de").await;
        let tom = create_user(&pool, "tom@schule.de").await;

        SchoolYearService::create(&pool, maria, dto()).await.unwrap();

        let maria_years = SchoolYearService::list(&pool, maria).await.unwrap();
        let tom_years = SchoolYearService::list(&pool, tom).await.unwrap();

        assert_eq!(maria_years.len(), 1);
        assert_eq!(maria_years[0].name, "2025/2026");
        assert!(tom_years.is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_writes_history(pool: PgPool) {
        let maria = create_user(&pool, "maria@schule.de").await;
        SchoolYearService::create(&pool, maria, dto()).await.unwrap();

        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM history WHERE user_id = $1 AND entity_type = 'school_year'",
        )
        .bind(maria)
        .fetch_one(&pool)
        .await
        .unwrap();

        assert_eq!(count, 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_delete_cascades_to_classes(pool: PgPool) {
        let maria = create_user(&pool, "maria@schule.de").await;
        let year = SchoolYearService::create(&pool, maria, dto()).await.unwrap();

        sqlx::query(
            "INSERT INTO class_subjects (user_id, school_year_id, name, subject)
             VALUES ($1, $2, '8a', 'Mathematik')",
        )
        .bind(maria)
        .bind(year.id)
        .execute(&pool)
        .await
        .unwrap();

        SchoolYearService::delete(&pool, maria, year.id).await.unwrap();

        let remaining =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM class_subjects WHERE user_id = $1")
                .bind(maria)
                .fetch_one(&pool)
                .await
                .unwrap();

        assert_eq!(remaining, 0);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_delete_foreign_year_is_not_found(pool: PgPool) {
        let maria = create_user(&pool, "maria@schule.de").await;
        let tom = create_user(&pool, "tom@schule.de").await;
        let year = SchoolYearService::create(&pool, maria, dto()).await.unwrap();

        let err = SchoolYearService::delete(&pool, tom, year.id)
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
