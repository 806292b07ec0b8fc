use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{CreateHolidayDto, Holiday};

pub struct HolidayService;

impl HolidayService {
    #[instrument(skip(dto))]
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        dto: CreateHolidayDto,
    ) -> Result<Holiday, AppError> {
        let holiday = sqlx::query_as::<_, Holiday>(
            "INSERT INTO holidays (user_id, school_year_id, name, start_date, end_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, user_id, school_year_id, name, start_date, end_date",
        )
        .bind(user_id)
        .bind(dto.school_year_id)
        .bind(&dto.name)
        .bind(dto.start_date)
        .bind(dto.end_date)
        .fetch_one(db)
        .await?;

        Ok(holiday)
    }

    #[instrument]
    pub async fn list(
        db: &PgPool,
        user_id: Uuid,
        school_year_id: Option<Uuid>,
    ) -> Result<Vec<Holiday>, AppError> {
        let holidays = sqlx::query_as::<_, Holiday>(
            "SELECT id, user_id, school_year_id, name, start_date, end_date
             FROM holidays
             WHERE user_id = $1 AND ($2::UUID IS NULL OR school_year_id = $2)
             ORDER BY start_date",
        )
        .bind(user_id)
        .bind(school_year_id)
        .fetch_all(db)
        .await?;

        Ok(holidays)
    }

    #[instrument]
    pub async fn delete(db: &PgPool, user_id: Uuid, holiday_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM holidays WHERE id = $1 AND user_id = $2")
            .bind(holiday_id)
            .bind(user_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Holiday not found")));
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

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_and_list_by_school_year(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let year = create_school_year(&pool, user).await;
        let other_year = create_school_year(&pool, user).await;

        HolidayService::create(
            &pool,
            user,
            CreateHolidayDto {
                school_year_id: year,
                name: "Herbstferien".to_string(),
                start_date: "2025-10-13".parse().unwrap(),
                end_date: "2025-10-24".parse().unwrap(),
            },
        )
        .await
        .unwrap();

        let in_year = HolidayService::list(&pool, user, Some(year)).await.unwrap();
        let in_other = HolidayService::list(&pool, user, Some(other_year)).await.unwrap();

        assert_eq!(in_year.len(), 1);
        assert!(in_other.is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_delete_unknown_holiday_is_not_found(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;

        let err = HolidayService::delete(&pool, user, Uuid::new_v4())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
