use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::history::service::HistoryService;
use crate::utils::errors::AppError;

use super::model::{WorkplanEntry, WorkplanEntryDto, WorkplanRangeParams};

const ENTRY_COLUMNS: &str = "id, class_subject_id, date, period, unterrichtseinheit, lehrplan, \
     stundenthema, updated_by, created_at, updated_at";

pub struct WorkplanService;

impl WorkplanService {
    #[instrument]
    pub async fn list(
        db: &PgPool,
        class_subject_id: Uuid,
        params: WorkplanRangeParams,
    ) -> Result<Vec<WorkplanEntry>, AppError> {
        let entries = sqlx::query_as::<_, WorkplanEntry>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM workplan_entries
             WHERE class_subject_id = $1
               AND ($2::DATE IS NULL OR date >= $2)
               AND ($3::DATE IS NULL OR date <= $3)
             ORDER BY date, period
             LIMIT 1000"
        ))
        .bind(class_subject_id)
        .bind(params.start)
        .bind(params.end)
        .fetch_all(db)
        .await?;

        Ok(entries)
    }

    /// Upsert on the (class, date, period) slot key.
    #[instrument(skip(dto))]
    pub async fn save_entry(
        db: &PgPool,
        user_id: Uuid,
        class_subject_id: Uuid,
        dto: WorkplanEntryDto,
    ) -> Result<WorkplanEntry, AppError> {
        let entry = sqlx::query_as::<_, WorkplanEntry>(&format!(
            "INSERT INTO workplan_entries
                 (class_subject_id, date, period, unterrichtseinheit, lehrplan,
                  stundenthema, updated_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (class_subject_id, date, period) DO UPDATE
             SET unterrichtseinheit = EXCLUDED.unterrichtseinheit,
                 lehrplan = EXCLUDED.lehrplan,
                 stundenthema = EXCLUDED.stundenthema,
                 updated_by = EXCLUDED.updated_by,
                 updated_at = NOW()
             RETURNING {ENTRY_COLUMNS}"
        ))
        .bind(class_subject_id)
        .bind(dto.date)
        .bind(dto.period)
        .bind(&dto.unterrichtseinheit)
        .bind(&dto.lehrplan)
        .bind(&dto.stundenthema)
        .bind(user_id)
        .fetch_one(db)
        .await?;

        Ok(entry)
    }

    #[instrument(skip(entries))]
    pub async fn save_bulk(
        db: &PgPool,
        user_id: Uuid,
        class_subject_id: Uuid,
        entries: Vec<WorkplanEntryDto>,
    ) -> Result<usize, AppError> {
        let saved = entries.len();

        for dto in entries {
            Self::save_entry(db, user_id, class_subject_id, dto).await?;
        }

        HistoryService::log(
            db,
            user_id,
            "bulk_create",
            "workplan",
            class_subject_id,
            &format!("{saved} Einträge gespeichert"),
        )
        .await?;

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
            "INSERT INTO class_subjects (user_id, school_year_id, name, subject)
             VALUES ($1, $2, '8a', 'Mathematik')
             RETURNING id",
        )
        .bind(user_id)
        .bind(year)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    fn entry(date: &str, period: i32, einheit: &str) -> WorkplanEntryDto {
        WorkplanEntryDto {
            date: date.parse().unwrap(),
            period,
            unterrichtseinheit: einheit.to_string(),
            lehrplan: String::new(),
            stundenthema: String::new(),
        }
    }

    #[test]
    fn test_bulk_dto_validates_nested_entries() {
        use validator::Validate;

        use crate::modules::workplan::model::WorkplanBulkSaveDto;

        let empty = WorkplanBulkSaveDto { entries: vec![] };
        assert!(empty.validate().is_err());

        let out_of_range = WorkplanBulkSaveDto {
            entries: vec![entry("2025-09-01", 11, "Bruchrechnung")],
        };
        assert!(out_of_range.validate().is_err());

        let ok = WorkplanBulkSaveDto {
            entries: vec![entry("2025-09-01", 2, "Bruchrechnung")],
        };
        assert!(ok.validate().is_ok());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_save_entry_upserts_on_slot_key(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let class = create_class(&pool, user).await;

        let first = WorkplanService::save_entry(&pool, user, class, entry("2025-09-01", 3, "Brüche"))
            .await
            .unwrap();
        let second =
            WorkplanService::save_entry(&pool, user, class, entry("2025-09-01", 3, "Dezimalzahlen"))
                .await
                .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.unterrichtseinheit, "Dezimalzahlen");

        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM workplan_entries WHERE class_subject_id = $1",
        )
        .bind(class)
        .fetch_one(&pool)
        .await
        .unwrap();

        assert_eq!(count, 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_bulk_save_logs_history(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let class = create_class(&pool, user).await;

        let saved = WorkplanService::save_bulk(
            &pool,
            user,
            class,
            vec![
                entry("2025-09-01", 1, "Brüche"),
                entry("2025-09-01", 2, "Brüche"),
                entry("2025-09-03", 1, "Geometrie"),
            ],
        )
        .await
        .unwrap();

        assert_eq!(saved, 3);

        let details = sqlx::query_scalar::<_, String>(
            "SELECT details FROM history WHERE entity_type = 'workplan' AND entity_id = $1",
        )
        .bind(class)
        .fetch_one(&pool)
        .await
        .unwrap();

        assert_eq!(details, "3 Einträge gespeichert");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_list_respects_date_range(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let class = create_class(&pool, user).await;

        for (date, period) in [("2025-09-01", 1), ("2025-09-10", 1), ("2025-09-20", 1)] {
            WorkplanService::save_entry(&pool, user, class, entry(date, period, "x"))
                .await
                .unwrap();
        }

        let entries = WorkplanService::list(
            &pool,
            class,
            WorkplanRangeParams {
                start: Some("2025-09-05".parse().unwrap()),
                end: Some("2025-09-15".parse().unwrap()),
            },
        )
        .await
        .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date.to_string(), "2025-09-10");
    }
}
