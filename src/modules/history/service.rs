use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{HistoryEntry, HistoryQueryParams};

pub struct HistoryService;

impl HistoryService {
    /// Appends an audit row. Called from the services that mutate
    /// user-visible entities.
    #[instrument(skip(details))]
    pub async fn log(
        db: &PgPool,
        user_id: Uuid,
        action: &str,
        entity_type: &str,
        entity_id: Uuid,
        details: &str,
    ) -> Result<(), AppError> {
        let user_name = sqlx::query_scalar::<_, String>("SELECT name FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(db)
            .await?
            .unwrap_or_else(|| "Unbekannt".to_string());

        sqlx::query(
            "INSERT INTO history (user_id, user_name, action, entity_type, entity_id, details)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(user_id)
        .bind(&user_name)
        .bind(action)
        .bind(entity_type)
        .bind(entity_id)
        .bind(details)
        .execute(db)
        .await?;

        Ok(())
    }

    #[instrument]
    pub async fn list(
        db: &PgPool,
        user_id: Uuid,
        params: HistoryQueryParams,
    ) -> Result<Vec<HistoryEntry>, AppError> {
        let limit = params.limit.unwrap_or(50).clamp(1, 500);

        let entries = sqlx::query_as::<_, HistoryEntry>(
            "SELECT id, user_id, user_name, action, entity_type, entity_id, details, created_at
             FROM history
             WHERE user_id = $1
               AND ($2::TEXT IS NULL OR entity_type = $2)
               AND ($3::UUID IS NULL OR entity_id = $3)
             ORDER BY created_at DESC
             LIMIT $4",
        )
        .bind(user_id)
        .bind(params.entity_type)
        .bind(params.entity_id)
        .bind(limit)
        .fetch_all(db)
        .await?;

        Ok(entries)
    }

    /// History of one class plus all of its lessons' rows, across all users
    /// who touched the shared plan.
    #[instrument]
    pub async fn list_for_class(
        db: &PgPool,
        class_subject_id: Uuid,
    ) -> Result<Vec<HistoryEntry>, AppError> {
        let entries = sqlx::query_as::<_, HistoryEntry>(
            "SELECT id, user_id, user_name, action, entity_type, entity_id, details, created_at
             FROM history
             WHERE (entity_type = 'class' AND entity_id = $1)
                OR (entity_type = 'lesson' AND entity_id IN
                    (SELECT id FROM lessons WHERE class_subject_id = $1))
             ORDER BY created_at DESC
             LIMIT 100",
        )
        .bind(class_subject_id)
        .fetch_all(db)
        .await?;

        Ok(entries)
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

    #[sqlx::test(migrations = "./migrations")]
    async fn test_log_denormalizes_user_name(pool: PgPool) {
        let user_id = create_user(&pool, "maria@schule.de").await;
        let entity_id = Uuid::new_v4();

        HistoryService::log(&pool, user_id, "create", "school_year", entity_id, "angelegt")
            .await
            .unwrap();

        let entries = HistoryService::list(
            &pool,
            user_id,
            HistoryQueryParams {
                entity_type: None,
                entity_id: None,
                limit: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].user_name, "Maria Muster");
        assert_eq!(entries[0].action, "create");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_list_filters_by_entity(pool: PgPool) {
        let user_id = create_user(&pool, "maria@schule.de").await;
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        HistoryService::log(&pool, user_id, "create", "class", a, "")
            .await
            .unwrap();
        HistoryService::log(&pool, user_id, "create", "todo", b, "")
            .await
            .unwrap();

        let entries = HistoryService::list(
            &pool,
            user_id,
            HistoryQueryParams {
                entity_type: Some("class".to_string()),
                entity_id: None,
                limit: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_id, a);
    }
}
