use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::Notification;

pub struct NotificationService;

impl NotificationService {
    /// Inserts a notification for `recipient_id`. Used by the share and
    /// lesson services when a shared plan changes.
    #[instrument(skip(title, message, class_name, from_user_name))]
    pub async fn create(
        db: &PgPool,
        recipient_id: Uuid,
        notification_type: &str,
        title: &str,
        message: &str,
        class_name: &str,
        from_user_name: &str,
    ) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO notifications (user_id, type, title, message, class_name, from_user_name)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(recipient_id)
        .bind(notification_type)
        .bind(title)
        .bind(message)
        .bind(class_name)
        .bind(from_user_name)
        .execute(db)
        .await?;

        Ok(())
    }

    #[instrument]
    pub async fn list(db: &PgPool, user_id: Uuid) -> Result<Vec<Notification>, AppError> {
        let notifications = sqlx::query_as::<_, Notification>(
            "SELECT id, user_id, type, title, message, class_name, from_user_name, is_read, created_at
             FROM notifications WHERE user_id = $1
             ORDER BY created_at DESC
             LIMIT 50",
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;

        Ok(notifications)
    }

    #[instrument]
    pub async fn unread_count(db: &PgPool, user_id: Uuid) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND is_read = FALSE",
        )
        .bind(user_id)
        .fetch_one(db)
        .await?;

        Ok(count)
    }

    #[instrument]
    pub async fn mark_read(
        db: &PgPool,
        user_id: Uuid,
        notification_id: Uuid,
    ) -> Result<(), AppError> {
        let result =
            sqlx::query("UPDATE notifications SET is_read = TRUE WHERE id = $1 AND user_id = $2")
                .bind(notification_id)
                .bind(user_id)
                .execute(db)
                .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Benachrichtigung nicht gefunden"
            )));
        }

        Ok(())
    }

    #[instrument]
    pub async fn mark_all_read(db: &PgPool, user_id: Uuid) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE notifications SET is_read = TRUE WHERE user_id = $1 AND is_read = FALSE",
        )
        .bind(user_id)
        .execute(db)
        .await?;

        Ok(())
    }

    #[instrument]
    pub async fn delete(
        db: &PgPool,
        user_id: Uuid,
        notification_id: Uuid,
    ) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1 AND user_id = $2")
            .bind(notification_id)
            .bind(user_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Benachrichtigung nicht gefunden"
            )));
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

    #[sqlx::test(migrations = "./migrations")]
    async fn test_unread_count_and_mark_read(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;

        NotificationService::create(
            &pool,
            user,
            "share_new",
            "Neuer Arbeitsplan geteilt",
            "Tom hat den Arbeitsplan '8a - Mathematik' mit Ihnen geteilt",
            "8a - Mathematik",
            "Tom Test",
        )
        .await
        .unwrap();

        assert_eq!(NotificationService::unread_count(&pool, user).await.unwrap(), 1);

        let notifications = NotificationService::list(&pool, user).await.unwrap();
        NotificationService::mark_read(&pool, user, notifications[0].id)
            .await
            .unwrap();

        assert_eq!(NotificationService::unread_count(&pool, user).await.unwrap(), 0);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_mark_read_foreign_notification_is_not_found(pool: PgPool) {
        let maria = create_user(&pool, "maria@schule.de").await;
        let tom = create_user(&pool, "tom@schule.de").await;

        NotificationService::create(&pool, maria, "share_new", "t", "m", "", "")
            .await
            .unwrap();
        let notifications = NotificationService::list(&pool, maria).await.unwrap();

        let err = NotificationService::mark_read(&pool, tom, notifications[0].id)
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_mark_all_read(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;

        for _ in 0..3 {
            NotificationService::create(&pool, user, "share_edit", "t", "m", "", "")
                .await
                .unwrap();
        }

        NotificationService::mark_all_read(&pool, user).await.unwrap();

        assert_eq!(NotificationService::unread_count(&pool, user).await.unwrap(), 0);
    }
}
